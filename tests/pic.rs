mod common;

use std::io::Cursor;

use wasteland_assets::{pic, Raster};

#[test]
fn a_full_picture_round_trips() {
    common::init();

    let mut raster = Raster::new(pic::WIDTH, pic::HEIGHT);
    for y in 0..pic::HEIGHT {
        for x in 0..pic::WIDTH {
            raster.set(x, y, ((x * 5 + y * 3) % 16) as u8);
        }
    }

    let mut buf = Vec::new();
    pic::encode(&mut buf, &raster).unwrap();
    assert_eq!(buf.len(), pic::WIDTH * pic::HEIGHT / 2);

    let mut cursor = Cursor::new(buf);
    let decoded = pic::decode(&mut cursor).unwrap();
    assert_eq!(decoded, raster);
}

#[test]
fn wrong_sized_raster_is_rejected() {
    common::init();

    let raster = Raster::new(4, 4);
    let mut buf = Vec::new();
    assert!(pic::encode(&mut buf, &raster).is_err());
}
