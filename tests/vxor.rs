mod common;

use wasteland_assets::Raster;

#[test]
fn top_row_is_untouched_by_decode_and_encode() {
    common::init();

    let width = 8;
    let height = 5;
    let mut raster = Raster::new(width, height);
    for x in 0..width {
        raster.set(x, 0, x as u8);
    }
    for y in 1..height {
        for x in 0..width {
            raster.set(x, y, ((x + y) % 16) as u8);
        }
    }

    let mut decoded = raster.clone();
    decoded.vxor_decode();
    for x in 0..width {
        assert_eq!(decoded.get(x, 0), x as u8);
    }

    let mut encoded = raster.clone();
    encoded.vxor_encode();
    for x in 0..width {
        assert_eq!(encoded.get(x, 0), x as u8);
    }
}

#[test]
fn encode_then_decode_is_identity() {
    common::init();

    let mut raster = Raster::new(6, 6);
    for y in 0..6 {
        for x in 0..6 {
            raster.set(x, y, ((x * 3 + y) % 16) as u8);
        }
    }
    let original = raster.clone();

    raster.vxor_encode();
    raster.vxor_decode();
    assert_eq!(raster, original);
}
