mod common;

use std::io::Cursor;

use wasteland_assets::{tiles, Raster};

fn sample_tile(seed: u8) -> Raster {
    let mut tile = Raster::new(tiles::TILE_WIDTH, tiles::TILE_HEIGHT);
    for (i, p) in tile.pixels.iter_mut().enumerate() {
        *p = ((i as u8).wrapping_add(seed)) % 16;
    }
    tile
}

#[test]
fn a_stream_of_tilesets_round_trips() {
    common::init();

    let tilesets = vec![
        vec![sample_tile(0), sample_tile(11)],
        vec![sample_tile(1)],
        vec![sample_tile(2), sample_tile(3), sample_tile(4)],
    ];

    let mut buf = Vec::new();
    tiles::encode(&mut buf, &tilesets).unwrap();

    let mut cursor = Cursor::new(buf);
    let decoded = tiles::decode(&mut cursor).unwrap();
    assert_eq!(decoded, tilesets);
}

#[test]
fn an_empty_stream_decodes_to_no_tilesets() {
    common::init();

    let mut cursor = Cursor::new(Vec::<u8>::new());
    let decoded = tiles::decode(&mut cursor).unwrap();
    assert!(decoded.is_empty());
}
