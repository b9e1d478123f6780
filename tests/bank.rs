mod common;

use std::io::Cursor;

use wasteland_assets::{bank, Raster};

#[test]
fn font_smoke_all_index_one_is_5504_bytes_of_plane0_set() {
    common::init();

    let glyphs: Vec<Raster> = (0..bank::FONT_GLYPH_COUNT)
        .map(|_| {
            let mut glyph = Raster::new(bank::FONT_WIDTH, bank::FONT_HEIGHT);
            for p in glyph.pixels.iter_mut() {
                *p = 1;
            }
            glyph
        })
        .collect();

    let mut buf = Vec::new();
    bank::write_font(&mut buf, &glyphs).unwrap();
    assert_eq!(buf.len(), 5504);

    for glyph_bytes in buf.chunks(4 * bank::FONT_HEIGHT) {
        let (plane0, rest) = glyph_bytes.split_at(bank::FONT_HEIGHT);
        assert!(plane0.iter().all(|&b| b == 0xFF));
        assert!(rest.iter().all(|&b| b == 0x00));
    }

    let mut cursor = Cursor::new(buf);
    let decoded = bank::read_font(&mut cursor).unwrap();
    assert_eq!(decoded, glyphs);
}

#[test]
fn fully_transparent_sprites_encode_an_all_ones_mask_stream() {
    common::init();

    let images: Vec<Raster> = (0..bank::SPRITE_COUNT)
        .map(|_| {
            let mut image = Raster::new(bank::SPRITE_WIDTH, bank::SPRITE_HEIGHT);
            for p in image.pixels.iter_mut() {
                *p = 0x10;
            }
            image
        })
        .collect();

    let mut sprite_buf = Vec::new();
    let mut mask_buf = Vec::new();
    bank::write_sprites(&mut sprite_buf, &mut mask_buf, &images).unwrap();

    // The mask plane is not inverted, so every transparent pixel sets its bit.
    assert!(mask_buf.iter().all(|&b| b == 0xFF));
    assert_eq!(mask_buf.len(), bank::SPRITE_COUNT * bank::SPRITE_HEIGHT * 2);

    let mut sprite_cursor = Cursor::new(sprite_buf);
    let mut mask_cursor = Cursor::new(mask_buf);
    let decoded = bank::read_sprites(&mut sprite_cursor, &mut mask_cursor).unwrap();
    assert_eq!(decoded, images);
}

#[test]
fn cursor_bank_round_trips() {
    common::init();

    let mut images: Vec<Raster> = (0..bank::CURSOR_COUNT)
        .map(|_| Raster::new(bank::CURSOR_WIDTH, bank::CURSOR_HEIGHT))
        .collect();
    for (i, image) in images.iter_mut().enumerate() {
        for y in 0..bank::CURSOR_HEIGHT {
            for x in 0..bank::CURSOR_WIDTH {
                let value = if (x + y + i) % 4 == 0 {
                    0x10
                } else {
                    ((x + y) % 16) as u8
                };
                image.set(x, y, value);
            }
        }
    }

    let mut buf = Vec::new();
    bank::write_cursors(&mut buf, &images).unwrap();
    let mut cursor = Cursor::new(buf);
    let decoded = bank::read_cursors(&mut cursor).unwrap();
    assert_eq!(decoded, images);
}
