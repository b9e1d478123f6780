/*
    wasteland-assets

    Copyright 2026 The wasteland-assets authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the "Software"),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.
*/

//! The fixed-shape bit-plane banks: sprites+masks, cursors, and font. All
//! three emit 4 bit-planes MSB-first in rows of 8-pixel strips; they differ
//! in image count, dimensions, and how (or whether) a transparency plane
//! rides alongside the other four.

use std::io::{Read, Write};

use crate::bitio::bad_argument;
use crate::error::{unexpected_eof, write_failed, Result};
use crate::raster::Raster;

pub const SPRITE_COUNT: usize = 10;
pub const SPRITE_WIDTH: usize = 16;
pub const SPRITE_HEIGHT: usize = 16;

pub const CURSOR_COUNT: usize = 8;
pub const CURSOR_WIDTH: usize = 16;
pub const CURSOR_HEIGHT: usize = 16;

pub const FONT_GLYPH_COUNT: usize = 172;
pub const FONT_WIDTH: usize = 8;
pub const FONT_HEIGHT: usize = 8;

fn check_shape(images: &[Raster], count: usize, width: usize, height: usize) -> Result<()> {
    if images.len() != count {
        return Err(bad_argument(format!(
            "expected {count} images, got {}",
            images.len()
        )));
    }
    if images.iter().any(|i| i.width != width || i.height != height) {
        return Err(bad_argument(format!(
            "expected every image to be {width}x{height}"
        )));
    }
    Ok(())
}

/// Reads the 10-sprite bank from its two companion streams: pixel data and
/// transparency masks. Bit plane 3 of each 8-pixel strip is immediately
/// followed, in the masks stream, by the strip's transparency byte (not
/// inverted — a set bit means transparent).
pub fn read_sprites<R: Read, M: Read>(sprites: &mut R, masks: &mut M) -> Result<Vec<Raster>> {
    let mut images: Vec<Raster> = (0..SPRITE_COUNT)
        .map(|_| Raster::new(SPRITE_WIDTH, SPRITE_HEIGHT))
        .collect();

    for image in images.iter_mut() {
        for bit in 0..4u8 {
            for y in 0..SPRITE_HEIGHT {
                for x in (0..SPRITE_WIDTH).step_by(8) {
                    let mut buf = [0u8; 1];
                    sprites.read_exact(&mut buf).map_err(unexpected_eof)?;
                    let byte = buf[0];
                    for pixel in 0..8 {
                        let bitval = (byte >> (7 - pixel)) & 1;
                        let v = image.get(x + pixel, y) | (bitval << bit);
                        image.set(x + pixel, y, v);
                    }

                    if bit == 3 {
                        let mut mask_buf = [0u8; 1];
                        masks.read_exact(&mut mask_buf).map_err(unexpected_eof)?;
                        let mask_byte = mask_buf[0];
                        for pixel in 0..8 {
                            let bitval = (mask_byte >> (7 - pixel)) & 1;
                            let v = image.get(x + pixel, y) | (bitval << 4);
                            image.set(x + pixel, y, v);
                        }
                    }
                }
            }
        }
    }
    Ok(images)
}

/// Writes the 10-sprite bank. `images` must be exactly 10 rasters of
/// 16x16.
pub fn write_sprites<W: Write, M: Write>(
    sprites: &mut W,
    masks: &mut M,
    images: &[Raster],
) -> Result<()> {
    check_shape(images, SPRITE_COUNT, SPRITE_WIDTH, SPRITE_HEIGHT)?;

    for image in images {
        for bit in 0..4u8 {
            for y in 0..SPRITE_HEIGHT {
                for x in (0..SPRITE_WIDTH).step_by(8) {
                    let mut byte = 0u8;
                    for pixel in 0..8 {
                        let bitval = (image.get(x + pixel, y) >> bit) & 1;
                        byte |= bitval << (7 - pixel);
                    }
                    sprites.write_all(&[byte]).map_err(write_failed)?;

                    if bit == 3 {
                        let mut mask_byte = 0u8;
                        for pixel in 0..8 {
                            let bitval = (image.get(x + pixel, y) >> 4) & 1;
                            mask_byte |= bitval << (7 - pixel);
                        }
                        masks.write_all(&[mask_byte]).map_err(write_failed)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Reads the 8-cursor bank from a single stream. For each `(bit, y)` pair
/// the wire order is mask-at-x=8, mask-at-x=0, data-at-x=8, data-at-x=0 —
/// the mask byte is the bitwise complement of the transparency plane.
pub fn read_cursors<R: Read>(stream: &mut R) -> Result<Vec<Raster>> {
    let mut images: Vec<Raster> = (0..CURSOR_COUNT)
        .map(|_| Raster::new(CURSOR_WIDTH, CURSOR_HEIGHT))
        .collect();

    for image in images.iter_mut() {
        for bit in 0..4u8 {
            for y in 0..CURSOR_HEIGHT {
                for is_data in [false, true] {
                    for &x in &[8usize, 0usize] {
                        let mut buf = [0u8; 1];
                        stream.read_exact(&mut buf).map_err(unexpected_eof)?;
                        let byte = buf[0];
                        for pixel in 0..8 {
                            let bitval = (byte >> (7 - pixel)) & 1;
                            if is_data {
                                let v = image.get(x + pixel, y) | (bitval << bit);
                                image.set(x + pixel, y, v);
                            } else {
                                let v = image.get(x + pixel, y) | ((1 - bitval) << (4 + bit));
                                image.set(x + pixel, y, v);
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(images)
}

/// Writes the 8-cursor bank, in the byte order [`read_cursors`] expects.
pub fn write_cursors<W: Write>(stream: &mut W, images: &[Raster]) -> Result<()> {
    check_shape(images, CURSOR_COUNT, CURSOR_WIDTH, CURSOR_HEIGHT)?;

    for image in images {
        for bit in 0..4u8 {
            for y in 0..CURSOR_HEIGHT {
                for is_data in [false, true] {
                    for &x in &[8usize, 0usize] {
                        let mut byte = 0u8;
                        for pixel in 0..8 {
                            let bitval = if is_data {
                                (image.get(x + pixel, y) >> bit) & 1
                            } else {
                                1 - ((image.get(x + pixel, y) >> (4 + bit)) & 1)
                            };
                            byte |= bitval << (7 - pixel);
                        }
                        stream.write_all(&[byte]).map_err(write_failed)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Reads the 172-glyph font bank. No transparency plane.
pub fn read_font<R: Read>(stream: &mut R) -> Result<Vec<Raster>> {
    let mut glyphs: Vec<Raster> = (0..FONT_GLYPH_COUNT)
        .map(|_| Raster::new(FONT_WIDTH, FONT_HEIGHT))
        .collect();

    for glyph in glyphs.iter_mut() {
        for bit in 0..4u8 {
            for y in 0..FONT_HEIGHT {
                let mut buf = [0u8; 1];
                stream.read_exact(&mut buf).map_err(unexpected_eof)?;
                let byte = buf[0];
                for pixel in 0..8 {
                    let bitval = (byte >> (7 - pixel)) & 1;
                    let v = glyph.get(pixel, y) | (bitval << bit);
                    glyph.set(pixel, y, v);
                }
            }
        }
    }
    Ok(glyphs)
}

/// Writes the 172-glyph font bank.
pub fn write_font<W: Write>(stream: &mut W, glyphs: &[Raster]) -> Result<()> {
    check_shape(glyphs, FONT_GLYPH_COUNT, FONT_WIDTH, FONT_HEIGHT)?;

    for glyph in glyphs {
        for bit in 0..4u8 {
            for y in 0..FONT_HEIGHT {
                let mut byte = 0u8;
                for pixel in 0..8 {
                    let bitval = (glyph.get(pixel, y) >> bit) & 1;
                    byte |= bitval << (7 - pixel);
                }
                stream.write_all(&[byte]).map_err(write_failed)?;
            }
        }
    }
    Ok(())
}
