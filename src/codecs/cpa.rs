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

//! CPA single-scene animations: a compressed 288x128 base frame followed by
//! a Huffman-coded animation script of delays and 8-pixel update cells.
//!
//! The update coordinate math below is computed against a 320-pixel stride
//! even though the raster itself is 288 pixels wide. That mismatch is a
//! format constant inherited from the original display resolution, not a
//! bug, and is preserved exactly: `apply_cpa_frame` writes into the flat
//! pixel buffer at `y * 288 + x`, so an update near the end of a row bleeds
//! into the following row the same way the reference decoder's flat array
//! indexing did.

use std::io::{Read, Write};

use log::trace;

use crate::bitio::{bad_argument, BitReader, BitWriter};
use crate::error::Result;
use crate::huffman::Tree;
use crate::msq::{MsqBlockType, MsqHeader};
use crate::raster::Raster;

pub const WIDTH: usize = 288;
pub const HEIGHT: usize = 128;
const STRIDE: usize = 320;
const END_MARKER: u16 = 0xFFFF;

/// One 8-pixel-aligned update cell within a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpaUpdate {
    pub x: usize,
    pub y: usize,
    pub pixels: [u8; 8],
}

/// A single animation frame: a delay and the cells it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpaFrame {
    pub delay: u16,
    pub updates: Vec<CpaUpdate>,
}

/// A complete CPA animation: a base frame plus the frames that update it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpaAnimation {
    pub base_frame: Raster,
    pub frames: Vec<CpaFrame>,
}

/// Reads a two-block CPA animation. Unlike the legacy on-disk reader (which
/// blindly seeks 8 bytes past each header), both MSQ headers are read and
/// validated here.
pub fn decode<R: Read>(reader: &mut R) -> Result<CpaAnimation> {
    let base_frame = decode_base_frame(reader)?;
    let frames = decode_script(reader)?;
    trace!("cpa: decoded {} frame(s)", frames.len());
    Ok(CpaAnimation {
        base_frame,
        frames,
    })
}

fn decode_base_frame<R: Read>(reader: &mut R) -> Result<Raster> {
    MsqHeader::read_expecting(reader, MsqBlockType::Compressed)?;
    let mut bit_reader = BitReader::new(reader);
    let tree = Tree::read(&mut bit_reader)?;
    let bytes = tree.read_block(&mut bit_reader, WIDTH * HEIGHT / 2)?;
    let mut raster = Raster::from_nibble_packed(WIDTH, HEIGHT, &bytes);
    raster.vxor_decode();
    Ok(raster)
}

fn decode_script<R: Read>(reader: &mut R) -> Result<Vec<CpaFrame>> {
    MsqHeader::read_expecting(reader, MsqBlockType::CpaAnimation)?;
    let mut bit_reader = BitReader::new(reader);
    let tree = Tree::read(&mut bit_reader)?;

    // The embedded size-4 field is redundant with the MSQ header's size and
    // is discarded, matching the reference reader's unused read.
    tree.read_u16_le(&mut bit_reader)?;

    let mut frames = Vec::new();
    loop {
        let delay = tree.read_u16_le(&mut bit_reader)?;
        if delay == END_MARKER {
            break;
        }
        let mut updates = Vec::new();
        loop {
            let offset = tree.read_u16_le(&mut bit_reader)?;
            if offset == END_MARKER {
                break;
            }
            let offset = offset as usize * 8;
            let x = offset % STRIDE;
            let y = offset / STRIDE;
            let mut pixels = [0u8; 8];
            for pair in 0..4 {
                let b = tree.read_byte(&mut bit_reader)?;
                pixels[pair * 2] = b >> 4;
                pixels[pair * 2 + 1] = b & 0x0f;
            }
            updates.push(CpaUpdate { x, y, pixels });
        }
        frames.push(CpaFrame { delay, updates });
    }
    Ok(frames)
}

/// Diffs `current` against `previous` (and, for the frame that closes the
/// loop back to the start of the animation, optionally `last`) and returns
/// the `CpaFrame` that reproduces `current` when applied on top of
/// `previous`. An 8-pixel-aligned cell is emitted as a [`CpaUpdate`] if any
/// of its 8 pixels differs from `previous` or, when given, from `last`.
pub fn diff_frame(
    current: &Raster,
    previous: &Raster,
    last: Option<&Raster>,
    delay: u16,
) -> Result<CpaFrame> {
    for (name, raster) in [("current", current), ("previous", previous)]
        .into_iter()
        .chain(last.map(|r| ("last", r)))
    {
        if raster.width != WIDTH || raster.height != HEIGHT {
            return Err(bad_argument(format!(
                "CPA {name} frame must be {WIDTH}x{HEIGHT}, got {}x{}",
                raster.width, raster.height
            )));
        }
    }

    let mut updates = Vec::new();
    for y in 0..HEIGHT {
        for x in (0..WIDTH).step_by(8) {
            let cell = |r: &Raster| {
                let mut pixels = [0u8; 8];
                pixels.copy_from_slice(&r.pixels[y * WIDTH + x..y * WIDTH + x + 8]);
                pixels
            };
            let current_cell = cell(current);
            let changed = current_cell != cell(previous)
                || last.is_some_and(|r| current_cell != cell(r));
            if changed {
                updates.push(CpaUpdate {
                    x,
                    y,
                    pixels: current_cell,
                });
            }
        }
    }
    Ok(CpaFrame { delay, updates })
}

/// Writes a two-block CPA animation.
pub fn encode<W: Write>(writer: &mut W, animation: &CpaAnimation) -> Result<()> {
    if animation.base_frame.width != WIDTH || animation.base_frame.height != HEIGHT {
        return Err(bad_argument(format!(
            "CPA base frame must be {WIDTH}x{HEIGHT}, got {}x{}",
            animation.base_frame.width, animation.base_frame.height
        )));
    }
    for frame in &animation.frames {
        if frame.delay == END_MARKER {
            return Err(bad_argument("CPA frame delay must not be 0xFFFF"));
        }
        for update in &frame.updates {
            if update.x % 8 != 0 || update.x >= STRIDE || update.y >= HEIGHT {
                return Err(bad_argument(format!(
                    "CPA update position ({}, {}) is out of range",
                    update.x, update.y
                )));
            }
        }
    }

    encode_base_frame(writer, &animation.base_frame)?;
    encode_script(writer, &animation.frames)
}

fn encode_base_frame<W: Write>(writer: &mut W, base_frame: &Raster) -> Result<()> {
    let mut whitened = base_frame.clone();
    whitened.vxor_encode();
    let payload = whitened.to_nibble_packed();

    let header = MsqHeader {
        block_type: MsqBlockType::Compressed,
        disk: 0,
        size: payload.len() as u32,
    };
    header.write(writer)?;

    let tree = Tree::build(&payload)?;
    let mut bit_writer = BitWriter::new(writer);
    tree.write(&mut bit_writer)?;
    tree.write_block(&mut bit_writer, &payload)?;
    bit_writer.fill_byte(0)
}

fn encode_script<W: Write>(writer: &mut W, frames: &[CpaFrame]) -> Result<()> {
    let mut raw = Vec::new();
    for frame in frames {
        raw.extend_from_slice(&frame.delay.to_le_bytes());
        for update in &frame.updates {
            let offset = ((update.y * STRIDE + update.x) / 8) as u16;
            raw.extend_from_slice(&offset.to_le_bytes());
            for pair in 0..4 {
                let byte = (update.pixels[pair * 2] << 4) | (update.pixels[pair * 2 + 1] & 0x0f);
                raw.push(byte);
            }
        }
        raw.extend_from_slice(&END_MARKER.to_le_bytes());
    }
    raw.extend_from_slice(&END_MARKER.to_le_bytes());
    raw.extend_from_slice(&[0x00, 0x00]);

    let header_size = 2 + raw.len();
    let embedded_size = (header_size - 4) as u16;
    let mut payload = embedded_size.to_le_bytes().to_vec();
    payload.extend_from_slice(&raw);

    let header = MsqHeader {
        block_type: MsqBlockType::CpaAnimation,
        disk: 0,
        size: payload.len() as u32,
    };
    header.write(writer)?;

    let tree = Tree::build(&payload)?;
    let mut bit_writer = BitWriter::new(writer);
    tree.write(&mut bit_writer)?;
    tree.write_block(&mut bit_writer, &payload)?;
    bit_writer.fill_byte(0)
}
