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

//! ALLPICS multi-scene animations: a stream of independent animations, each
//! a 96x84 base frame plus a Huffman-coded instruction list and update
//! list.
//!
//! Instructions and updates are both carried the same way: a 16-bit byte
//! count, that many Huffman-coded raw bytes, then the raw bytes are parsed
//! with plain indexing (no further Huffman calls) into sentinel-delimited
//! sets.

use std::io::{Read, Write};

use log::debug;

use crate::bitio::{bad_argument, BitReader, BitWriter};
use crate::error::{Result, WastelandError};
use crate::huffman::Tree;
use crate::msq::{MsqBlockType, MsqHeader};
use crate::raster::Raster;

pub const WIDTH: usize = 96;
pub const HEIGHT: usize = 84;

const INSTRUCTION_SENTINEL: u8 = 0xFF;
const UPDATE_SENTINEL: [u8; 2] = [0xFF, 0xFF];

/// A single `{delay, update index}` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PicsInstruction {
    pub delay: u8,
    pub update: u8,
}

/// A run of per-pixel XOR values applied to the raster starting at `(x,
/// y)`, left to right with no row wrap (the quantity is `pixel_xors.len()`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PicsUpdate {
    pub x: usize,
    pub y: usize,
    pub pixel_xors: Vec<u8>,
}

/// One independent animation: a base frame plus its instruction and update
/// sets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PicsAnimation {
    pub base_frame: Raster,
    pub instructions: Vec<Vec<PicsInstruction>>,
    pub updates: Vec<Vec<PicsUpdate>>,
}

/// Reads every animation in the stream until a clean EOF ends the sequence.
pub fn decode<R: Read>(reader: &mut R) -> Result<Vec<PicsAnimation>> {
    let mut animations = Vec::new();
    loop {
        match read_one_animation(reader) {
            Ok(animation) => animations.push(animation),
            Err(WastelandError::UnexpectedEof) => break,
            Err(e) => return Err(e),
        }
    }
    debug!("pics: decoded {} animation(s)", animations.len());
    Ok(animations)
}

fn read_one_animation<R: Read>(reader: &mut R) -> Result<PicsAnimation> {
    MsqHeader::read_expecting(reader, MsqBlockType::Compressed)?;
    let base_frame = {
        let mut bit_reader = BitReader::new(reader);
        let tree = Tree::read(&mut bit_reader)?;
        let bytes = tree.read_block(&mut bit_reader, WIDTH * HEIGHT / 2)?;
        let mut raster = Raster::from_nibble_packed(WIDTH, HEIGHT, &bytes);
        raster.vxor_decode();
        raster
    };

    MsqHeader::read_expecting(reader, MsqBlockType::Compressed)?;
    let mut bit_reader = BitReader::new(reader);
    let tree = Tree::read(&mut bit_reader)?;
    let instructions = read_instructions(&tree, &mut bit_reader)?;
    let updates = read_updates(&tree, &mut bit_reader)?;

    Ok(PicsAnimation {
        base_frame,
        instructions,
        updates,
    })
}

fn read_instructions<R: Read>(
    tree: &Tree,
    bit_reader: &mut BitReader<R>,
) -> Result<Vec<Vec<PicsInstruction>>> {
    let size = tree.read_u16_le(bit_reader)? as usize;
    let data = tree.read_block(bit_reader, size)?;

    let mut sets = Vec::new();
    let mut current: Option<Vec<PicsInstruction>> = None;
    let mut i = 0;
    while i < data.len() {
        if data[i] == INSTRUCTION_SENTINEL {
            if let Some(set) = current.take() {
                sets.push(set);
            }
            i += 1;
            continue;
        }
        if i + 1 >= data.len() {
            return Err(bad_argument("truncated PICS instruction"));
        }
        current.get_or_insert_with(Vec::new).push(PicsInstruction {
            delay: data[i],
            update: data[i + 1],
        });
        i += 2;
    }
    Ok(sets)
}

fn read_updates<R: Read>(tree: &Tree, bit_reader: &mut BitReader<R>) -> Result<Vec<Vec<PicsUpdate>>> {
    let size = tree.read_u16_le(bit_reader)? as usize;
    let data = tree.read_block(bit_reader, size)?;

    let mut sets = Vec::new();
    let mut current: Option<Vec<PicsUpdate>> = None;
    let mut i = 0;
    while i < data.len() {
        if i + 1 >= data.len() {
            return Err(bad_argument("truncated PICS update"));
        }
        if data[i] == UPDATE_SENTINEL[0] && data[i + 1] == UPDATE_SENTINEL[1] {
            // A sentinel with no pending updates still produces an empty
            // set: one known source file carries an empty update block.
            sets.push(current.take().unwrap_or_default());
            i += 2;
            continue;
        }

        let len = (data[i + 1] >> 4) as usize + 1;
        let tmp = ((data[i + 1] & 0x0f) as usize) << 8 | data[i] as usize;
        i += 2;
        if i + len > data.len() {
            return Err(bad_argument("truncated PICS update run"));
        }
        let x = (tmp * 2) % WIDTH;
        let y = (tmp * 2) / WIDTH;

        let mut pixel_xors = Vec::with_capacity(len * 2);
        for _ in 0..len {
            let byte = data[i];
            pixel_xors.push(byte >> 4);
            pixel_xors.push(byte & 0x0f);
            i += 1;
        }
        current
            .get_or_insert_with(Vec::new)
            .push(PicsUpdate { x, y, pixel_xors });
    }
    Ok(sets)
}

/// Writes a stream of independent animations, one pair of MSQ blocks per
/// animation.
pub fn encode<W: Write>(writer: &mut W, animations: &[PicsAnimation]) -> Result<()> {
    for animation in animations {
        write_one_animation(writer, animation)?;
    }
    Ok(())
}

fn write_one_animation<W: Write>(writer: &mut W, animation: &PicsAnimation) -> Result<()> {
    if animation.base_frame.width != WIDTH || animation.base_frame.height != HEIGHT {
        return Err(bad_argument(format!(
            "PICS base frame must be {WIDTH}x{HEIGHT}, got {}x{}",
            animation.base_frame.width, animation.base_frame.height
        )));
    }

    let mut whitened = animation.base_frame.clone();
    whitened.vxor_encode();
    let base_payload = whitened.to_nibble_packed();

    let base_header = MsqHeader {
        block_type: MsqBlockType::Compressed,
        disk: 0,
        size: base_payload.len() as u32,
    };
    base_header.write(writer)?;
    {
        let base_tree = Tree::build(&base_payload)?;
        let mut bit_writer = BitWriter::new(writer);
        base_tree.write(&mut bit_writer)?;
        base_tree.write_block(&mut bit_writer, &base_payload)?;
        bit_writer.fill_byte(0)?;
    }

    let instruction_bytes = encode_instructions(&animation.instructions);
    let update_bytes = encode_updates(&animation.updates)?;

    let mut script = Vec::new();
    script.extend_from_slice(&(instruction_bytes.len() as u16).to_le_bytes());
    script.extend_from_slice(&instruction_bytes);
    script.extend_from_slice(&(update_bytes.len() as u16).to_le_bytes());
    script.extend_from_slice(&update_bytes);

    let script_header = MsqHeader {
        block_type: MsqBlockType::Compressed,
        disk: 0,
        size: script.len() as u32,
    };
    script_header.write(writer)?;
    let script_tree = Tree::build(&script)?;
    let mut bit_writer = BitWriter::new(writer);
    script_tree.write(&mut bit_writer)?;
    script_tree.write_u16_le(&mut bit_writer, instruction_bytes.len() as u16)?;
    script_tree.write_block(&mut bit_writer, &instruction_bytes)?;
    script_tree.write_u16_le(&mut bit_writer, update_bytes.len() as u16)?;
    script_tree.write_block(&mut bit_writer, &update_bytes)?;
    bit_writer.fill_byte(0)
}

fn encode_instructions(sets: &[Vec<PicsInstruction>]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for set in sets {
        for instruction in set {
            bytes.push(instruction.delay);
            bytes.push(instruction.update);
        }
        bytes.push(INSTRUCTION_SENTINEL);
    }
    bytes
}

fn encode_updates(sets: &[Vec<PicsUpdate>]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for set in sets {
        for update in set {
            if update.pixel_xors.is_empty() || update.pixel_xors.len() % 2 != 0 {
                return Err(bad_argument(
                    "PICS update pixel_xors length must be a non-zero multiple of 2",
                ));
            }
            let len = update.pixel_xors.len() / 2;
            if len > 16 {
                return Err(bad_argument("PICS update run is too long to encode"));
            }
            if update.x % 2 != 0 {
                return Err(bad_argument("PICS update x must be even"));
            }
            let tmp = (update.y * WIDTH + update.x) / 2;
            bytes.push((tmp & 0xff) as u8);
            bytes.push((((len - 1) << 4) | (tmp >> 8)) as u8);
            for pair in update.pixel_xors.chunks_exact(2) {
                bytes.push((pair[0] << 4) | (pair[1] & 0x0f));
            }
        }
        bytes.extend_from_slice(&UPDATE_SENTINEL);
    }
    Ok(bytes)
}
