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

//! HTDS tileset archives: a concatenation of MSQ-Compressed blocks, each
//! holding one Huffman-coded, VXor-whitened set of 16x16 tiles.

use std::io::{Read, Write};

use log::debug;

use crate::bitio::{bad_argument, BitReader, BitWriter};
use crate::error::{Result, WastelandError};
use crate::huffman::Tree;
use crate::msq::{MsqBlockType, MsqHeader};
use crate::raster::Raster;

pub const TILE_WIDTH: usize = 16;
pub const TILE_HEIGHT: usize = 16;
const TILE_BYTES: usize = TILE_WIDTH * TILE_HEIGHT / 2;

/// Reads every tileset block until the stream is exhausted. A clean EOF
/// while trying to read the next block's header ends the sequence
/// normally; any other failure (a header that starts but does not finish,
/// or a header of the wrong type) is a real error.
pub fn decode<R: Read>(reader: &mut R) -> Result<Vec<Vec<Raster>>> {
    let mut tilesets = Vec::new();
    loop {
        match read_one_tileset(reader) {
            Ok(tiles) => tilesets.push(tiles),
            Err(WastelandError::UnexpectedEof) => break,
            Err(e) => return Err(e),
        }
    }
    debug!("tiles: decoded {} tileset block(s)", tilesets.len());
    Ok(tilesets)
}

fn read_one_tileset<R: Read>(reader: &mut R) -> Result<Vec<Raster>> {
    let header = MsqHeader::read_expecting(reader, MsqBlockType::Compressed)?;
    let tile_count = (header.size as usize * 2) / (TILE_WIDTH * TILE_HEIGHT);

    let mut bit_reader = BitReader::new(reader);
    let tree = Tree::read(&mut bit_reader)?;

    let mut tiles = Vec::with_capacity(tile_count);
    for _ in 0..tile_count {
        let bytes = tree.read_block(&mut bit_reader, TILE_BYTES)?;
        let mut tile = Raster::from_nibble_packed(TILE_WIDTH, TILE_HEIGHT, &bytes);
        tile.vxor_decode();
        tiles.push(tile);
    }
    Ok(tiles)
}

/// Writes a sequence of tileset blocks, one MSQ-Compressed block per
/// tileset.
pub fn encode<W: Write>(writer: &mut W, tilesets: &[Vec<Raster>]) -> Result<()> {
    for tiles in tilesets {
        write_one_tileset(writer, tiles)?;
    }
    Ok(())
}

fn write_one_tileset<W: Write>(writer: &mut W, tiles: &[Raster]) -> Result<()> {
    for tile in tiles {
        if tile.width != TILE_WIDTH || tile.height != TILE_HEIGHT {
            return Err(bad_argument(format!(
                "tiles must be {TILE_WIDTH}x{TILE_HEIGHT}, got {}x{}",
                tile.width, tile.height
            )));
        }
    }

    let mut payload = Vec::with_capacity(tiles.len() * TILE_BYTES);
    for tile in tiles {
        let mut whitened = tile.clone();
        whitened.vxor_encode();
        payload.extend(whitened.to_nibble_packed());
    }

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
    bit_writer.fill_byte(0)?;
    Ok(())
}
