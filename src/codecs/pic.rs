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

//! The full-screen 288x128 picture format: raw nibble-packed pixels with no
//! header, whitened with VXor.

use std::io::{Read, Write};

use log::trace;

use crate::bitio::bad_argument;
use crate::error::{unexpected_eof, write_failed, Result};
use crate::raster::Raster;

pub const WIDTH: usize = 288;
pub const HEIGHT: usize = 128;

/// Reads a PIC raster from a raw, header-less byte stream.
pub fn decode<R: Read>(reader: &mut R) -> Result<Raster> {
    let mut bytes = vec![0u8; WIDTH * HEIGHT / 2];
    reader.read_exact(&mut bytes).map_err(unexpected_eof)?;
    let mut raster = Raster::from_nibble_packed(WIDTH, HEIGHT, &bytes);
    raster.vxor_decode();
    trace!("pic: decoded {WIDTH}x{HEIGHT} raster");
    Ok(raster)
}

/// Writes `raster` as a raw PIC byte stream. `raster` must be exactly
/// 288x128.
pub fn encode<W: Write>(writer: &mut W, raster: &Raster) -> Result<()> {
    if raster.width != WIDTH || raster.height != HEIGHT {
        return Err(bad_argument(format!(
            "PIC raster must be {WIDTH}x{HEIGHT}, got {}x{}",
            raster.width, raster.height
        )));
    }
    let mut whitened = raster.clone();
    whitened.vxor_encode();
    writer
        .write_all(&whitened.to_nibble_packed())
        .map_err(write_failed)
}
