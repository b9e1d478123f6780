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

//! MSQ block framing: disambiguating the three block variants by inspecting
//! the first four (and sometimes eight) bytes of a stream.

use std::io::{Read, Write};

use crate::error::{unexpected_eof, write_failed, Result, WastelandError};

const CPA_ANIMATION_MAGIC: [u8; 4] = [0x08, 0x67, 0x01, 0x00];

/// The three MSQ block variants a stream can open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MsqBlockType {
    Uncompressed,
    Compressed,
    CpaAnimation,
}

/// A decoded MSQ header. `size` is 0 for `Uncompressed` blocks (the
/// reference format carries no size field for them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MsqHeader {
    pub block_type: MsqBlockType,
    pub disk: u8,
    pub size: u32,
}

impl MsqHeader {
    /// Reads a header, consuming 4 or 8 bytes depending on variant.
    pub fn read<R: Read>(stream: &mut R) -> Result<Self> {
        let mut b = [0u8; 4];
        stream.read_exact(&mut b).map_err(unexpected_eof)?;

        if b[0] == b'm' && b[1] == b's' && b[2] == b'q' && (b[3] == b'0' || b[3] == b'1') {
            return Ok(MsqHeader {
                block_type: MsqBlockType::Uncompressed,
                disk: b[3] - b'0',
                size: 0,
            });
        }

        let size = u32::from_le_bytes(b);
        let mut b2 = [0u8; 4];
        stream.read_exact(&mut b2).map_err(unexpected_eof)?;

        if b2[0] == b'm' && b2[1] == b's' && b2[2] == b'q' && (b2[3] == 0 || b2[3] == 1) {
            return Ok(MsqHeader {
                block_type: MsqBlockType::Compressed,
                disk: b2[3],
                size,
            });
        }

        if b2 == CPA_ANIMATION_MAGIC {
            return Ok(MsqHeader {
                block_type: MsqBlockType::CpaAnimation,
                disk: 0,
                size,
            });
        }

        let mut found = b.to_vec();
        found.extend_from_slice(&b2);
        Err(WastelandError::BadMagic { found })
    }

    /// Reads a header and requires it to be `expected`, else
    /// [`WastelandError::BadBlockType`].
    pub fn read_expecting<R: Read>(stream: &mut R, expected: MsqBlockType) -> Result<Self> {
        let header = Self::read(stream)?;
        if header.block_type != expected {
            return Err(WastelandError::BadBlockType {
                expected,
                found: header.block_type,
            });
        }
        Ok(header)
    }

    /// Writes the header in the same byte layout [`Self::read`] accepts.
    pub fn write<W: Write>(&self, stream: &mut W) -> Result<()> {
        match self.block_type {
            MsqBlockType::Uncompressed => {
                stream
                    .write_all(&[b'm', b's', b'q', b'0' + self.disk])
                    .map_err(write_failed)?;
            }
            MsqBlockType::Compressed => {
                stream
                    .write_all(&self.size.to_le_bytes())
                    .map_err(write_failed)?;
                stream
                    .write_all(&[b'm', b's', b'q', self.disk])
                    .map_err(write_failed)?;
            }
            MsqBlockType::CpaAnimation => {
                stream
                    .write_all(&self.size.to_le_bytes())
                    .map_err(write_failed)?;
                stream
                    .write_all(&CPA_ANIMATION_MAGIC)
                    .map_err(write_failed)?;
            }
        }
        Ok(())
    }
}
