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

//! MSB-first bit-level I/O over a byte stream, with an accumulator that
//! straddles byte boundaries.
//!
//! [`BitReader`] and [`BitWriter`] each carry their own one-byte
//! accumulator and mask, mirroring the `dataByte`/`dataMask` out-parameters
//! threaded through the original C implementation's `wlReadBit`/
//! `wlWriteBit`.

use std::io::{Read, Write};

use crate::error::{unexpected_eof, write_failed, Result, WastelandError};

/// Reads individual bits and bytes from an underlying [`Read`], MSB first.
pub struct BitReader<'a, R: Read> {
    stream: &'a mut R,
    byte: u8,
    mask: u8,
}

impl<'a, R: Read> BitReader<'a, R> {
    pub fn new(stream: &'a mut R) -> Self {
        Self {
            stream,
            byte: 0,
            mask: 0,
        }
    }

    /// Reads a single bit, pulling a fresh byte from the stream when the
    /// mask has been exhausted.
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.mask == 0 {
            let mut buf = [0u8; 1];
            self.stream.read_exact(&mut buf).map_err(unexpected_eof)?;
            self.byte = buf[0];
            self.mask = 0x80;
        }
        let bit = self.byte & self.mask;
        self.mask >>= 1;
        Ok(if bit != 0 { 1 } else { 0 })
    }

    /// Reads a whole byte, MSB first, via eight calls to [`Self::read_bit`].
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()?;
        }
        Ok(byte)
    }

    /// Byte-aligned little-endian u16 read. Does not touch the bit
    /// accumulator; callers must be at a byte boundary.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.stream.read_exact(&mut buf).map_err(unexpected_eof)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Byte-aligned little-endian u32 read.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.stream.read_exact(&mut buf).map_err(unexpected_eof)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads `n` raw bytes, bypassing the bit accumulator.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.stream.read_exact(&mut buf).map_err(unexpected_eof)?;
        Ok(buf)
    }
}

/// Writes individual bits and bytes to an underlying [`Write`], MSB first.
pub struct BitWriter<'a, W: Write> {
    stream: &'a mut W,
    byte: u8,
    mask: u8,
}

impl<'a, W: Write> BitWriter<'a, W> {
    pub fn new(stream: &'a mut W) -> Self {
        Self {
            stream,
            byte: 0,
            mask: 0,
        }
    }

    /// Writes a single bit, flushing the accumulator to the stream once a
    /// full byte has accumulated.
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        self.byte <<= 1;
        self.byte |= bit & 1;
        self.mask = if self.mask == 0 { 1 } else { self.mask << 1 };
        if self.mask == 0x80 {
            self.stream
                .write_all(&[self.byte])
                .map_err(write_failed)?;
            self.byte = 0;
            self.mask = 0;
        }
        Ok(())
    }

    /// Writes a whole byte, MSB first, via eight calls to [`Self::write_bit`].
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1)?;
        }
        Ok(())
    }

    /// Pads an in-progress byte with `bit` until it flushes. A no-op at a
    /// byte boundary. Every bit-encoded block must call this before the
    /// stream returns to byte-aligned data.
    pub fn fill_byte(&mut self, bit: u8) -> Result<()> {
        while self.mask != 0 {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Byte-aligned little-endian u32 write. Does not touch the bit
    /// accumulator; callers must be at a byte boundary.
    pub fn write_u32_le(&mut self, dword: u32) -> Result<()> {
        self.stream
            .write_all(&dword.to_le_bytes())
            .map_err(write_failed)
    }

    /// Writes raw bytes, bypassing the bit accumulator.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.stream.write_all(data).map_err(write_failed)
    }
}

/// Used by callers that need to surface a bad-argument error without going
/// through a stream at all (e.g. odd picture width).
pub(crate) fn bad_argument(msg: impl Into<String>) -> WastelandError {
    WastelandError::BadArgument(msg.into())
}
