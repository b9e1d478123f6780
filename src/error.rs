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
use std::io;

use thiserror::Error;

use crate::msq::MsqBlockType;

/// The flat error taxonomy for every codec in this crate.
///
/// Nothing here is retried by the library; a failing call releases whatever
/// it had allocated and surfaces the error immediately.
#[derive(Debug, Error)]
pub enum WastelandError {
    #[error("unexpected end of stream")]
    UnexpectedEof,

    #[error("unrecognized MSQ block magic: {found:02x?}")]
    BadMagic { found: Vec<u8> },

    #[error("MSQ block has the wrong type for this context: expected {expected:?}, found {found:?}")]
    BadBlockType {
        expected: MsqBlockType,
        found: MsqBlockType,
    },

    #[error("write to the underlying stream failed: {0}")]
    WriteFailed(io::Error),

    #[error("invalid argument: {0}")]
    BadArgument(String),
}

pub type Result<T> = std::result::Result<T, WastelandError>;

/// Maps a write-side I/O failure onto [`WastelandError::WriteFailed`].
pub(crate) fn write_failed(e: io::Error) -> WastelandError {
    WastelandError::WriteFailed(e)
}

/// Maps a read-side I/O failure (including a clean EOF) onto
/// [`WastelandError::UnexpectedEof`]. The reference implementation never
/// distinguishes "EOF" from "other read error" (`fread`/`fgetc` both just
/// fail), so neither do we.
pub(crate) fn unexpected_eof(_: io::Error) -> WastelandError {
    WastelandError::UnexpectedEof
}
