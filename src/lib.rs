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

//! Codecs for the binary asset formats of Wasteland (1988).
//!
//! This crate is a pure codec core: bit-level I/O, vertical-XOR whitening,
//! Huffman coding, MSQ block framing, and the composite on-disk formats
//! built from them (PIC, sprite/cursor/font banks, HTDS tilesets, CPA and
//! ALLPICS animations). It does not parse command lines, touch the
//! filesystem, or decode any raster image format other than Wasteland's
//! own 4-bit-index pixel layout.
//!
//! Every decode function takes a [`std::io::Read`] and every encode
//! function takes a [`std::io::Write`]; none of them seek. Errors are
//! reported through [`WastelandError`].

pub mod apply;
pub mod bitio;
pub mod codecs;
pub mod error;
pub mod huffman;
pub mod msq;
pub mod palette;
pub mod raster;
pub mod vxor;

pub use apply::{apply_cpa_frame, apply_pics_update_set};
pub use error::{Result, WastelandError};
pub use huffman::Tree as HuffmanTree;
pub use msq::{MsqBlockType, MsqHeader};
pub use palette::{Rgb, PALETTE, TRANSPARENT_INDEX};
pub use raster::Raster;

pub use codecs::bank;
pub use codecs::cpa::{self, CpaAnimation, CpaFrame, CpaUpdate};
pub use codecs::pic;
pub use codecs::pics::{self, PicsAnimation, PicsInstruction, PicsUpdate};
pub use codecs::tiles;
