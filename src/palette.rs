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

//! The fixed 16-entry EGA palette used by every Wasteland raster format.

/// One (R, G, B) palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

const fn rgb(red: u8, green: u8, blue: u8) -> Rgb {
    Rgb { red, green, blue }
}

/// The 16-color EGA palette, index-for-index as the game's data files
/// assume. Index 0..15 selects a color; a palette index of 16 or greater in
/// a raster means "transparent" for formats that carry transparency.
pub const PALETTE: [Rgb; 16] = [
    rgb(0x00, 0x00, 0x00),
    rgb(0x00, 0x00, 0xaa),
    rgb(0x00, 0xaa, 0x00),
    rgb(0x00, 0xaa, 0xaa),
    rgb(0xaa, 0x00, 0x00),
    rgb(0xaa, 0x00, 0xaa),
    rgb(0xaa, 0x55, 0x00),
    rgb(0xaa, 0xaa, 0xaa),
    rgb(0x55, 0x55, 0x50),
    rgb(0x55, 0x55, 0xff),
    rgb(0x55, 0xff, 0x55),
    rgb(0x55, 0xff, 0xff),
    rgb(0xff, 0x55, 0x55),
    rgb(0xff, 0x55, 0xff),
    rgb(0xff, 0xff, 0x55),
    rgb(0xff, 0xff, 0xff),
];

/// Index (0..15) that marks a pixel as transparent rather than colored, for
/// formats that carry one bit of whole-pixel transparency.
pub const TRANSPARENT_INDEX: u8 = 16;
