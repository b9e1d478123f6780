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

//! An owned W×H 4-bit-index pixel buffer, the common currency every codec
//! in this crate reads into or writes out of.

use crate::vxor;

/// A `width * height` palette-index raster. Bits 0..3 of each byte hold the
/// palette index; formats that carry transparency use bits 4..7 for
/// per-bit transparency flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Allocates a new all-zero raster of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.pixels[y * self.width + x] = value;
    }

    /// Vertical-XOR decode, in place.
    pub fn vxor_decode(&mut self) {
        vxor::decode(&mut self.pixels, self.width, self.height);
    }

    /// Vertical-XOR encode, in place.
    pub fn vxor_encode(&mut self) {
        vxor::encode(&mut self.pixels, self.width, self.height);
    }

    /// Unpacks a `width x height` raster from `width*height/2` bytes, two
    /// nibble-packed pixels per byte (high nibble = left pixel).
    pub(crate) fn from_nibble_packed(width: usize, height: usize, bytes: &[u8]) -> Self {
        let mut raster = Self::new(width, height);
        let mut iter = bytes.iter();
        for y in 0..height {
            for x in (0..width).step_by(2) {
                let byte = *iter.next().expect("caller provides width*height/2 bytes");
                raster.set(x, y, byte >> 4);
                raster.set(x + 1, y, byte & 0x0f);
            }
        }
        raster
    }

    /// Packs this raster into `width*height/2` bytes, the inverse of
    /// [`Self::from_nibble_packed`].
    pub(crate) fn to_nibble_packed(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height / 2);
        for y in 0..self.height {
            for x in (0..self.width).step_by(2) {
                let byte = (self.get(x, y) << 4) | (self.get(x + 1, y) & 0x0f);
                bytes.push(byte);
            }
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_is_zeroed_and_sized() {
        let raster = Raster::new(4, 3);
        assert_eq!(raster.pixels.len(), 12);
        assert!(raster.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn get_set_round_trip() {
        let mut raster = Raster::new(4, 3);
        raster.set(2, 1, 9);
        assert_eq!(raster.get(2, 1), 9);
        assert_eq!(raster.get(0, 0), 0);
    }

    #[test]
    fn nibble_packing_round_trips() {
        let mut raster = Raster::new(4, 2);
        raster.set(0, 0, 0x1);
        raster.set(1, 0, 0xa);
        raster.set(2, 1, 0x3);
        let packed = raster.to_nibble_packed();
        assert_eq!(packed.len(), 4);
        let unpacked = Raster::from_nibble_packed(4, 2, &packed);
        assert_eq!(unpacked, raster);
    }

    #[test]
    fn clone_is_independent() {
        let mut raster = Raster::new(2, 2);
        raster.set(0, 0, 5);
        let clone = raster.clone();
        raster.set(0, 0, 9);
        assert_eq!(clone.get(0, 0), 5);
        assert_eq!(raster.get(0, 0), 9);
    }
}
