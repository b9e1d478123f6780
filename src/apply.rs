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

//! Applying decoded animation steps to a raster. Both functions index the
//! raster's flat pixel buffer directly at `y * width + x`, the same
//! arithmetic `wlCpaApplyFrame` and `wlAnimationApply` use, rather than
//! wrapping at row boundaries.

use crate::codecs::cpa::CpaFrame;
use crate::codecs::pics::PicsUpdate;
use crate::raster::Raster;

/// Copies every update cell of `frame` into `raster`, overwriting pixels.
pub fn apply_cpa_frame(raster: &mut Raster, frame: &CpaFrame) {
    for update in &frame.updates {
        let base = update.y * raster.width + update.x;
        raster.pixels[base..base + update.pixels.len()].copy_from_slice(&update.pixels);
    }
}

/// XORs every update in `set` into `raster`, in place.
pub fn apply_pics_update_set(raster: &mut Raster, set: &[PicsUpdate]) {
    for update in set {
        let base = update.y * raster.width + update.x;
        for (i, &xor) in update.pixel_xors.iter().enumerate() {
            raster.pixels[base + i] ^= xor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::cpa::CpaUpdate;

    #[test]
    fn cpa_frame_overwrites_eight_pixels_at_position() {
        let mut raster = Raster::new(16, 4);
        let frame = CpaFrame {
            delay: 1,
            updates: vec![CpaUpdate {
                x: 8,
                y: 1,
                pixels: [1, 2, 3, 4, 5, 6, 7, 8],
            }],
        };
        apply_cpa_frame(&mut raster, &frame);
        for (i, &expected) in frame.updates[0].pixels.iter().enumerate() {
            assert_eq!(raster.get(8 + i, 1), expected);
        }
        assert_eq!(raster.get(0, 1), 0);
    }

    #[test]
    fn pics_update_xors_pixels_in_place() {
        let mut raster = Raster::new(8, 4);
        raster.set(2, 1, 0b0101);
        let set = vec![PicsUpdate {
            x: 2,
            y: 1,
            pixel_xors: vec![0b0011, 0b1111],
        }];
        apply_pics_update_set(&mut raster, &set);
        assert_eq!(raster.get(2, 1), 0b0101 ^ 0b0011);
        assert_eq!(raster.get(3, 1), 0b1111);
    }
}
