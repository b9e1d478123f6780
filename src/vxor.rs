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

//! Vertical-XOR whitening: the game's raster scrambling scheme. Each byte
//! is replaced by its XOR with the same-column byte of the row above; the
//! first row is untouched.

/// Decodes `data` (a `width * height` raster, row-major) in place.
pub fn decode(data: &mut [u8], width: usize, height: usize) {
    for y in 0..height {
        for x in 0..width {
            let above = if y == 0 { 0 } else { data[(y - 1) * width + x] };
            data[y * width + x] ^= above;
        }
    }
}

/// Encodes `data` in place. The inverse of [`decode`]: each row's XOR
/// operand is the *original* (pre-encode) pixel of the row above, so a row
/// of scratch space is kept one step behind the write.
pub fn encode(data: &mut [u8], width: usize, height: usize) {
    let mut prev_row = vec![0u8; width];
    for y in 0..height {
        for x in 0..width {
            let byte = data[y * width + x];
            let xor = if y == 0 { 0 } else { prev_row[x] };
            data[y * width + x] = byte ^ xor;
            prev_row[x] = byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_then_encode_is_identity() {
        let width = 8;
        let height = 5;
        let original: Vec<u8> = (0..(width * height) as u8).collect();
        let mut encoded = original.clone();
        encode(&mut encoded, width, height);
        decode(&mut encoded, width, height);
        assert_eq!(encoded, original);
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let width = 6;
        let height = 4;
        let original: Vec<u8> = (0..(width * height) as u8)
            .map(|b| b.wrapping_mul(37))
            .collect();
        let mut round_tripped = original.clone();
        decode(&mut round_tripped, width, height);
        encode(&mut round_tripped, width, height);
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn all_zero_raster_is_fixed_point() {
        let mut data = vec![0u8; 4 * 4];
        encode(&mut data, 4, 4);
        assert!(data.iter().all(|&b| b == 0));
        decode(&mut data, 4, 4);
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn first_row_is_never_modified() {
        let width = 8;
        let height = 3;
        let mut data = vec![0u8; width * height];
        data[0..width].copy_from_slice(&[0, 1, 2, 3, 4, 5, 6, 7]);
        for i in width..width * height {
            data[i] = (i * 3) as u8;
        }
        let first_row = data[0..width].to_vec();

        let mut encoded = data.clone();
        encode(&mut encoded, width, height);
        assert_eq!(&encoded[0..width], first_row.as_slice());

        let mut decoded = data.clone();
        decode(&mut decoded, width, height);
        assert_eq!(&decoded[0..width], first_row.as_slice());
    }
}
