/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::gaussian::kernel_weights::{
    FixedPointWeights, WideWeights, Q14_PRECISION, Q14_ROUNDING,
};
use crate::pixel_window::{pixel_window, PixelWindow};

/// Convolves every row of `src` and writes it transposed into `dst`:
/// pixel at `(row, column)` lands at `dst[height * column + row]`.
///
/// Same arithmetic as the SSE pass, one channel at a time.
pub(crate) fn horizontal_pass_q14(
    weights: &FixedPointWeights,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
) {
    let mut scratch = PixelWindow::default();
    for (y, row) in src.chunks_exact(width).take(height).enumerate() {
        for x in 0..width {
            let window = pixel_window(row, x, &mut scratch);
            let mut acc = [Q14_ROUNDING; 4];
            for (&px, &weight) in window.iter().zip(weights.taps.iter()) {
                for (dst, &v) in acc.iter_mut().zip(px.to_ne_bytes().iter()) {
                    *dst += v as i32 * weight as i32;
                }
            }
            let rgba = acc.map(|v| (v >> Q14_PRECISION).clamp(0, 255) as u8);
            dst[height * x + y] = u32::from_ne_bytes(rgba);
        }
    }
}

/// Float flavour of [horizontal_pass_q14].
///
/// Even and odd taps are accumulated apart and added in the end, the way
/// the AVX pass splits them between register halves.
pub(crate) fn horizontal_pass_f32(
    weights: &WideWeights,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
) {
    let mut scratch = PixelWindow::default();
    for (y, row) in src.chunks_exact(width).take(height).enumerate() {
        for x in 0..width {
            let window = pixel_window(row, x, &mut scratch);
            let mut even = [0f32; 4];
            let mut odd = [0f32; 4];
            for (pixels, taps) in window.chunks_exact(2).zip(weights.taps.chunks_exact(2)) {
                let p0 = pixels[0].to_ne_bytes();
                let p1 = pixels[1].to_ne_bytes();
                for c in 0..4 {
                    even[c] += p0[c] as f32 * taps[0];
                    odd[c] += p1[c] as f32 * taps[1];
                }
            }
            let mut rgba = [0u8; 4];
            for c in 0..4 {
                let v = (even[c] + odd[c]).round_ties_even();
                rgba[c] = (v as i32).clamp(0, 255) as u8;
            }
            dst[height * x + y] = u32::from_ne_bytes(rgba);
        }
    }
}
