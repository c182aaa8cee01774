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

use crate::gaussian::kernel_weights::{FixedPointWeights, Q14_PRECISION, Q14_ROUNDING};
use crate::pixel_window::{pixel_window, PixelWindow, TAP_PAIRS};
use crate::sse::utils::{_mm_load_pair_interleaved_epi16, _mm_pack_pixel_epi32};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Q0.14 convolution of every row, output is written transposed.
///
/// Must be selected only when `sse4.1` is available.
pub(crate) fn horizontal_pass_sse_q14(
    weights: &FixedPointWeights,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
) {
    unsafe {
        horizontal_pass_sse_q14_impl(weights, src, dst, width, height);
    }
}

#[target_feature(enable = "sse4.1")]
unsafe fn horizontal_pass_sse_q14_impl(
    weights: &FixedPointWeights,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
) {
    let mut v_weights = [_mm_setzero_si128(); TAP_PAIRS];
    for (i, v_weight) in v_weights.iter_mut().enumerate() {
        *v_weight = _mm_set1_epi32(weights.pair(i));
    }

    let rnd = _mm_set1_epi32(Q14_ROUNDING);
    let mut scratch = PixelWindow::default();

    for (y, row) in src.chunks_exact(width).take(height).enumerate() {
        for x in 0..width {
            let window = pixel_window(row, x, &mut scratch);
            let ptr = window.as_ptr();

            let mut acc = rnd;
            for (i, &v_weight) in v_weights.iter().enumerate() {
                let pixels = _mm_load_pair_interleaved_epi16(ptr.add(i * 2));
                acc = _mm_add_epi32(acc, _mm_madd_epi16(pixels, v_weight));
            }
            acc = _mm_srai_epi32::<Q14_PRECISION>(acc);

            dst[height * x + y] = _mm_pack_pixel_epi32(acc);
        }
    }
}
