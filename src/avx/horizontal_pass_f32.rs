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

use crate::gaussian::kernel_weights::WideWeights;
use crate::pixel_window::{pixel_window, PixelWindow, TAP_PAIRS};
use crate::sse::utils::_mm_pack_pixel_epi32;
use std::arch::x86_64::*;

/// Single precision convolution of every row, output is written transposed.
///
/// Must be selected only when `avx2` is available.
pub(crate) fn horizontal_pass_avx_f32(
    weights: &WideWeights,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
) {
    unsafe {
        horizontal_pass_avx_f32_impl(weights, src, dst, width, height);
    }
}

#[target_feature(enable = "avx2")]
unsafe fn horizontal_pass_avx_f32_impl(
    weights: &WideWeights,
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
) {
    // Low half of each register weights the even tap, high half the odd one
    let mut v_weights = [_mm256_setzero_ps(); TAP_PAIRS];
    for (v_weight, taps) in v_weights.iter_mut().zip(weights.taps.chunks_exact(2)) {
        *v_weight = _mm256_setr_m128(_mm_set1_ps(taps[0]), _mm_set1_ps(taps[1]));
    }

    let mut scratch = PixelWindow::default();

    for (y, row) in src.chunks_exact(width).take(height).enumerate() {
        for x in 0..width {
            let window = pixel_window(row, x, &mut scratch);
            let ptr = window.as_ptr();

            let mut acc = _mm256_setzero_ps();
            for (i, &v_weight) in v_weights.iter().enumerate() {
                let pixels = _mm_loadl_epi64(ptr.add(i * 2) as *const __m128i);
                let rgba_ps = _mm256_cvtepi32_ps(_mm256_cvtepu8_epi32(pixels));
                acc = _mm256_add_ps(acc, _mm256_mul_ps(rgba_ps, v_weight));
            }

            let rgba_ps = _mm_add_ps(
                _mm256_castps256_ps128(acc),
                _mm256_extractf128_ps::<1>(acc),
            );
            dst[height * x + y] = _mm_pack_pixel_epi32(_mm_cvtps_epi32(rgba_ps));
        }
    }
}
