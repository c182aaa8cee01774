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

use crate::pixel_window::{HALF_KERNEL, KERNEL_SIZE, WINDOW_LANES};

/// Fractional bits of the fixed point kernel.
pub(crate) const Q14_PRECISION: i32 = 14;
pub(crate) const Q14_ONE: i32 = 1 << Q14_PRECISION;
pub(crate) const Q14_ROUNDING: i32 = 1 << (Q14_PRECISION - 1);

/// Kernel taps in Q0.14, padded with zeroes up to the window size.
///
/// Taps always sum exactly to one, so a flat row passes through unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FixedPointWeights {
    pub(crate) taps: [i16; WINDOW_LANES],
}

impl FixedPointWeights {
    pub(crate) fn quantize(kernel: &[f32; KERNEL_SIZE]) -> FixedPointWeights {
        let mut taps = [0i16; WINDOW_LANES];
        for (dst, &weight) in taps.iter_mut().zip(kernel.iter()) {
            *dst = (weight * Q14_ONE as f32).round() as i16;
        }
        // Rounding error is moved into the center tap
        let sum: i32 = taps.iter().map(|&x| x as i32).sum();
        taps[HALF_KERNEL] = (taps[HALF_KERNEL] as i32 + Q14_ONE - sum) as i16;
        FixedPointWeights { taps }
    }

    /// Pair of neighbour taps laid out as two i16 lanes of one i32,
    /// as expected by `pmaddwd`.
    #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), feature = "sse"))]
    #[inline]
    pub(crate) fn pair(&self, index: usize) -> i32 {
        let lo = self.taps[index * 2] as u16 as u32;
        let hi = self.taps[index * 2 + 1] as u16 as u32;
        (lo | (hi << 16)) as i32
    }
}

/// Kernel taps in f32, padded with zeroes up to the window size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct WideWeights {
    pub(crate) taps: [f32; WINDOW_LANES],
}

impl WideWeights {
    pub(crate) fn new(kernel: &[f32; KERNEL_SIZE]) -> WideWeights {
        let mut taps = [0f32; WINDOW_LANES];
        taps[..KERNEL_SIZE].copy_from_slice(kernel);
        WideWeights { taps }
    }
}
