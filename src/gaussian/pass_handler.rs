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

use crate::gaussian::gaussian_horizontal::{horizontal_pass_f32, horizontal_pass_q14};
use crate::gaussian::kernel_weights::{FixedPointWeights, WideWeights};
use crate::pixel_window::KERNEL_SIZE;

/// Convolves rows of `src` of `width` x `height` and stores them transposed into `dst`.
pub(crate) type PassExecutor<W> =
    fn(weights: &W, src: &[u32], dst: &mut [u32], width: usize, height: usize);

/// One flavour of the horizontal pass with transposed output.
pub(crate) trait HorizontalPass {
    /// Kernel laid out as the pass consumes it.
    type Weights;

    fn prepare(kernel: &[f32; KERNEL_SIZE]) -> Self::Weights;

    fn executor() -> PassExecutor<Self::Weights>;
}

/// 16-bit lanes with fixed point weights, 128-bit vectors.
pub(crate) struct NarrowPass {}

/// f32 accumulation, 256-bit vectors.
pub(crate) struct WidePass {}

impl HorizontalPass for NarrowPass {
    type Weights = FixedPointWeights;

    fn prepare(kernel: &[f32; KERNEL_SIZE]) -> FixedPointWeights {
        FixedPointWeights::quantize(kernel)
    }

    fn executor() -> PassExecutor<FixedPointWeights> {
        #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), feature = "sse"))]
        {
            if std::arch::is_x86_feature_detected!("sse4.1") {
                use crate::sse::horizontal_pass_sse_q14;
                return horizontal_pass_sse_q14;
            }
        }
        horizontal_pass_q14
    }
}

impl HorizontalPass for WidePass {
    type Weights = WideWeights;

    fn prepare(kernel: &[f32; KERNEL_SIZE]) -> WideWeights {
        WideWeights::new(kernel)
    }

    fn executor() -> PassExecutor<WideWeights> {
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        {
            if std::arch::is_x86_feature_detected!("avx2") {
                use crate::avx::horizontal_pass_avx_f32;
                return horizontal_pass_avx_f32;
            }
        }
        horizontal_pass_f32
    }
}

/// Returns true if the wide pass runs vectorized on this CPU.
pub(crate) fn is_wide_pass_vectorized() -> bool {
    #[cfg(all(target_arch = "x86_64", feature = "avx"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return true;
        }
    }
    false
}
