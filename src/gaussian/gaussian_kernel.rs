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

use crate::pixel_window::{HALF_KERNEL, KERNEL_SIZE};
use num_traits::Float;

/// Builds normalized 1D gaussian kernel of [KERNEL_SIZE] taps.
///
/// Weights are symmetric around the center tap and sum to one.
/// Larger sigma flattens the kernel towards a box average, though the fixed
/// tap count bounds the reachable blur radius. Once `2 * sigma^2` no longer
/// fits into `F` the kernel is exactly the box average.
///
/// # Panics
/// Panics if sigma is not positive.
pub fn gaussian_kernel_7<F: Float>(sigma: F) -> [F; KERNEL_SIZE] {
    assert!(sigma > F::zero(), "Sigma must be positive");
    let two = F::one() + F::one();
    let two_sigma_sq = two * sigma * sigma;
    let mut kernel = [F::zero(); KERNEL_SIZE];
    if two_sigma_sq == F::zero() {
        // Sigma too small to be squared, everything goes to the center tap
        kernel[HALF_KERNEL] = F::one();
        return kernel;
    }
    let half = F::from(HALF_KERNEL).unwrap_or_else(F::zero);

    // Center tap is always exp(0) = 1, so the sum never vanishes, even when
    // two_sigma_sq overflows and every tap becomes one
    let mut sum_norm = F::zero();
    let mut x = half;
    for item in kernel.iter_mut() {
        let weight = (-(x * x) / two_sigma_sq).exp();
        *item = weight;
        sum_norm = sum_norm + weight;
        x = x - F::one();
    }

    for item in kernel.iter_mut() {
        *item = *item / sum_norm;
    }

    kernel
}
