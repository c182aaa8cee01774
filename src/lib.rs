// Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
#![allow(clippy::too_many_arguments, stable_features)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Fixed radius separable gaussian blur over packed RGBA8 pixels.
//!
//! Every image is processed as rows of `u32`, each holding four 8-bit channels in
//! memory order. The 7-tap kernel is applied along rows and then along columns by
//! running one horizontal pass twice, each time writing its output transposed.
//!
//! Two backends are provided:
//! * narrow: 16-bit lanes with fixed point weights, SSE4.1 when available;
//! * wide: single precision accumulation, AVX2 when available.
//!
//! Both fall back to portable code that produces the same bytes.

#[cfg(all(target_arch = "x86_64", feature = "avx"))]
mod avx;
mod gaussian;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod gaussian_blur_image;
mod pixel_window;
#[cfg(all(
    any(target_arch = "x86_64", target_arch = "x86"),
    any(feature = "sse", feature = "avx")
))]
mod sse;
mod util;

pub use gaussian::{blur_narrow, blur_wide, gaussian_blur_7, gaussian_kernel_7, BlurBackend};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use gaussian_blur_image::gaussian_blur_image;
pub use pixel_window::KERNEL_SIZE;
pub use util::{BlurError, MismatchedSize};
