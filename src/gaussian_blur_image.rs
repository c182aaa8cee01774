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

use crate::{gaussian_blur_7, BlurBackend, BlurError};
use image::RgbaImage;

/// Performs 7-tap gaussian blur on the image in place
///
/// Channels are blurred independently, alpha included, so alpha should be associated
/// if the image has transparency.
///
/// # Arguments
///
/// * `image`: RGBA image provided by image crate.
/// * `sigma`: Gaussian sigma, must be finite and positive.
/// * `backend`: See [BlurBackend] for more info.
///
pub fn gaussian_blur_image(
    image: &mut RgbaImage,
    sigma: f32,
    backend: BlurBackend,
) -> Result<(), BlurError> {
    let (width, height) = image.dimensions();
    let mut src: Vec<u32> = image
        .as_raw()
        .chunks_exact(4)
        .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
        .collect();
    let mut dst = vec![0u32; src.len()];

    gaussian_blur_7(&mut src, &mut dst, width, height, sigma, backend)?;

    for (dst, &px) in image.chunks_exact_mut(4).zip(src.iter()) {
        dst.copy_from_slice(&px.to_ne_bytes());
    }
    Ok(())
}
