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

#![no_main]

use arbitrary::Arbitrary;
use gauss7::{blur_narrow, blur_wide, BlurError};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SourceImage {
    pub width: u8,
    pub height: u8,
    pub sigma: f32,
    pub fill: u32,
}

fuzz_target!(|data: SourceImage| {
    let width = data.width as u32;
    let height = data.height as u32;
    fuzz_backend(blur_narrow, width, height, data.sigma, data.fill);
    fuzz_backend(blur_wide, width, height, data.sigma, data.fill);
});

fn fuzz_backend(
    blur: fn(&mut [u32], &mut [u32], u32, u32, f32) -> Result<(), BlurError>,
    width: u32,
    height: u32,
    sigma: f32,
    fill: u32,
) {
    let pixels = width as usize * height as usize;
    let mut src = vec![fill; pixels];
    let mut dst = vec![0u32; pixels];

    match blur(&mut src, &mut dst, width, height, sigma) {
        Ok(()) => {
            // Flat field stays flat for any valid sigma
            assert!(
                src.iter().all(|&px| px == fill),
                "Flat field changed with sigma {sigma}"
            );
        }
        Err(BlurError::NegativeOrZeroSigma) => {
            assert!(!sigma.is_finite() || sigma <= 0.);
        }
        Err(BlurError::ZeroBaseSize) => {
            assert!(sigma.is_finite() && sigma > 0.);
            assert_eq!(pixels, 0);
        }
        Err(err) => panic!("Unexpected error {err}"),
    }
}
