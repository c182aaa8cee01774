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

use crate::gaussian::gaussian_kernel::gaussian_kernel_7;
use crate::gaussian::pass_handler::{
    is_wide_pass_vectorized, HorizontalPass, NarrowPass, WidePass,
};
use crate::util::{check_pixel_buffer, check_sigma};
use crate::BlurError;

/// Selects the horizontal pass implementation.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum BlurBackend {
    /// 128-bit vectors, 16-bit channel lanes and fixed point weights.
    /// Loses up to one level per pass to weight quantization.
    Narrow,
    /// 256-bit vectors with f32 accumulation.
    Wide,
    /// [BlurBackend::Wide] if it is vectorized on current CPU, otherwise [BlurBackend::Narrow].
    #[default]
    Detect,
}

impl BlurBackend {
    /// Resolves [BlurBackend::Detect] to a concrete backend.
    pub fn resolve(self) -> BlurBackend {
        match self {
            BlurBackend::Detect => {
                if is_wide_pass_vectorized() {
                    BlurBackend::Wide
                } else {
                    BlurBackend::Narrow
                }
            }
            backend => backend,
        }
    }
}

/// Runs the pass twice: rows of `src` into transposed `dst`,
/// then rows of `dst` back into `src`, which restores the orientation.
fn transpose_blur<P: HorizontalPass>(
    src: &mut [u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    sigma: f32,
) {
    let kernel = gaussian_kernel_7(sigma);
    let weights = P::prepare(&kernel);
    let executor = P::executor();
    executor(&weights, src, dst, width, height);
    executor(&weights, dst, src, height, width);
}

fn dispatch_blur<P: HorizontalPass>(
    src: &mut [u32],
    dst: &mut [u32],
    width: u32,
    height: u32,
    sigma: f32,
) -> Result<(), BlurError> {
    let width = width as usize;
    let height = height as usize;
    check_sigma(sigma)?;
    let pixels = check_pixel_buffer(src, width, height)?;
    check_pixel_buffer(dst, width, height)?;
    transpose_blur::<P>(&mut src[..pixels], &mut dst[..pixels], width, height, sigma);
    Ok(())
}

/// Performs 7 tap gaussian blur on packed RGBA image with 128-bit vectors.
///
/// Each pixel is one `u32` holding four 8-bit channels, the channel order does not matter.
/// Rows are convolved in 16-bit fixed point with the gaussian taps quantized to Q0.14,
/// this is not a uniform average of the window: weights follow `sigma` exactly as
/// [blur_wide] does, up to one level of quantization error per pass.
/// Near the edges missing neighbours are mirrored around the pixel being computed.
///
/// **The blurred image is written back into `src`**, `dst` is used as scratch
/// space and its content after the call is unspecified.
///
/// # Arguments
///
/// * `src` - Source image, receives the result. At least `width * height` pixels.
/// * `dst` - Scratch image of at least `width * height` pixels.
/// * `width` - Width of the image.
/// * `height` - Height of the image.
/// * `sigma` - Sigma for a gaussian kernel, must be positive.
///
pub fn blur_narrow(
    src: &mut [u32],
    dst: &mut [u32],
    width: u32,
    height: u32,
    sigma: f32,
) -> Result<(), BlurError> {
    dispatch_blur::<NarrowPass>(src, dst, width, height, sigma)
}

/// Performs 7 tap gaussian blur on packed RGBA image with 256-bit vectors.
///
/// Same contract as [blur_narrow], but rows are convolved in single precision,
/// which keeps the result within half a level of the exact kernel on every pass.
/// Falls back to scalar code with identical output if AVX2 is not available.
pub fn blur_wide(
    src: &mut [u32],
    dst: &mut [u32],
    width: u32,
    height: u32,
    sigma: f32,
) -> Result<(), BlurError> {
    dispatch_blur::<WidePass>(src, dst, width, height, sigma)
}

/// Performs 7 tap gaussian blur on packed RGBA image with the selected backend.
///
/// See [blur_narrow] for the buffer contract, the result is stored in `src`.
pub fn gaussian_blur_7(
    src: &mut [u32],
    dst: &mut [u32],
    width: u32,
    height: u32,
    sigma: f32,
    backend: BlurBackend,
) -> Result<(), BlurError> {
    match backend.resolve() {
        BlurBackend::Wide => blur_wide(src, dst, width, height, sigma),
        _ => blur_narrow(src, dst, width, height, sigma),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_window::HALF_KERNEL;
    use crate::MismatchedSize;

    type BlurFn = fn(&mut [u32], &mut [u32], u32, u32, f32) -> Result<(), BlurError>;

    const BACKENDS: [(&str, BlurFn); 2] = [("narrow", blur_narrow), ("wide", blur_wide)];

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_ne_bytes([r, g, b, a])
    }

    fn noise(len: usize) -> Vec<u32> {
        let mut state = 0x2545f491u32;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state
            })
            .collect()
    }

    fn blurred(blur: BlurFn, src: &[u32], width: u32, height: u32, sigma: f32) -> Vec<u32> {
        let mut image = src.to_vec();
        let mut scratch = vec![0u32; src.len()];
        blur(&mut image, &mut scratch, width, height, sigma).unwrap();
        image
    }

    fn max_channel_diff(a: &[u32], b: &[u32]) -> i32 {
        a.iter()
            .zip(b.iter())
            .flat_map(|(a, b)| {
                a.to_ne_bytes()
                    .into_iter()
                    .zip(b.to_ne_bytes())
                    .map(|(a, b)| (a as i32 - b as i32).abs())
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_red_4x4_is_unchanged() {
        let red = rgba(255, 0, 0, 255);
        for (name, blur) in BACKENDS {
            let dst = blurred(blur, &[red; 16], 4, 4, 2.);
            for (i, &px) in dst.iter().enumerate() {
                assert_eq!(
                    px.to_ne_bytes(),
                    [255, 0, 0, 255],
                    "{name}: pixel {i} has changed"
                );
            }
        }
    }

    #[test]
    fn test_flat_field_is_fixed_point() {
        let color = rgba(126, 66, 77, 200);
        for (name, blur) in BACKENDS {
            for sigma in [
                f32::from_bits(1),
                1e-20,
                0.3,
                1.,
                2.5,
                30.,
                1.1e19,
                1e30,
                f32::MAX,
            ] {
                let dst = blurred(blur, &vec![color; 23 * 11], 23, 11, sigma);
                assert!(
                    dst.iter().all(|&px| px == color),
                    "{name}: flat image changed with sigma {sigma}"
                );
            }
        }
    }

    #[test]
    fn test_huge_sigma_averages_window() {
        let color = rgba(200, 100, 50, 255);
        for (name, blur) in BACKENDS {
            let dst = blurred(blur, &[color; 16], 4, 4, 1.1e19);
            assert!(
                dst.iter().all(|&px| px == color),
                "{name}: flat image changed with huge sigma: {dst:?}"
            );
        }

        // A single bright row is spread evenly over the seven rows around it
        let width = 3usize;
        let height = 15usize;
        let mut src = vec![0u32; width * height];
        for px in src[7 * width..8 * width].iter_mut() {
            *px = rgba(210, 210, 210, 210);
        }
        for (name, blur) in BACKENDS {
            let dst = blurred(blur, &src, width as u32, height as u32, f32::MAX);
            for y in 0..height {
                let expected = if (4..=10).contains(&y) { 30 } else { 0 };
                for &px in dst[y * width..(y + 1) * width].iter() {
                    for &v in px.to_ne_bytes().iter() {
                        assert!(
                            (v as i32 - expected).abs() <= 1,
                            "{name}: expected {expected} but it was {v} in row {y}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_impulse_response() {
        let width = 15usize;
        let height = 15usize;
        let sigma = 1.5f32;
        let kernel = gaussian_kernel_7(sigma as f64);
        let mut src = vec![0u32; width * height];
        src[7 * width + 7] = rgba(255, 255, 255, 255);

        for (name, blur) in BACKENDS {
            let dst = blurred(blur, &src, width as u32, height as u32, sigma);
            for y in 0..height {
                for x in 0..width {
                    let dy = y as isize - 7;
                    let dx = x as isize - 7;
                    let expected = if dx.abs() <= 3 && dy.abs() <= 3 {
                        255. * kernel[(dy + 3) as usize] * kernel[(dx + 3) as usize]
                    } else {
                        0.
                    };
                    for (c, &v) in dst[y * width + x].to_ne_bytes().iter().enumerate() {
                        let diff = (v as f64 - expected).abs();
                        assert!(
                            diff <= 1.5,
                            "{name}: expected {expected} but it was {v} at {x}, {y} in channel {c}"
                        );
                        if expected == 0. {
                            assert_eq!(v, 0, "{name}: leak at {x}, {y}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_borders_mirror_around_current_pixel() {
        // Exact float model of both passes, with the same reflection
        fn reference(src: &[f64], width: usize, height: usize, kernel: &[f64; 7]) -> Vec<f64> {
            let tap = |c: usize, offset: isize, n: usize| {
                let mut x = c as isize + offset;
                if x < 0 || x >= n as isize {
                    x = c as isize - offset;
                }
                x as usize
            };
            let mut rows = vec![0f64; width * height];
            for y in 0..height {
                for x in 0..width {
                    rows[y * width + x] = (0..7)
                        .map(|i| kernel[i] * src[y * width + tap(x, i as isize - 3, width)])
                        .sum();
                }
            }
            let mut out = vec![0f64; width * height];
            for y in 0..height {
                for x in 0..width {
                    out[y * width + x] = (0..7)
                        .map(|i| kernel[i] * rows[tap(y, i as isize - 3, height) * width + x])
                        .sum();
                }
            }
            out
        }

        let width = 10usize;
        let height = 10usize;
        let src = noise(width * height);
        let kernel = gaussian_kernel_7(1.4f64);
        for c in 0..4 {
            let plane = src
                .iter()
                .map(|px| px.to_ne_bytes()[c] as f64)
                .collect::<Vec<_>>();
            let expected = reference(&plane, width, height, &kernel);
            for (name, blur) in BACKENDS {
                let dst = blurred(blur, &src, width as u32, height as u32, 1.4);
                for (i, (&px, &e)) in dst.iter().zip(expected.iter()).enumerate() {
                    let v = px.to_ne_bytes()[c] as f64;
                    assert!(
                        (v - e).abs() <= 1.5,
                        "{name}: expected {e} but it was {v} at {i} in channel {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_edge_rows_and_columns_reflect() {
        // Vertical stripes: a column blur must keep them, a row blur at the
        // edges must only see mirrored stripes
        let width = 10usize;
        let height = 10usize;
        let mut src = vec![0u32; width * height];
        for row in src.chunks_exact_mut(width) {
            row[1] = rgba(255, 255, 255, 255);
        }
        for (name, blur) in BACKENDS {
            let dst = blurred(blur, &src, width as u32, height as u32, 1.);
            for row in dst.chunks_exact(width) {
                assert_eq!(row, &dst[..width], "{name}: rows must stay identical");
            }
            // Column 0 mirrors column 1 into its left taps and sees the stripe
            // twice, column 2 has it in range and sees it once.
            let edge = dst[0].to_ne_bytes()[0] as i32;
            let inner = dst[2].to_ne_bytes()[0] as i32;
            assert!(
                (edge - 2 * inner).abs() <= 2,
                "{name}: edge {edge}, inner {inner}"
            );
            for x in HALF_KERNEL + 2..width {
                assert_eq!(dst[x], 0, "{name}: stripe leaked into {x}");
            }
        }
    }

    #[test]
    fn test_non_square_keeps_orientation() {
        let width = 17usize;
        let height = 5usize;
        let mut src = vec![rgba(0, 0, 0, 255); width * height];
        for y in 0..height {
            src[y * width + 12] = rgba(255, 0, 0, 255);
        }
        for (name, blur) in BACKENDS {
            let dst = blurred(blur, &src, width as u32, height as u32, 1.);
            for y in 0..height {
                let row = &dst[y * width..(y + 1) * width];
                let peak = row
                    .iter()
                    .enumerate()
                    .max_by_key(|(_, px)| px.to_ne_bytes()[0])
                    .map(|(x, _)| x);
                assert_eq!(peak, Some(12), "{name}: peak moved in row {y}");
                assert!(row.iter().all(|px| px.to_ne_bytes()[3] == 255));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let src = noise(31 * 19);
        for (name, blur) in BACKENDS {
            let first = blurred(blur, &src, 31, 19, 1.8);
            let second = blurred(blur, &src, 31, 19, 1.8);
            assert_eq!(first, second, "{name}: output is not deterministic");
        }
    }

    #[test]
    fn test_not_idempotent() {
        let src = noise(24 * 24);
        for (name, blur) in BACKENDS {
            let once = blurred(blur, &src, 24, 24, 1.5);
            let twice = blurred(blur, &once, 24, 24, 1.5);
            assert_ne!(once, twice, "{name}: second blur changed nothing");
            assert!(max_channel_diff(&once, &src) > max_channel_diff(&twice, &once));
        }
    }

    #[test]
    fn test_backends_agree() {
        let src = noise(40 * 27);
        for sigma in [0.6, 1.5, 4.] {
            let narrow = blurred(blur_narrow, &src, 40, 27, sigma);
            let wide = blurred(blur_wide, &src, 40, 27, sigma);
            let diff = max_channel_diff(&narrow, &wide);
            assert!(diff <= 2, "Backends differ by {diff} with sigma {sigma}");
        }
    }

    #[test]
    fn test_tiny_images() {
        let color = rgba(9, 99, 199, 255);
        for (name, blur) in BACKENDS {
            for (width, height) in [(1, 1), (1, 5), (5, 1), (2, 3), (3, 3)] {
                let flat = vec![color; width * height];
                let dst = blurred(blur, &flat, width as u32, height as u32, 1.);
                assert!(
                    dst.iter().all(|&px| px == color),
                    "{name}: flat {width}x{height} image changed"
                );
                let src = noise(width * height);
                blurred(blur, &src, width as u32, height as u32, 2.);
            }
        }
    }

    #[test]
    fn test_longer_buffers_keep_tail() {
        let mut src = vec![rgba(10, 20, 30, 40); 20];
        src[16..].fill(7);
        let mut scratch = vec![1u32; 18];
        blur_wide(&mut src, &mut scratch, 4, 4, 1.).unwrap();
        assert_eq!(src[16..], [7, 7, 7, 7]);
        assert_eq!(scratch[16..], [1, 1]);
        assert!(src[..16].iter().all(|&px| px == rgba(10, 20, 30, 40)));
    }

    #[test]
    fn test_invalid_arguments() {
        for (_, blur) in BACKENDS {
            let mut src = vec![0u32; 16];
            let mut dst = vec![0u32; 16];
            assert_eq!(
                blur(&mut src, &mut dst, 4, 4, 0.),
                Err(BlurError::NegativeOrZeroSigma)
            );
            assert_eq!(
                blur(&mut src, &mut dst, 4, 4, f32::NAN),
                Err(BlurError::NegativeOrZeroSigma)
            );
            assert_eq!(
                blur(&mut src, &mut dst, 0, 4, 1.),
                Err(BlurError::ZeroBaseSize)
            );
            assert_eq!(
                blur(&mut src, &mut dst, 5, 4, 1.),
                Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                    expected: 20,
                    received: 16,
                }))
            );
            let mut short = vec![0u32; 15];
            assert_eq!(
                blur(&mut src, &mut short, 4, 4, 1.),
                Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
                    expected: 16,
                    received: 15,
                }))
            );
        }
    }

    #[test]
    fn test_backend_selection() {
        assert_eq!(BlurBackend::Narrow.resolve(), BlurBackend::Narrow);
        assert_eq!(BlurBackend::Wide.resolve(), BlurBackend::Wide);
        assert_ne!(BlurBackend::Detect.resolve(), BlurBackend::Detect);

        let src = noise(12 * 9);
        for backend in [BlurBackend::Narrow, BlurBackend::Wide, BlurBackend::Detect] {
            let mut image = src.clone();
            let mut scratch = vec![0u32; src.len()];
            gaussian_blur_7(&mut image, &mut scratch, 12, 9, 1.2, backend).unwrap();
            let expected = match backend.resolve() {
                BlurBackend::Wide => blurred(blur_wide, &src, 12, 9, 1.2),
                _ => blurred(blur_narrow, &src, 12, 9, 1.2),
            };
            assert_eq!(image, expected, "{backend:?}");
        }
    }
}
