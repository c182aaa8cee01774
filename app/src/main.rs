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

use gauss7::{blur_narrow, blur_wide, gaussian_blur_image, BlurBackend, BlurError};
use image::{ImageReader, RgbaImage};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

type BlurFn = fn(&mut [u32], &mut [u32], u32, u32, f32) -> Result<(), BlurError>;

fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_{suffix}.png"))
}

fn run_backend(
    name: &str,
    blur: BlurFn,
    img: &RgbaImage,
    sigma: f32,
    input: &Path,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = img.dimensions();
    let mut src: Vec<u32> = img.pixels().map(|px| u32::from_ne_bytes(px.0)).collect();
    let mut dst = vec![0u32; src.len()];

    let start_time = Instant::now();
    blur(&mut src, &mut dst, width, height, sigma)?;
    println!("{name} backend: {:?}", start_time.elapsed());

    let bytes: Vec<u8> = src.iter().flat_map(|px| px.to_ne_bytes()).collect();
    let out = RgbaImage::from_raw(width, height, bytes).ok_or("Output buffer size mismatch")?;
    out.save(output_path(input, name))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().ok_or("Usage: gauss7-app <image> [sigma]")?);
    let sigma: f32 = match args.next() {
        Some(value) => value.parse()?,
        None => 2.,
    };

    let img = ImageReader::open(&input)?.decode()?.to_rgba8();
    println!("{}x{}, sigma {sigma}", img.width(), img.height());

    run_backend("narrow", blur_narrow, &img, sigma, &input)?;
    run_backend("wide", blur_wide, &img, sigma, &input)?;

    let mut detected = img.clone();
    let start_time = Instant::now();
    gaussian_blur_image(&mut detected, sigma, BlurBackend::Detect)?;
    println!(
        "detected backend ({:?}): {:?}",
        BlurBackend::Detect.resolve(),
        start_time.elapsed()
    );
    detected.save(output_path(&input, "detected"))?;
    Ok(())
}
