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

use criterion::{criterion_group, criterion_main, Criterion};
use gauss7::{blur_narrow, blur_wide, gaussian_blur_7, BlurBackend};
use std::hint::black_box;

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn generate_frame(width: u32, height: u32) -> Vec<u32> {
    let mut state = 0x9e3779b9u32;
    (0..width as usize * height as usize)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state | 0xff00_0000
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let frame = generate_frame(WIDTH, HEIGHT);

    c.bench_function("RGBA gauss7 narrow: 1920x1080", |b| {
        let mut src = frame.clone();
        let mut dst = vec![0u32; frame.len()];
        b.iter(|| {
            blur_narrow(black_box(&mut src), &mut dst, WIDTH, HEIGHT, 1.5).unwrap();
        })
    });

    c.bench_function("RGBA gauss7 wide: 1920x1080", |b| {
        let mut src = frame.clone();
        let mut dst = vec![0u32; frame.len()];
        b.iter(|| {
            blur_wide(black_box(&mut src), &mut dst, WIDTH, HEIGHT, 1.5).unwrap();
        })
    });

    c.bench_function("RGBA gauss7 detect: 1920x1080", |b| {
        let mut src = frame.clone();
        let mut dst = vec![0u32; frame.len()];
        b.iter(|| {
            gaussian_blur_7(
                black_box(&mut src),
                &mut dst,
                WIDTH,
                HEIGHT,
                1.5,
                BlurBackend::Detect,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
