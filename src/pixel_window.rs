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

/// Count of taps in the gaussian kernel.
pub const KERNEL_SIZE: usize = 7;

/// Taps on each side of the center tap.
pub(crate) const HALF_KERNEL: usize = KERNEL_SIZE / 2;

/// Pixels per window rounded up to whole 128-bit registers of four pixels.
/// Lanes past [KERNEL_SIZE] always carry a zero weight.
pub(crate) const WINDOW_LANES: usize = KERNEL_SIZE.next_multiple_of(4);

/// Count of two-pixel steps needed to walk a window.
pub(crate) const TAP_PAIRS: usize = WINDOW_LANES / 2;

/// Scratch storage for windows which could not be borrowed straight from the row.
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct PixelWindow(pub(crate) [u32; WINDOW_LANES]);

/// Returns source index for a tap at `offset` from `column`.
///
/// Taps outside of the row are mirrored around the current column,
/// so at `column == 0` the row `abcdefg` is seen as `dcb|abcd`.
/// If the mirrored tap is also out of the row, which happens only on rows
/// narrower than the kernel, it is clamped to the nearest edge.
#[inline(always)]
pub(crate) fn reflect_tap(column: usize, offset: isize, width: usize) -> usize {
    let column = column as isize;
    let width = width as isize;
    let mut x = column + offset;
    if x < 0 || x >= width {
        x = column - offset;
    }
    x.clamp(0, width - 1) as usize
}

/// Produces the window of pixels centered at `column`.
///
/// In the interior of the row the window is borrowed directly from `row`,
/// otherwise it is assembled in `scratch` with reflected taps and a zeroed tail.
#[inline(always)]
pub(crate) fn pixel_window<'a>(
    row: &'a [u32],
    column: usize,
    scratch: &'a mut PixelWindow,
) -> &'a [u32; WINDOW_LANES] {
    if column >= HALF_KERNEL {
        let start = column - HALF_KERNEL;
        if let Some(window) = row
            .get(start..start + WINDOW_LANES)
            .and_then(|chunk| <&[u32; WINDOW_LANES]>::try_from(chunk).ok())
        {
            return window;
        }
    }
    let width = row.len();
    for (tap, dst) in scratch.0.iter_mut().enumerate() {
        *dst = if tap < KERNEL_SIZE {
            let offset = tap as isize - HALF_KERNEL as isize;
            row[reflect_tap(column, offset, width)]
        } else {
            0
        };
    }
    &scratch.0
}
