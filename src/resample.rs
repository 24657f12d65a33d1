//! Separable cardinal spline upscaling.
//!
//! Every output sample lies between four source rows and four source
//! columns, and its value is the sum of that 4x4 neighbourhood weighted
//! by the outer product of two 1-D kernels. Output positions sharing the
//! same fractional offset `(dy/s, dx/s)` share the same kernels, so the
//! kernels are evaluated once per offset and reused across the whole
//! strided sub-grid of that offset.
//!
//! ```text
//!   source rows    0         1         2   ...
//!   output rows    0  1 .. s-1  s  .. 2s   ...  (H-1)s
//! ```
//!
//! Row `ky * s + dy` is owned by block `ky` and offset `dy`, except for
//! the last row `(H-1) s`, which is owned by block `H-2` and offset `s`.

use std::iter::{StepBy, Zip};
use std::ops::Range;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::border_replicate::{pad, PADDING};
use crate::config::ScaleFactor;
use crate::kernel::{weights, KernelWeights};
use crate::{Image, SplineError, SplineResult};

/// Number of control points per axis.
const TAPS: usize = 4;

/// Upscale `src` by `s`, returning a new image of shape
/// `((H-1) s + 1, (W-1) s + 1, C)`. Samples are not clamped.
pub fn run(src: &Image, s: ScaleFactor, tension: f64) -> SplineResult<Image> {
    if src.width() < 2 || src.height() < 2 {
        return Err(SplineError::InvalidImageShape);
    }

    let s = s.get();
    if s == 1 {
        return Ok(src.clone());
    }

    let (out_w, out_h) = output_size(src.width(), src.height(), src.channels(), s)?;
    tracing::debug!(
        w = src.width(),
        h = src.height(),
        channels = src.channels(),
        s,
        tension,
        out_w,
        out_h,
        "resample"
    );

    let mut dst =
        Image::try_new(out_w, out_h, src.channels()).ok_or(SplineError::InvalidScaleFactor)?;
    let table = kernel_table(s, tension)?;
    let padded = pad(src)?;

    #[cfg(feature = "rayon")]
    resample_rows(&padded, &table, s, &mut dst);
    #[cfg(not(feature = "rayon"))]
    resample_offsets(&padded, &table, s, &mut dst);

    Ok(dst)
}

/// Output width and height for a source of `w` by `h` pixels with
/// `channels` samples each.
///
/// Fails with `InvalidScaleFactor` if the output sample count does not
/// fit in `usize`.
pub fn output_size(w: usize, h: usize, channels: usize, s: usize) -> SplineResult<(usize, usize)> {
    let grow = |n: usize| {
        n.checked_sub(1)
            .and_then(|n| n.checked_mul(s))
            .and_then(|n| n.checked_add(1))
    };

    let (out_w, out_h) = grow(w)
        .zip(grow(h))
        .ok_or(SplineError::InvalidScaleFactor)?;
    out_w
        .checked_mul(out_h)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(SplineError::InvalidScaleFactor)?;

    Ok((out_w, out_h))
}

/// Kernel weights for each offset `d` in `0..=s`, at `t = d / s`.
fn kernel_table(s: usize, tension: f64) -> SplineResult<Vec<KernelWeights>> {
    let len = s.checked_add(1).ok_or(SplineError::InvalidScaleFactor)?;
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| SplineError::InvalidScaleFactor)?;
    table.extend((0..=s).map(|d| weights(d as f64 / s as f64, tension)));
    Ok(table)
}

/// Padded rows (or columns) read by control point `tap` for `len`
/// consecutive blocks.
///
/// Block `k` starts at source index `k`, which is padded index
/// `k + PADDING`, and its four control points sit at padded indices
/// `k .. k + 4`.
#[cfg_attr(feature = "rayon", allow(dead_code))]
fn read_window(tap: usize, len: usize) -> Range<usize> {
    debug_assert!(tap < TAPS);
    tap..(tap + len)
}

/// Output rows (or columns) written with offset `d`, for `len` blocks.
///
/// Offsets below `s` own one position per block. Offset `s` coincides
/// with offset 0 of the next block and only owns the final position.
/// Yields `(block, position)`.
#[cfg_attr(feature = "rayon", allow(dead_code))]
fn write_window(d: usize, s: usize, len: usize) -> Zip<Range<usize>, StepBy<Range<usize>>> {
    let last = len * s;
    if d < s {
        (0..len).zip((d..last).step_by(s))
    } else {
        ((len - 1)..len).zip((last..(last + 1)).step_by(s))
    }
}

/// The `(offset, block)` pair that owns output position `o`.
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
fn write_owner(o: usize, s: usize, len: usize) -> (usize, usize) {
    if o == len * s {
        (s, len - 1)
    } else {
        (o % s, o / s)
    }
}

/// Accumulate one output pixel from the 4x4 neighbourhood whose top-left
/// padded pixel is `(ky, kx)`.
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
#[inline]
fn accumulate(
    padded: &Image,
    ky: usize,
    kx: usize,
    cy: &KernelWeights,
    cx: &KernelWeights,
    dst: &mut [f32],
) {
    for iy in 0..TAPS {
        for ix in 0..TAPS {
            let w = cy.0[iy] * cx.0[ix];
            if w == 0.0 {
                continue;
            }

            let w = w as f32;
            for (d, &v) in dst.iter_mut().zip(padded.pixel(ky + iy, kx + ix)) {
                *d += w * v;
            }
        }
    }
}

/*--------------------------------------------------------------*/
/* Rayon                                                        */
/*--------------------------------------------------------------*/

/// Parallel over output rows. Each row looks up its owning block and
/// offset and reuses the shared kernel table.
#[cfg(feature = "rayon")]
fn resample_rows(padded: &Image, table: &[KernelWeights], s: usize, dst: &mut Image) {
    let (w, h) = (padded.width() - 2 * PADDING, padded.height() - 2 * PADDING);
    let (stride, channels) = (dst.stride(), dst.channels());

    dst.samples_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(oy, row)| {
            let (dy, ky) = write_owner(oy, s, h - 1);
            for (ox, px) in row.chunks_mut(channels).enumerate() {
                let (dx, kx) = write_owner(ox, s, w - 1);
                accumulate(padded, ky, kx, &table[dy], &table[dx], px);
            }
        });
}

/*--------------------------------------------------------------*/
/* Naive                                                        */
/*--------------------------------------------------------------*/

/// Single threaded, grouped by offset. For every `(dy, dx)` the whole
/// `(H-1) x (W-1)` block grid is accumulated into a temporary image and
/// then scattered into the output with stride `s`.
#[cfg_attr(feature = "rayon", allow(dead_code))]
fn resample_offsets(padded: &Image, table: &[KernelWeights], s: usize, dst: &mut Image) {
    let (w, h) = (padded.width() - 2 * PADDING, padded.height() - 2 * PADDING);
    let channels = padded.channels();

    for dy in 0..=s {
        for dx in 0..=s {
            tracing::trace!(dy, dx, "offset");
            let (cy, cx) = (&table[dy], &table[dx]);
            let mut tmp = Image::new(w - 1, h - 1, channels);
            let tmp_stride = tmp.stride();

            for iy in 0..TAPS {
                for ix in 0..TAPS {
                    let wt = cy.0[iy] * cx.0[ix];
                    if wt == 0.0 {
                        continue;
                    }

                    let wt = wt as f32;
                    let cols = read_window(ix, w - 1);
                    let cols = (channels * cols.start)..(channels * cols.end);
                    for (acc, py) in tmp
                        .samples_mut()
                        .chunks_mut(tmp_stride)
                        .zip(read_window(iy, h - 1))
                    {
                        for (a, &v) in acc.iter_mut().zip(&padded.row(py)[cols.clone()]) {
                            *a += wt * v;
                        }
                    }
                }
            }

            let dst_stride = dst.stride();
            let out = dst.samples_mut();
            for (ky, oy) in write_window(dy, s, h - 1) {
                let src_row = tmp.row(ky);
                let dst_row = &mut out[(dst_stride * oy)..(dst_stride * (oy + 1))];
                for (kx, ox) in write_window(dx, s, w - 1) {
                    dst_row[(channels * ox)..(channels * (ox + 1))]
                        .copy_from_slice(&src_row[(channels * kx)..(channels * (kx + 1))]);
                }
            }
        }
    }
}
