//! Padding that replicates pixels on the border.
//!
//! If a source row is given by the unprimed pixels shown below, the
//! padded row is the following, where the primed pixels have the same
//! value as the unprimed ones.
//!
//! ```text
//!   p0' | p0 p1 p2 ... pn | pn'
//! ```
//!
//! The padded top and bottom rows are copies of the padded first and
//! last rows, so each corner takes the value of the source corner.

use crate::{Image, SplineError, SplineResult};

/// Width of the replicated border, in pixels.
pub const PADDING: usize = 1;

/// Tuple struct (x1, x2, x3) designating the sub-regions of a padded
/// row, measured in samples.
///
/// ```text
///    0 .. x1 => left border
///   x1 .. x2 => source data
///   x2 .. x3 => right border
/// ```
pub struct BorderReplicate(usize, usize, usize);

impl BorderReplicate {
    pub fn new(width: usize, channels: usize, padding: usize) -> Self {
        let x1 = padding.checked_mul(channels).expect("overflow");
        let x2 = width
            .checked_mul(channels)
            .and_then(|w| w.checked_add(x1))
            .expect("overflow");
        let x3 = x2.checked_add(x1).expect("overflow");
        assert!(width >= 1 && channels >= 1);

        BorderReplicate(x1, x2, x3)
    }

    /// Copy `src` into the middle of `dst` and replicate its first and
    /// last pixel into the borders.
    pub fn fill_row(&self, src: &[f32], channels: usize, dst: &mut [f32]) {
        let BorderReplicate(x1, x2, x3) = *self;
        dst[x1..x2].copy_from_slice(src);

        let (left, rest) = dst.split_at_mut(x1);
        let first = &rest[..channels];
        for px in left.chunks_mut(channels) {
            px.copy_from_slice(first);
        }

        let (rest, right) = dst[..x3].split_at_mut(x2);
        let last = &rest[(x2 - channels)..];
        for px in right.chunks_mut(channels) {
            px.copy_from_slice(last);
        }
    }
}

/// Produce a copy of `src` with a one pixel replicated border on
/// every side.
pub fn pad(src: &Image) -> SplineResult<Image> {
    let (w, h, channels) = (src.width(), src.height(), src.channels());
    if w < 1 || h < 1 {
        return Err(SplineError::InvalidImageShape);
    }

    let mut dst = Image::new(w + 2 * PADDING, h + 2 * PADDING, channels);
    let stride = dst.stride();
    let rdr = BorderReplicate::new(w, channels, PADDING);
    let data = dst.samples_mut();

    for (y, row) in data
        .chunks_mut(stride)
        .skip(PADDING)
        .take(h)
        .enumerate()
    {
        rdr.fill_row(src.row(y), channels, row);
    }

    {
        let (top, src) = data.split_at_mut(stride * PADDING);
        top.copy_from_slice(&src[..stride]);
    }

    {
        let (src, bottom) = data.split_at_mut(stride * (h + PADDING));
        bottom.copy_from_slice(&src[(stride * (h + PADDING - 1))..]);
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::{pad, BorderReplicate};
    use crate::{Image, SplineError};

    #[test]
    fn test_replicate_row() {
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let expected = [
            1.0, 2.0, /* ---- */ 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, /* ---- */ 5.0, 6.0,
        ];

        let rdr = BorderReplicate::new(3, 2, 1);
        let mut buf = [0f32; 2 + 6 + 2];
        rdr.fill_row(&src, 2, &mut buf);
        assert_eq!(&buf[..], &expected[..]);
    }

    #[test]
    fn test_pad_2x3() {
        let src = Image::from_samples(2, 3, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

        let expected = [
            1.0, 1.0, 2.0, 2.0,
            1.0, 1.0, 2.0, 2.0,
            3.0, 3.0, 4.0, 4.0,
            5.0, 5.0, 6.0, 6.0,
            5.0, 5.0, 6.0, 6.0 ];

        let dst = pad(&src).unwrap();
        assert_eq!((dst.width(), dst.height(), dst.channels()), (4, 5, 1));
        assert_eq!(dst.samples(), &expected[..]);
    }

    #[test]
    fn test_pad_single_pixel() {
        let src = Image::from_samples(1, 1, 3, vec![0.1, 0.2, 0.3]).unwrap();
        let dst = pad(&src).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(dst.pixel(y, x), &[0.1, 0.2, 0.3]);
            }
        }
    }

    #[test]
    fn test_pad_borders_equal_nearest_interior() {
        let (w, h, c) = (5, 4, 3);
        let src: Vec<f32> = (0..(w * h * c)).map(|v| (v as f32 * 0.37).fract()).collect();
        let src = Image::from_samples(w, h, c, src).unwrap();
        let dst = pad(&src).unwrap();

        for y in 0..h {
            for x in 0..w {
                assert_eq!(dst.pixel(y + 1, x + 1), src.pixel(y, x));
            }
        }
        for y in 0..(h + 2) {
            assert_eq!(dst.pixel(y, 0), dst.pixel(y, 1));
            assert_eq!(dst.pixel(y, w + 1), dst.pixel(y, w));
        }
        assert_eq!(dst.row(0), dst.row(1));
        assert_eq!(dst.row(h + 1), dst.row(h));
    }

    #[test]
    fn test_pad_empty() {
        let src = Image::new(0, 3, 3);
        assert!(matches!(pad(&src), Err(SplineError::InvalidImageShape)));
    }
}
