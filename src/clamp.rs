//! Clamping of spline overshoot.
//!
//! Cardinal splines overshoot near sharp edges. Samples are expected in
//! `[0, 1]`, so anything above 1 becomes 1 and anything below 0 becomes
//! 0. NaN samples are left alone.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::Image;

/// Return a clamped copy of `src`.
pub fn clamp(src: &Image) -> Image {
    let mut dst = src.clone();
    clamp_in_place(&mut dst);
    dst
}

/// Clamp every sample of `img` into `[0, 1]`.
pub fn clamp_in_place(img: &mut Image) {
    #[cfg(feature = "rayon")]
    img.samples_mut().par_iter_mut().for_each(clamp_sample);
    #[cfg(not(feature = "rayon"))]
    img.samples_mut().iter_mut().for_each(clamp_sample);
}

#[inline]
fn clamp_sample(v: &mut f32) {
    if *v > 1.0 {
        *v = 1.0;
    } else if *v < 0.0 {
        *v = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::clamp;
    use crate::Image;

    #[test]
    fn test_clamp() {
        let src = [-0.5, 0.0, 0.25, 1.0, 1.75, -0.0];
        let expected = [0.0, 0.0, 0.25, 1.0, 1.0, -0.0];

        let src = Image::from_samples(2, 1, 3, src.to_vec()).unwrap();
        let dst = clamp(&src);
        assert_eq!(dst.samples(), &expected[..]);
        assert_eq!(src.get(0, 0, 0), -0.5);
    }

    #[test]
    fn test_clamp_idempotent() {
        let src: Vec<f32> = (0..48).map(|v| (v as f32 - 20.0) * 0.07).collect();
        let src = Image::from_samples(4, 4, 3, src).unwrap();

        let once = clamp(&src);
        let twice = clamp(&once);
        assert_eq!(once, twice);
        assert!(once.samples().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_clamp_nan() {
        let src = Image::from_samples(1, 1, 1, vec![f32::NAN]).unwrap();
        assert!(clamp(&src).get(0, 0, 0).is_nan());
    }
}
