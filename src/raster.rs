//! Image implementation.

use crate::{Image, SplineError, SplineResult};

impl Image {
    /// Allocate a zero-filled image.
    ///
    /// # Examples
    ///
    /// ```
    /// const IMG_W: usize = 320;
    /// const IMG_H: usize = 200;
    ///
    /// let img = splinezoom::Image::new(IMG_W, IMG_H, 3);
    /// assert_eq!(img.samples().len(), 3 * IMG_W * IMG_H);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero or the sample count overflows.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        assert!(channels > 0);
        let len = w
            .checked_mul(channels)
            .and_then(|stride| stride.checked_mul(h))
            .expect("overflow");

        Image {
            w,
            h,
            channels,
            buf: vec![0.0; len],
        }
    }

    /// Allocate a zero-filled image, or `None` if the sample count
    /// overflows or the allocation fails.
    pub(crate) fn try_new(w: usize, h: usize, channels: usize) -> Option<Self> {
        let len = w.checked_mul(channels)?.checked_mul(h)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).ok()?;
        buf.resize(len, 0.0);

        Some(Image {
            w,
            h,
            channels,
            buf,
        })
    }

    /// Wrap an existing interleaved, row-major sample buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// let img = splinezoom::Image::from_samples(2, 1, 1, vec![0.25, 0.75]).unwrap();
    /// assert_eq!(img.get(0, 1, 0), 0.75);
    /// ```
    pub fn from_samples(w: usize, h: usize, channels: usize, buf: Vec<f32>) -> SplineResult<Self> {
        let len = w.checked_mul(channels).and_then(|stride| stride.checked_mul(h));
        if channels == 0 || len != Some(buf.len()) {
            return Err(SplineError::InvalidImageShape);
        }

        Ok(Image {
            w,
            h,
            channels,
            buf,
        })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of samples in one row.
    pub fn stride(&self) -> usize {
        self.w * self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.buf
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.buf
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.buf
    }

    /// Borrow a row slice.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[f32] {
        assert!(y < self.h);
        let stride = self.stride();
        &self.buf[(stride * y)..(stride * (y + 1))]
    }

    /// Borrow the samples of one pixel.
    pub fn pixel(&self, y: usize, x: usize) -> &[f32] {
        assert!(x < self.w);
        let start = self.channels * x;
        &self.row(y)[start..(start + self.channels)]
    }

    pub fn get(&self, y: usize, x: usize, c: usize) -> f32 {
        self.pixel(y, x)[c]
    }
}

#[cfg(test)]
mod tests {
    use crate::{Image, SplineError};

    #[test]
    #[should_panic]
    fn test_image_overflow() {
        let _ = Image::new(::std::usize::MAX, ::std::usize::MAX, 3);
    }

    #[test]
    fn test_try_new() {
        assert!(Image::try_new(::std::usize::MAX, 2, 3).is_none());
        assert!(Image::try_new(::std::usize::MAX / 4, 1, 1).is_none());

        let img = Image::try_new(3, 2, 3).unwrap();
        assert_eq!(img, Image::new(3, 2, 3));
    }

    #[test]
    fn test_from_samples_wrong_len() {
        let res = Image::from_samples(2, 2, 3, vec![0.0; 11]);
        assert!(matches!(res, Err(SplineError::InvalidImageShape)));

        let res = Image::from_samples(2, 2, 0, vec![]);
        assert!(matches!(res, Err(SplineError::InvalidImageShape)));
    }

    #[test]
    fn test_row_and_pixel() {
        let src: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let img = Image::from_samples(2, 2, 3, src).unwrap();

        assert_eq!(img.stride(), 6);
        assert_eq!(img.row(1), &[6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
        assert_eq!(img.pixel(0, 1), &[3.0, 4.0, 5.0]);
        assert_eq!(img.get(1, 0, 2), 8.0);
    }
}
