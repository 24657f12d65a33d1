//! Upscaling pipeline entry points.

use crate::clamp::clamp_in_place;
use crate::config::Config;
use crate::resample;
use crate::sink::ImageWrite;
use crate::source::{FrameSource, RGB_CHANNELS};
use crate::{Image, SplineError, SplineResult};

/// Grab a frame from `src`, upscale it with cardinal spline
/// interpolation, and clamp the overshoot.
///
/// If `dst` is given the result is handed to it and `None` is
/// returned, otherwise the upscaled image is returned.
///
/// # Examples
///
/// ```
/// use splinezoom::{upscale, Config, Image};
///
/// let mut frame = Image::new(4, 3, 3);
/// let cfg = Config::default().with_scale_factor(2);
///
/// let out = upscale(None, &mut frame, &cfg).unwrap().unwrap();
/// assert_eq!((out.width(), out.height()), (7, 5));
/// ```
pub fn upscale(
    dst: Option<&mut dyn ImageWrite>,
    src: &mut dyn FrameSource,
    cfg: &Config,
) -> SplineResult<Option<Image>> {
    cfg.validate()?;
    let frame = src.read_frame()?;
    if frame.channels() != RGB_CHANNELS {
        return Err(SplineError::InvalidImageShape);
    }

    let img = upscale_image(frame, *cfg)?;

    match dst {
        Some(wtr) => {
            wtr.write_image(&img)?;
            tracing::debug!(w = img.width(), h = img.height(), "image written");
            Ok(None)
        }
        None => Ok(Some(img)),
    }
}

/// Upscale and clamp an image already in memory. Any channel count is
/// accepted. The source is consumed, since only the padded copy is
/// needed once resampling starts.
pub fn upscale_image(src: Image, cfg: Config) -> SplineResult<Image> {
    let s = cfg.validate()?;
    let mut img = resample::run(&src, s, cfg.tension)?;
    drop(src);

    clamp_in_place(&mut img);
    Ok(img)
}
