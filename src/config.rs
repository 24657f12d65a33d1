//! Upscaling parameters.

use crate::{SplineError, SplineResult};

/// Number of output samples produced per source interval along each
/// axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ScaleFactor(u32);

impl ScaleFactor {
    pub const DEFAULT: ScaleFactor = ScaleFactor(3);

    pub fn new(s: u32) -> SplineResult<Self> {
        if s < 1 {
            return Err(SplineError::InvalidScaleFactor);
        }
        Ok(ScaleFactor(s))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = SplineError;

    /// Only whole numbers are accepted; there is no truncation.
    fn try_from(s: f64) -> SplineResult<Self> {
        if !s.is_finite() || s.fract() != 0.0 || s < 1.0 || s > u32::MAX as f64 {
            return Err(SplineError::InvalidScaleFactor);
        }
        ScaleFactor::new(s as u32)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::DEFAULT
    }
}

/// Resampling configuration.
///
/// `scale_factor` controls output density and `tension` the spline
/// sharpness. The more negative the tension, the more overshoot, which
/// helps keep font glyphs crisp. Tension 0 is Catmull-Rom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub scale_factor: u32,
    pub tension: f64,
}

impl Config {
    pub const DEFAULT_TENSION: f64 = -0.25;

    pub fn with_scale_factor(mut self, s: u32) -> Self {
        self.scale_factor = s;
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Check the configuration before any work is done. Tension is
    /// unrestricted.
    pub fn validate(&self) -> SplineResult<ScaleFactor> {
        ScaleFactor::new(self.scale_factor)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scale_factor: ScaleFactor::DEFAULT.0,
            tension: Config::DEFAULT_TENSION,
        }
    }
}
