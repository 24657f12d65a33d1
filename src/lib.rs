//! This crate provides integer-factor image upscaling with cardinal
//! spline (Catmull-Rom family) interpolation.
//!
//! A frame is padded with a replicated border, every output sample is
//! computed as a 4x4 weighted sum of its source neighbourhood, and the
//! overshoot is clamped back into `[0, 1]`.

extern crate byteorder;
extern crate libc;

pub use clamp::{clamp, clamp_in_place};
pub use config::{Config, ScaleFactor};
pub use errcode::SplineError;
pub use errcode::SplineResult;
pub use kernel::{weights, KernelWeights};
pub use pipeline::{upscale, upscale_image};
pub use sample::SampleDepth;
pub use sink::{ImageWrite, RawWriter};
pub use source::{FrameSource, RawSource};

#[cfg(feature = "png")]
pub use sink::FileWriter;

/// Floating point image, row-major with interleaved channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: usize,
    h: usize,
    channels: usize,
    buf: Vec<f32>,
}

pub mod border_replicate;
pub mod ffi;
pub mod resample;

mod clamp;
mod config;
mod errcode;
mod kernel;
mod pipeline;
mod raster;
mod sample;
mod sink;
mod source;
