//! Frame sources.
//!
//! A source hands the pipeline one RGB frame with samples in `[0, 1]`.
//! Sources holding integer samples normalise them on the way in.

use std::io::Read;

use crate::sample::{read_exact, SampleDepth};
use crate::{Image, SplineResult};

/// Number of channels in a captured frame.
pub const RGB_CHANNELS: usize = 3;

/// Trait for anything that can supply a frame to upscale.
pub trait FrameSource {
    fn read_frame(&mut self) -> SplineResult<Image>;
}

/// An in-memory frame is its own source.
impl FrameSource for Image {
    fn read_frame(&mut self) -> SplineResult<Image> {
        Ok(self.clone())
    }
}

/// Packed RGB frame read from a byte stream, row by row with no gaps.
pub struct RawSource<R: Read> {
    rdr: R,
    w: usize,
    h: usize,
    depth: SampleDepth,
}

impl<R: Read> RawSource<R> {
    pub fn new(rdr: R, w: usize, h: usize, depth: SampleDepth) -> Self {
        RawSource { rdr, w, h, depth }
    }

    /// Number of bytes one frame occupies in the stream.
    pub fn frame_len(&self) -> usize {
        self.w
            .checked_mul(self.h)
            .and_then(|n| n.checked_mul(RGB_CHANNELS * self.depth.bytes_per_sample()))
            .expect("overflow")
    }

    pub fn into_inner(self) -> R {
        self.rdr
    }
}

impl<R: Read> FrameSource for RawSource<R> {
    fn read_frame(&mut self) -> SplineResult<Image> {
        let mut img = Image::new(self.w, self.h, RGB_CHANNELS);
        let stride = img.stride();
        for row in img.samples_mut().chunks_mut(stride) {
            read_exact(&mut self.rdr, self.depth, row)?;
        }
        Ok(img)
    }
}
