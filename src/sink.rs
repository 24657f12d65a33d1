//! Image writers.
//!
//! Writers receive the finished image and own its encoding. Their
//! errors reach the caller unchanged.

use std::io::Write;

use crate::sample::{write_all, SampleDepth};
use crate::{Image, SplineResult};

/// Trait for encoding and storing a finished image.
pub trait ImageWrite {
    fn write_image(&mut self, img: &Image) -> SplineResult<()>;
}

/// Writes packed, quantised samples row by row.
pub struct RawWriter<W: Write> {
    wtr: W,
    depth: SampleDepth,
}

impl<W: Write> RawWriter<W> {
    pub fn new(wtr: W, depth: SampleDepth) -> Self {
        RawWriter { wtr, depth }
    }

    pub fn into_inner(self) -> W {
        self.wtr
    }
}

impl<W: Write> ImageWrite for RawWriter<W> {
    fn write_image(&mut self, img: &Image) -> SplineResult<()> {
        for y in 0..img.height() {
            write_all(&mut self.wtr, self.depth, img.row(y))?;
        }
        self.wtr.flush()?;
        Ok(())
    }
}

#[cfg(feature = "png")]
pub use self::file::FileWriter;

#[cfg(feature = "png")]
mod file {
    use std::path::{Path, PathBuf};

    use image::{ImageBuffer, Rgb};

    use super::ImageWrite;
    use crate::sample::{quantize, SampleDepth};
    use crate::source::RGB_CHANNELS;
    use crate::{Image, SplineError, SplineResult};

    /// Writes an RGB image to a file, in the format implied by the
    /// path's extension.
    pub struct FileWriter {
        path: PathBuf,
        depth: SampleDepth,
    }

    impl FileWriter {
        pub fn new<P: AsRef<Path>>(path: P) -> Self {
            FileWriter {
                path: path.as_ref().to_path_buf(),
                depth: SampleDepth::Depth8,
            }
        }

        /// Store 16 bits per sample instead of 8. The byte order is
        /// left to the encoder.
        pub fn with_depth16(mut self) -> Self {
            self.depth = SampleDepth::Depth16BE;
            self
        }
    }

    impl ImageWrite for FileWriter {
        fn write_image(&mut self, img: &Image) -> SplineResult<()> {
            if img.channels() != RGB_CHANNELS {
                return Err(SplineError::InvalidImageShape);
            }
            let w = u32::try_from(img.width()).map_err(|_| SplineError::InvalidImageShape)?;
            let h = u32::try_from(img.height()).map_err(|_| SplineError::InvalidImageShape)?;

            let res = match self.depth {
                SampleDepth::Depth8 => {
                    let buf: Vec<u8> = img
                        .samples()
                        .iter()
                        .map(|&v| quantize(v, self.depth) as u8)
                        .collect();
                    let out: ImageBuffer<Rgb<u8>, _> =
                        ImageBuffer::from_raw(w, h, buf).ok_or(SplineError::InvalidImageShape)?;
                    out.save(&self.path)
                }
                SampleDepth::Depth16BE | SampleDepth::Depth16LE => {
                    let buf: Vec<u16> = img
                        .samples()
                        .iter()
                        .map(|&v| quantize(v, self.depth))
                        .collect();
                    let out: ImageBuffer<Rgb<u16>, _> =
                        ImageBuffer::from_raw(w, h, buf).ok_or(SplineError::InvalidImageShape)?;
                    out.save(&self.path)
                }
            };

            res.map_err(|err| SplineError::Encode(Box::new(err)))
        }
    }
}
