//! Packed sample definitions.

use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::SplineResult;

/// The depth and endianness of packed integer samples.
///
/// Samples are normalised to `[0, 1]` when read and quantised back
/// with rounding when written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SampleDepth {
    Depth8,
    Depth16BE,
    Depth16LE,
}

impl SampleDepth {
    /// The number of bytes per sample.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            SampleDepth::Depth8 => 1,
            SampleDepth::Depth16BE | SampleDepth::Depth16LE => 2,
        }
    }

    fn max_value(self) -> f32 {
        match self {
            SampleDepth::Depth8 => u8::MAX as f32,
            SampleDepth::Depth16BE | SampleDepth::Depth16LE => u16::MAX as f32,
        }
    }
}

/// Read exactly `buf.len()` samples, normalised to `[0, 1]`.
pub fn read_exact(r: &mut dyn Read, depth: SampleDepth, buf: &mut [f32]) -> SplineResult<()> {
    let max = depth.max_value();
    match depth {
        SampleDepth::Depth8 => {
            let mut raw = vec![0u8; buf.len()];
            r.read_exact(&mut raw)?;
            for (v, &b) in buf.iter_mut().zip(&raw) {
                *v = b as f32 / max;
            }
        }
        SampleDepth::Depth16BE => {
            for v in buf.iter_mut() {
                *v = r.read_u16::<BigEndian>()? as f32 / max;
            }
        }
        SampleDepth::Depth16LE => {
            for v in buf.iter_mut() {
                *v = r.read_u16::<LittleEndian>()? as f32 / max;
            }
        }
    }
    Ok(())
}

/// Quantise and write every sample of `buf`. Samples outside `[0, 1]`
/// saturate.
pub fn write_all(w: &mut dyn Write, depth: SampleDepth, buf: &[f32]) -> SplineResult<()> {
    match depth {
        SampleDepth::Depth8 => {
            let raw: Vec<u8> = buf.iter().map(|&v| quantize(v, depth) as u8).collect();
            w.write_all(&raw)?;
        }
        SampleDepth::Depth16BE => {
            for &v in buf {
                w.write_u16::<BigEndian>(quantize(v, depth))?;
            }
        }
        SampleDepth::Depth16LE => {
            for &v in buf {
                w.write_u16::<LittleEndian>(quantize(v, depth))?;
            }
        }
    }
    Ok(())
}

/// Round a normalised sample to the nearest integer level.
pub fn quantize(v: f32, depth: SampleDepth) -> u16 {
    let max = depth.max_value();
    let q = (v * max).round();
    if q >= max {
        max as u16
    } else if q > 0.0 {
        q as u16
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{quantize, read_exact, write_all, SampleDepth};
    use std::io::Cursor;

    #[test]
    fn test_read_u8() {
        let src = [0u8, 51, 255];
        let mut buf = [0f32; 3];

        read_exact(&mut Cursor::new(&src[..]), SampleDepth::Depth8, &mut buf).unwrap();
        assert_eq!(buf, [0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_read_u16() {
        let src = [0xFF, 0xFF, 0x00, 0x00];
        let mut buf = [0f32; 2];

        read_exact(&mut Cursor::new(&src[..]), SampleDepth::Depth16BE, &mut buf).unwrap();
        assert_eq!(buf, [1.0, 0.0]);

        let src = [0x00, 0xFF];
        let mut buf = [0f32; 1];
        read_exact(&mut Cursor::new(&src[..]), SampleDepth::Depth16LE, &mut buf).unwrap();
        assert_eq!(buf, [0xFF00 as f32 / 65535.0]);
    }

    #[test]
    fn test_read_short() {
        let src = [1u8, 2];
        let mut buf = [0f32; 3];

        let res = read_exact(&mut Cursor::new(&src[..]), SampleDepth::Depth8, &mut buf);
        assert!(res.is_err());
    }

    #[test]
    fn test_write() {
        let src = [0.0, 0.5, 1.0, -0.25, 1.5];

        let mut out = Vec::new();
        write_all(&mut out, SampleDepth::Depth8, &src).unwrap();
        assert_eq!(out, [0, 128, 255, 0, 255]);

        let mut out = Vec::new();
        write_all(&mut out, SampleDepth::Depth16BE, &src[2..3]).unwrap();
        assert_eq!(out, [0xFF, 0xFF]);

        let mut out = Vec::new();
        write_all(&mut out, SampleDepth::Depth16LE, &src[1..2]).unwrap();
        assert_eq!(out, [0x00, 0x80]);
    }

    #[test]
    fn test_quantize_nan() {
        assert_eq!(quantize(f32::NAN, SampleDepth::Depth8), 0);
    }
}
