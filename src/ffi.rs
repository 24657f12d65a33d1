//! Foreign function interface.

use libc::{c_double, c_int, c_uchar, c_uint, size_t};
use std::slice;

use crate::sample::SampleDepth;
use crate::sink::{ImageWrite, RawWriter};
use crate::source::{RawSource, RGB_CHANNELS};
use crate::{upscale, Config};

// Print with "file:line - " prefix, for more informative error messages.
macro_rules! printerrorln {
    ($e:expr) => {
        println!("{}:{} - {}", file!(), line!(), $e);
    };
    ($fmt:expr, $arg:tt) => {
        print!("{}:{} - ", file!(), line!());
        println!($fmt, $arg);
    };
}

/// Number of bytes needed to hold the upscaled 8-bit RGB image, or 0
/// if the parameters are invalid.
#[no_mangle]
pub extern "C" fn splinezoom_output_len(w: size_t, h: size_t, scale: c_uint) -> size_t {
    if w < 2 || h < 2 || scale == 0 {
        return 0;
    }

    let grow = |n: usize| (n - 1).checked_mul(scale as usize).and_then(|n| n.checked_add(1));
    grow(w)
        .zip(grow(h))
        .and_then(|(out_w, out_h)| out_w.checked_mul(out_h))
        .and_then(|n| n.checked_mul(RGB_CHANNELS))
        .unwrap_or(0)
}

/// Upscale a packed 8-bit RGB image into `dst`.
///
/// Returns 0 on success and -1 on failure.
#[no_mangle]
pub extern "C" fn splinezoom_upscale_rgb8(
    src: *const c_uchar,
    src_len: size_t,
    w: size_t,
    h: size_t,
    scale: c_uint,
    tension: c_double,
    dst: *mut c_uchar,
    dst_len: size_t,
) -> c_int {
    if src.is_null() || dst.is_null() {
        printerrorln!("bad input parameters");
        return -1;
    }

    let out_len = splinezoom_output_len(w, h, scale);
    let in_len = w.checked_mul(h).and_then(|n| n.checked_mul(RGB_CHANNELS));
    if out_len == 0 || in_len != Some(src_len) || dst_len < out_len {
        printerrorln!("bad input parameters");
        return -1;
    }

    let src_slice = unsafe { slice::from_raw_parts(src, src_len) };
    let dst_slice = unsafe { slice::from_raw_parts_mut(dst, dst_len) };

    let mut rdr = RawSource::new(src_slice, w, h, SampleDepth::Depth8);
    let mut wtr = RawWriter::new(dst_slice, SampleDepth::Depth8);
    let cfg = Config::default()
        .with_scale_factor(scale)
        .with_tension(tension);

    match upscale(Some(&mut wtr as &mut dyn ImageWrite), &mut rdr, &cfg) {
        Ok(_) => 0,
        Err(e) => {
            printerrorln!(e);
            -1
        }
    }
}
