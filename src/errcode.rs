//! Upscaler error codes.

use quick_error::quick_error;
use std::error::Error;
use std::io;

pub type SplineResult<T> = Result<T, SplineError>;

quick_error! {
    #[derive(Debug)]
    pub enum SplineError {
        InvalidScaleFactor {
            display("Invalid scale factor")
        }

        InvalidImageShape {
            display("Invalid image shape")
        }

        Io(err: io::Error) {
            from()
            display("IO error: {}", err)
        }

        /// Failure reported by an image encoder, passed through untouched.
        Encode(err: Box<dyn Error + Send + Sync>) {
            display("Encode error: {}", err)
        }
    }
}
