use std::fmt;

/// Invalid-argument conditions rejected before any pixel is written.
///
/// Out-of-bounds writes and zero-length lines are not errors and never
/// produce one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// Circle radius below zero.
    NegativeRadius(i32),
    /// Angular step that is zero, negative, or not finite.
    InvalidStep(f64),
    /// Curve sample count of zero.
    InvalidSampleCount(usize),
    /// Raw buffer length does not match `width * height * 4`.
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::NegativeRadius(r) => write!(f, "circle radius must be >= 0, got {r}"),
            RasterError::InvalidStep(s) => {
                write!(f, "angular step must be finite and > 0, got {s}")
            }
            RasterError::InvalidSampleCount(n) => {
                write!(f, "curve sample count must be > 0, got {n}")
            }
            RasterError::BufferSize { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for RasterError {}
