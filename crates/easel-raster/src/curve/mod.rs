//! Polar curve sampling.
//!
//! A [`CurveSampler`] evaluates `r(θ)` over one full turn and yields an
//! ordered, finite sequence of samples. Rendering is left to the caller:
//! feed the sample points to
//! [`draw_polyline`](crate::PixelCanvas::draw_polyline) or
//! [`draw_closed_polyline`](crate::PixelCanvas::draw_closed_polyline).

pub mod polar;
mod sampler;

pub use sampler::{CurveSampler, CurveSamples, PolarSample};
