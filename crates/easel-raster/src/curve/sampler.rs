use std::f64::consts::TAU;
use std::fmt;

use crate::coords::Point;
use crate::error::RasterError;

/// Angular resolution of a sampler.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Resolution {
    /// Fixed step in radians; samples every `θ = i·step < 2π`.
    Step(f64),
    /// Exactly `n` samples spread evenly over one turn.
    Count(usize),
}

/// Builder for sampling a polar curve `r(θ)`.
///
/// ```rust
/// use easel_raster::{CurveSampler, Point};
/// use easel_raster::curve::polar;
///
/// let samples = CurveSampler::new(polar::circle(1.0))
///     .center(Point::new(0, 0))
///     .sample()
///     .unwrap();
/// assert_eq!(samples.len(), 629);
/// ```
#[derive(Clone)]
pub struct CurveSampler<F> {
    radius: F,
    resolution: Resolution,
    rotation: f64,
    center: (f64, f64),
}

impl<F: Fn(f64) -> f64> CurveSampler<F> {
    /// Default angular step in radians.
    pub const DEFAULT_STEP: f64 = 0.01;

    pub fn new(radius: F) -> Self {
        Self {
            radius,
            resolution: Resolution::Step(Self::DEFAULT_STEP),
            rotation: 0.0,
            center: (0.0, 0.0),
        }
    }

    /// Angular step in radians. Must be finite and strictly positive.
    pub fn step(mut self, step: f64) -> Self {
        self.resolution = Resolution::Step(step);
        self
    }

    /// Samples exactly `count` evenly spaced angles instead of a fixed step.
    pub fn sample_count(mut self, count: usize) -> Self {
        self.resolution = Resolution::Count(count);
        self
    }

    /// Rotation in radians added to every angle before the polar → Cartesian
    /// conversion. The radius function still sees the unrotated angle.
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = (f64::from(center.x), f64::from(center.y));
        self
    }

    /// Validates the resolution and returns the sample sequence.
    pub fn sample(self) -> Result<CurveSamples<F>, RasterError> {
        let (step, len) = match self.resolution {
            Resolution::Step(step) => {
                if !(step.is_finite() && step > 0.0) {
                    log::debug!("CurveSampler: rejecting step {step}");
                    return Err(RasterError::InvalidStep(step));
                }
                let mut len = (TAU / step).ceil() as usize;
                // Float division may round up onto a sample that sits at 2π.
                if len > 1 && (len - 1) as f64 * step >= TAU {
                    len -= 1;
                }
                (step, len.max(1))
            }
            Resolution::Count(0) => {
                log::debug!("CurveSampler: rejecting zero sample count");
                return Err(RasterError::InvalidSampleCount(0));
            }
            Resolution::Count(n) => (TAU / n as f64, n),
        };

        log::trace!("CurveSampler: {len} samples, step {step}");

        Ok(CurveSamples {
            radius: self.radius,
            step,
            rotation: self.rotation,
            center: self.center,
            index: 0,
            len,
        })
    }
}

/// One evaluated point of a polar curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolarSample {
    /// Unrotated angle in radians.
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

impl PolarSample {
    /// Nearest pixel to the exact position.
    #[inline]
    pub fn point(&self) -> Point {
        Point::round_from(self.x, self.y)
    }
}

/// Finite, single-pass sequence of curve samples in angle order.
///
/// The curve is not closed: the last sample lies just short of a full turn.
/// Sample again from a [`CurveSampler`] to walk the curve a second time;
/// the sequence itself cannot be cloned:
///
/// ```compile_fail
/// use easel_raster::{CurveSampler, CurveSamples};
/// use easel_raster::curve::polar;
///
/// let samples = CurveSampler::new(polar::circle(1.0)).sample().unwrap();
/// let _again: CurveSamples<_> = samples.clone();
/// ```
pub struct CurveSamples<F> {
    radius: F,
    step: f64,
    rotation: f64,
    center: (f64, f64),
    index: usize,
    len: usize,
}

impl<F: Fn(f64) -> f64> CurveSamples<F> {
    /// Maps the remaining samples to pixels.
    pub fn points(self) -> impl Iterator<Item = Point> {
        self.map(|s| s.point())
    }
}

impl<F: Fn(f64) -> f64> Iterator for CurveSamples<F> {
    type Item = PolarSample;

    fn next(&mut self) -> Option<PolarSample> {
        if self.index >= self.len {
            return None;
        }
        let angle = self.index as f64 * self.step;
        self.index += 1;

        let radius = (self.radius)(angle);
        let (sin, cos) = (angle + self.rotation).sin_cos();
        Some(PolarSample {
            angle,
            radius,
            x: self.center.0 + radius * cos,
            y: self.center.1 + radius * sin,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.index;
        (left, Some(left))
    }
}

impl<F: Fn(f64) -> f64> ExactSizeIterator for CurveSamples<F> {}

// Radius functions are usually closures, which have no `Debug` impl.
impl<F> fmt::Debug for CurveSampler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveSampler")
            .field("resolution", &self.resolution)
            .field("rotation", &self.rotation)
            .field("center", &self.center)
            .finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for CurveSamples<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveSamples")
            .field("step", &self.step)
            .field("index", &self.index)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
