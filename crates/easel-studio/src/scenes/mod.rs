//! Domain layouts.
//!
//! Each scene computes points, circles and label positions for its domain
//! and hands them to the `easel-raster` primitives. Scenes return the
//! finished canvas; writing it out is the caller's job.

pub mod calendar;
pub mod flower;
pub mod formation;
pub mod outline;
pub mod stitch;
