//! Shape rasterizers built on direct distance tests and [`line`](crate::line).
//!
//! Each shape keeps its payload type and its `PixelCanvas::draw_*` helper in
//! its own file.

pub(crate) mod circle;
pub(crate) mod grid;
pub(crate) mod polyline;
pub(crate) mod rect;

pub use circle::Circle;
pub use grid::Grid;
