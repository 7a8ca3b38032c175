//! Pixel-space value types shared by every rasterizer.
//!
//! Canonical space:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down

mod color;
mod point;
mod rect;

pub use color::Color;
pub use point::Point;
pub use rect::Rect;
