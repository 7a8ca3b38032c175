//! Text rendering onto a [`PixelCanvas`](easel_raster::PixelCanvas).
//!
//! Fonts are parsed and owned by [`FontSystem`]; [`TextRenderer`] lays out
//! strings with fontdue, rasterizes glyph coverage, and writes it into the
//! same canvas the shape rasterizers draw on. Draw order is up to the caller;
//! the last write to a pixel wins.

mod font_system;
mod renderer;
mod style;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use renderer::TextRenderer;
pub use style::{TextAnchor, TextStyle};
