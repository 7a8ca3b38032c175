//! Owned RGBA pixel buffer.
//!
//! Responsibilities:
//! - bounds-checked pixel access (writes outside the buffer are dropped)
//! - read-only views for encoders (`pixels`, `as_bytes`)
//! - region copies used when compositing decoded images

mod copy;
mod pixel_canvas;

pub use pixel_canvas::PixelCanvas;
