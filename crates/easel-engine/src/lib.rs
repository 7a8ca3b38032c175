//! Collaborators around the `easel-raster` core.
//!
//! The rasterizer only mutates pixels. This crate owns everything that
//! touches the outside world: logger setup, font loading and glyph drawing,
//! image encode/decode, and compositing decoded images into a grid.

pub mod encode;
pub mod logging;
pub mod stitch;
pub mod text;

pub use encode::{encode_png, load_canvas, save_png};
pub use logging::{init_logging, LoggingConfig};
pub use stitch::{stitch, StitchConfig};
pub use text::{FontId, FontSystem, TextAnchor, TextRenderer, TextStyle};
