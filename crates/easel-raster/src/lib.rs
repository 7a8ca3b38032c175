//! Immediate-mode 2D rasterization for the **easel** workspace.
//!
//! A caller creates a [`PixelCanvas`], issues draw calls that mutate it in
//! place, then hands the buffer to an encoder. There is no retained scene.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Color`, `Point`, `Rect` |
//! | [`canvas`] | `PixelCanvas` |
//! | [`line`] | `LineAlgorithm`, `LinePath`, `Stroke`, `ThickMode` |
//! | [`shapes`] | circles, rectangle outlines, grids, polylines |
//! | [`curve`] | `CurveSampler`, polar radius functions |
//! | [`error`] | `RasterError` |
//!
//! # Quick start
//!
//! ```rust
//! use easel_raster::{Circle, Color, LineAlgorithm, PixelCanvas, Point};
//!
//! let mut canvas = PixelCanvas::new(21, 21, Color::WHITE);
//! canvas.draw_line(Point::new(0, 0), Point::new(20, 20), Color::BLACK, LineAlgorithm::Incremental);
//! canvas.draw_circle(Circle::filled(Point::new(10, 10), 3), Color::BLACK).unwrap();
//! assert_eq!(canvas.get(10, 10), Some(Color::BLACK));
//! ```

pub mod canvas;
pub mod coords;
pub mod curve;
pub mod error;
pub mod line;
pub mod shapes;

pub use canvas::PixelCanvas;
pub use coords::{Color, Point, Rect};
pub use curve::{CurveSampler, CurveSamples, PolarSample};
pub use error::RasterError;
pub use line::{LineAlgorithm, LinePath, Stroke, ThickMode};
pub use shapes::{Circle, Grid};
