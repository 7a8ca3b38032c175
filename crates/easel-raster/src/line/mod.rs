//! Line rasterization.
//!
//! Two interchangeable algorithms produce an 8-connected pixel path that
//! includes both endpoints:
//! - [`LineAlgorithm::Parametric`]: floating-point interpolation along `t`
//! - [`LineAlgorithm::Incremental`]: integer error accumulation, exact and minimal
//!
//! Thick lines are layered on top of either algorithm (see [`Stroke`]).

mod incremental;
mod parametric;
mod thick;

pub use incremental::IncrementalLine;
pub use parametric::ParametricLine;
pub use thick::{Stroke, ThickMode};

use crate::canvas::PixelCanvas;
use crate::coords::{Color, Point};

/// Line stepping algorithm.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineAlgorithm {
    /// Interpolates along `t ∈ [0, 1]` in steps of at most `1 / length`.
    /// Cheap to reason about; may write the same pixel twice on shallow lines.
    Parametric,
    /// Integer error-accumulation stepping. Use for precision-sensitive draws.
    #[default]
    Incremental,
}

impl LineAlgorithm {
    /// Returns the pixel path from `from` to `to`, both inclusive.
    #[inline]
    pub fn trace(self, from: Point, to: Point) -> LinePath {
        match self {
            LineAlgorithm::Parametric => LinePath::Parametric(ParametricLine::new(from, to)),
            LineAlgorithm::Incremental => LinePath::Incremental(IncrementalLine::new(from, to)),
        }
    }
}

/// Finite pixel path produced by [`LineAlgorithm::trace`].
#[derive(Debug, Clone)]
pub enum LinePath {
    Parametric(ParametricLine),
    Incremental(IncrementalLine),
}

impl Iterator for LinePath {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        match self {
            LinePath::Parametric(it) => it.next(),
            LinePath::Incremental(it) => it.next(),
        }
    }
}

impl PixelCanvas {
    /// Draws a one-pixel line. Off-canvas pixels are dropped.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, algorithm: LineAlgorithm) {
        for p in algorithm.trace(from, to) {
            self.set(p.x, p.y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGORITHMS: [LineAlgorithm; 2] = [LineAlgorithm::Parametric, LineAlgorithm::Incremental];

    fn endpoints() -> Vec<(Point, Point)> {
        let mut cases = Vec::new();
        for &(x, y) in &[(7, 0), (7, 3), (7, 7), (3, 7), (0, 7), (1, 1), (13, 5), (2, 11)] {
            for &(sx, sy) in &[(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                cases.push((Point::new(-2, 4), Point::new(-2 + x * sx, 4 + y * sy)));
            }
        }
        cases
    }

    fn assert_connected(path: &[Point], from: Point, to: Point) {
        assert_eq!(path.first(), Some(&from), "path must start at {from:?}");
        assert_eq!(path.last(), Some(&to), "path must end at {to:?}");
        for pair in path.windows(2) {
            assert!(
                pair[0].chebyshev_distance(pair[1]) <= 1,
                "gap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    // ── shared path properties ────────────────────────────────────────────

    #[test]
    fn both_algorithms_include_endpoints_and_stay_connected() {
        for algorithm in ALGORITHMS {
            for (from, to) in endpoints() {
                let path: Vec<_> = algorithm.trace(from, to).collect();
                assert_connected(&path, from, to);
            }
        }
    }

    #[test]
    fn zero_length_line_is_one_pixel() {
        for algorithm in ALGORITHMS {
            let p = Point::new(5, 5);
            let path: Vec<_> = algorithm.trace(p, p).collect();
            assert_eq!(path, vec![p], "{algorithm:?}");
        }
    }

    // ── canvas draws ──────────────────────────────────────────────────────

    #[test]
    fn horizontal_incremental_line_sets_exactly_its_pixels() {
        let mut canvas = PixelCanvas::new(8, 3, Color::WHITE);
        canvas.draw_line(Point::new(0, 0), Point::new(4, 0), Color::BLACK, LineAlgorithm::Incremental);

        for y in 0..3 {
            for x in 0..8 {
                let expected = if y == 0 && x <= 4 { Color::BLACK } else { Color::WHITE };
                assert_eq!(canvas.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn zero_length_draw_sets_single_pixel() {
        for algorithm in ALGORITHMS {
            let mut canvas = PixelCanvas::new(10, 10, Color::WHITE);
            canvas.draw_line(Point::new(5, 5), Point::new(5, 5), Color::BLACK, algorithm);

            let set: Vec<_> = canvas.pixels().iter().filter(|&&c| c == Color::BLACK).collect();
            assert_eq!(set.len(), 1);
            assert_eq!(canvas.get(5, 5), Some(Color::BLACK));
        }
    }

    #[test]
    fn line_leaving_canvas_is_clipped_silently() {
        let mut canvas = PixelCanvas::new(4, 4, Color::WHITE);
        canvas.draw_line(Point::new(-10, 1), Point::new(10, 1), Color::BLACK, LineAlgorithm::Parametric);
        for x in 0..4 {
            assert_eq!(canvas.get(x, 1), Some(Color::BLACK));
        }
    }
}
