use crate::canvas::PixelCanvas;
use crate::coords::{Color, Point};

use super::LineAlgorithm;

/// How the copies of a thick line are offset from the base line.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ThickMode {
    /// Copy `i` is shifted by `(i, i)`. Diagonal lines come out skewed and
    /// thinner than `width`; horizontal and vertical lines grow right/down.
    #[default]
    DiagonalOffset,
    /// Copies are shifted along the minor axis (y for x-major lines, x for
    /// y-major lines) and centered on the base line, so coverage has no gaps.
    Perpendicular,
}

impl ThickMode {
    fn offset(self, i: u32, width: u32, from: Point, to: Point) -> Point {
        match self {
            ThickMode::DiagonalOffset => Point::new(i as i32, i as i32),
            ThickMode::Perpendicular => {
                let k = i as i32 - ((width - 1) / 2) as i32;
                let x_major = from.x.abs_diff(to.x) >= from.y.abs_diff(to.y);
                if x_major { Point::new(0, k) } else { Point::new(k, 0) }
            }
        }
    }
}

/// Line styling for thick and outlined geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub color: Color,
    /// Number of parallel one-pixel lines. `0` draws nothing.
    pub width: u32,
    pub mode: ThickMode,
    pub algorithm: LineAlgorithm,
}

impl Stroke {
    /// One pixel wide, incremental stepping, legacy diagonal thickening.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            width: 1,
            mode: ThickMode::DiagonalOffset,
            algorithm: LineAlgorithm::Incremental,
        }
    }

    #[inline]
    pub const fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub const fn mode(mut self, mode: ThickMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub const fn algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl PixelCanvas {
    /// Draws `stroke.width` offset copies of the line from `from` to `to`.
    pub fn draw_thick_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        for i in 0..stroke.width {
            let d = stroke.mode.offset(i, stroke.width, from, to);
            self.draw_line(from + d, to + d, stroke.color, stroke.algorithm);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_pixels(canvas: &PixelCanvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get(x, y) == Some(Color::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn width_one_matches_plain_line() {
        let segments = [
            (Point::new(1, 1), Point::new(17, 6)),
            (Point::new(3, 18), Point::new(9, 2)),
            (Point::new(5, 5), Point::new(5, 5)),
        ];
        for mode in [ThickMode::DiagonalOffset, ThickMode::Perpendicular] {
            for algorithm in [LineAlgorithm::Parametric, LineAlgorithm::Incremental] {
                for &(a, b) in &segments {
                    let mut plain = PixelCanvas::new(20, 20, Color::WHITE);
                    plain.draw_line(a, b, Color::BLACK, algorithm);

                    let mut thick = PixelCanvas::new(20, 20, Color::WHITE);
                    let stroke = Stroke::new(Color::BLACK).mode(mode).algorithm(algorithm);
                    thick.draw_thick_line(a, b, &stroke);

                    assert_eq!(plain, thick, "{mode:?} {algorithm:?} {a:?}->{b:?}");
                }
            }
        }
    }

    #[test]
    fn width_zero_draws_nothing() {
        let mut canvas = PixelCanvas::new(8, 8, Color::WHITE);
        canvas.draw_thick_line(Point::new(0, 0), Point::new(7, 7), &Stroke::new(Color::BLACK).width(0));
        assert!(black_pixels(&canvas).is_empty());
    }

    #[test]
    fn diagonal_offset_shifts_down_right() {
        let mut canvas = PixelCanvas::new(8, 8, Color::WHITE);
        canvas.draw_thick_line(Point::new(0, 0), Point::new(3, 0), &Stroke::new(Color::BLACK).width(3));
        assert_eq!(black_pixels(&canvas), vec![
            (0, 0), (1, 0), (2, 0), (3, 0),
            (1, 1), (2, 1), (3, 1), (4, 1),
            (2, 2), (3, 2), (4, 2), (5, 2),
        ]);
    }

    #[test]
    fn diagonal_offset_collapses_on_45_degree_lines() {
        // Shifting a 45° line by (i, i) lands on the same pixels; the legacy
        // mode leaves it one pixel wide apart from the extended tail.
        let mut canvas = PixelCanvas::new(10, 10, Color::WHITE);
        canvas.draw_thick_line(Point::new(0, 0), Point::new(4, 4), &Stroke::new(Color::BLACK).width(3));
        let px = black_pixels(&canvas);
        assert!(px.iter().all(|&(x, y)| x == y));
        assert_eq!(px.len(), 7);
    }

    #[test]
    fn perpendicular_is_centered_on_minor_axis() {
        let mut canvas = PixelCanvas::new(8, 8, Color::WHITE);
        let stroke = Stroke::new(Color::BLACK).width(3).mode(ThickMode::Perpendicular);

        canvas.draw_thick_line(Point::new(1, 4), Point::new(5, 4), &stroke);
        for x in 1..=5 {
            for y in 3..=5 {
                assert_eq!(canvas.get(x, y), Some(Color::BLACK), "({x}, {y})");
            }
        }
        assert_eq!(canvas.get(1, 2), Some(Color::WHITE));
        assert_eq!(canvas.get(1, 6), Some(Color::WHITE));
    }

    #[test]
    fn offsets_near_i32_limits_are_clipped() {
        let mut canvas = PixelCanvas::new(4, 4, Color::WHITE);
        let near_max = i32::MAX - 1;
        for mode in [ThickMode::DiagonalOffset, ThickMode::Perpendicular] {
            let stroke = Stroke::new(Color::BLACK).width(3).mode(mode);
            canvas.draw_thick_line(Point::new(near_max, 0), Point::new(near_max, 3), &stroke);
            canvas.draw_thick_line(Point::new(0, i32::MIN + 1), Point::new(3, i32::MIN + 1), &stroke);
        }
        assert!(black_pixels(&canvas).is_empty());
    }

    #[test]
    fn perpendicular_widens_vertical_lines_in_x() {
        let mut canvas = PixelCanvas::new(8, 8, Color::WHITE);
        let stroke = Stroke::new(Color::BLACK).width(2).mode(ThickMode::Perpendicular);
        canvas.draw_thick_line(Point::new(3, 1), Point::new(3, 4), &stroke);
        assert_eq!(black_pixels(&canvas).len(), 8);
        assert_eq!(canvas.get(4, 1), Some(Color::BLACK));
        assert_eq!(canvas.get(2, 1), Some(Color::WHITE));
    }
}
