use crate::canvas::PixelCanvas;
use crate::coords::Point;
use crate::line::Stroke;

/// Regular grid of `cols` × `rows` cells anchored at `origin`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    pub origin: Point,
    pub cols: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Grid {
    #[inline]
    pub const fn new(origin: Point, cols: u32, rows: u32, cell_width: u32, cell_height: u32) -> Self {
        Self { origin, cols, rows, cell_width, cell_height }
    }

    /// Top-left pixel of cell `(col, row)`. Saturates instead of wrapping.
    #[inline]
    pub fn cell_origin(&self, col: u32, row: u32) -> Point {
        self.origin.offset(extent(col, self.cell_width), extent(row, self.cell_height))
    }

    #[inline]
    fn span(&self) -> Point {
        Point::new(extent(self.cols, self.cell_width), extent(self.rows, self.cell_height))
    }
}

/// `count * size` clamped into `i32`.
#[inline]
fn extent(count: u32, size: u32) -> i32 {
    i32::try_from(count.saturating_mul(size)).unwrap_or(i32::MAX)
}

impl PixelCanvas {
    /// Draws `cols + 1` vertical and `rows + 1` horizontal lines.
    pub fn draw_grid(&mut self, grid: &Grid, stroke: &Stroke) {
        let span = grid.span();
        for col in 0..=grid.cols {
            let top = grid.cell_origin(col, 0);
            self.draw_thick_line(top, top.offset(0, span.y), stroke);
        }
        for row in 0..=grid.rows {
            let left = grid.cell_origin(0, row);
            self.draw_thick_line(left, left.offset(span.x, 0), stroke);
        }
    }
}
