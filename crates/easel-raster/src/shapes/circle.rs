use crate::canvas::PixelCanvas;
use crate::coords::{Color, Point};
use crate::error::RasterError;

/// Circle draw payload.
///
/// Filled circles cover every pixel with `d² ≤ r²`. Rings additionally
/// require `d² ≥ (r − 1)²`, which approximates a one-pixel outline.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub filled: bool,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: i32, filled: bool) -> Self {
        Self { center, radius, filled }
    }

    #[inline]
    pub const fn filled(center: Point, radius: i32) -> Self {
        Self::new(center, radius, true)
    }

    #[inline]
    pub const fn ring(center: Point, radius: i32) -> Self {
        Self::new(center, radius, false)
    }

    /// Whether the circle sets pixel `p`.
    pub fn covers(&self, p: Point) -> bool {
        let r = i64::from(self.radius);
        let d2 = p.distance_sq(self.center);
        if d2 > r * r {
            return false;
        }
        self.filled || d2 >= (r - 1) * (r - 1)
    }
}

impl PixelCanvas {
    /// Scans the bounding square of `circle` and sets every covered pixel.
    ///
    /// Negative radii are rejected before any pixel is touched.
    pub fn draw_circle(&mut self, circle: Circle, color: Color) -> Result<(), RasterError> {
        if circle.radius < 0 {
            log::debug!("draw_circle: rejecting radius {}", circle.radius);
            return Err(RasterError::NegativeRadius(circle.radius));
        }

        let Circle { center, radius: r, .. } = circle;
        for y in center.y.saturating_sub(r)..=center.y.saturating_add(r) {
            for x in center.x.saturating_sub(r)..=center.x.saturating_add(r) {
                if circle.covers(Point::new(x, y)) {
                    self.set(x, y, color);
                }
            }
        }
        Ok(())
    }
}
