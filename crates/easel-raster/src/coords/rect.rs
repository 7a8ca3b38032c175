use super::Point;

/// Axis-aligned pixel rectangle (top-left origin, inclusive of `origin`,
/// `width` × `height` pixels).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { origin: Point::new(x, y), width, height }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, width: u32, height: u32) -> Self {
        Self { origin, width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive bottom-right corner.
    #[inline]
    pub fn max(self) -> Point {
        Point::new(
            self.origin.x.saturating_add_unsigned(self.width),
            self.origin.y.saturating_add_unsigned(self.height),
        )
    }

    /// The four corner pixels in drawing order: top-left, top-right,
    /// bottom-right, bottom-left. `None` for an empty rectangle.
    pub fn corners(self) -> Option<[Point; 4]> {
        if self.is_empty() {
            return None;
        }
        let max = self.max().offset(-1, -1);
        Some([
            self.origin,
            Point::new(max.x, self.origin.y),
            max,
            Point::new(self.origin.x, max.y),
        ])
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x0.abs_diff(x1), y0.abs_diff(y1)))
        }
    }
}
