use crate::coords::Point;

/// Floating-point line iterator stepping a parameter `t` from 0 to 1.
///
/// The segment of Euclidean length `d` is split into `ceil(d)` equal
/// intervals, so each step moves at most one pixel per axis and `t = 1` is hit
/// exactly. Positions are rounded half-up to the nearest pixel. Shallow
/// lines may yield the same pixel more than once.
#[derive(Debug, Clone)]
pub struct ParametricLine {
    from: Point,
    dx: f64,
    dy: f64,
    steps: u64,
    i: u64,
    done: bool,
}

impl ParametricLine {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = f64::from(to.x) - f64::from(from.x);
        let dy = f64::from(to.y) - f64::from(from.y);
        let distance = dx.hypot(dy);

        // Zero-length segment: the interval count below would be 0 and `t`
        // would divide by it. Emit the endpoint once instead.
        let steps = if distance == 0.0 { 0 } else { distance.ceil() as u64 };

        Self { from, dx, dy, steps, i: 0, done: false }
    }
}

impl Iterator for ParametricLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        if self.steps == 0 {
            self.done = true;
            return Some(self.from);
        }

        let t = self.i as f64 / self.steps as f64;
        let x = f64::from(self.from.x) + self.dx * t;
        let y = f64::from(self.from.y) + self.dy * t;

        self.i += 1;
        if self.i > self.steps {
            self.done = true;
        }

        Some(Point::round_from(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = (self.steps + 1 - self.i) as usize;
        (left, Some(left))
    }
}
