use crate::coords::Point;

/// Integer error-accumulation line iterator.
///
/// Each step advances the axis whose accumulated error is larger, so the
/// path is the minimal 8-connected one with no floating-point drift. Yields
/// `max(|dx|, |dy|) + 1` points.
#[derive(Debug, Clone)]
pub struct IncrementalLine {
    cur: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl IncrementalLine {
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();
        Self {
            cur: from,
            end: to,
            dx,
            dy,
            sx: if to.x >= from.x { 1 } else { -1 },
            sy: if to.y >= from.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for IncrementalLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }

        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = self.cur.chebyshev_distance(self.end) as usize + 1;
        (left, Some(left))
    }
}
