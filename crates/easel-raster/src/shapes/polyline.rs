use crate::canvas::PixelCanvas;
use crate::coords::{Color, Point};
use crate::line::LineAlgorithm;

impl PixelCanvas {
    /// Connects consecutive points with lines. A single point is drawn as one
    /// pixel; an empty sequence draws nothing.
    pub fn draw_polyline<I>(&mut self, points: I, color: Color, algorithm: LineAlgorithm)
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let Some(mut prev) = points.next() else { return };
        self.set(prev.x, prev.y, color);
        for p in points {
            self.draw_line(prev, p, color, algorithm);
            prev = p;
        }
    }

    /// Like [`draw_polyline`](Self::draw_polyline), then connects the last
    /// point back to the first.
    pub fn draw_closed_polyline<I>(&mut self, points: I, color: Color, algorithm: LineAlgorithm)
    where
        I: IntoIterator<Item = Point>,
    {
        let mut first = None;
        let mut last = None;
        let points = points.into_iter().inspect(|&p| {
            first.get_or_insert(p);
            last = Some(p);
        });
        self.draw_polyline(points, color, algorithm);

        if let (Some(first), Some(last)) = (first, last) {
            self.draw_line(last, first, color, algorithm);
        }
    }
}
