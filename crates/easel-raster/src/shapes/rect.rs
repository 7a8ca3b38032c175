use crate::canvas::PixelCanvas;
use crate::coords::Rect;
use crate::line::Stroke;

impl PixelCanvas {
    /// Outlines `rect` by stroking its four edges corner to corner
    /// (clockwise from the top-left). Empty rectangles draw nothing.
    pub fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let Some(corners) = rect.corners() else { return };
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            self.draw_thick_line(corners[i], next, stroke);
        }
    }
}
