use crate::coords::Rect;

use super::PixelCanvas;

impl PixelCanvas {
    /// Copies `src`, anchored at its top-left pixel, into `dest`.
    ///
    /// The copied region is clipped to `dest`, to this canvas, and to the
    /// size of `src`. Pixels are replaced, not blended.
    pub fn copy_from(&mut self, src: &PixelCanvas, dest: Rect) {
        let bounds = Rect::new(0, 0, self.width(), self.height());
        let src_extent = Rect::from_origin_size(dest.origin, src.width(), src.height());

        let Some(region) = dest.intersect(bounds).and_then(|r| r.intersect(src_extent)) else {
            return;
        };

        // Offset of the visible region inside `src`; non-negative after clipping.
        let sx = (region.origin.x - dest.origin.x) as usize;
        let sy = (region.origin.y - dest.origin.y) as u32;
        let w = region.width as usize;

        for row in 0..region.height {
            let src_row = &src.row(sy + row)[sx..sx + w];
            let dst_x = region.origin.x as usize;
            let dst_row = self.row_mut(region.origin.y as u32 + row);
            dst_row[dst_x..dst_x + w].copy_from_slice(src_row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn copies_into_destination() {
        let src = PixelCanvas::new(2, 2, RED);
        let mut dst = PixelCanvas::new(5, 5, Color::WHITE);
        dst.copy_from(&src, Rect::new(1, 2, 2, 2));

        assert_eq!(dst.get(1, 2), Some(RED));
        assert_eq!(dst.get(2, 3), Some(RED));
        assert_eq!(dst.get(0, 2), Some(Color::WHITE));
        assert_eq!(dst.get(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn clips_to_dest_rect() {
        let src = PixelCanvas::new(4, 4, RED);
        let mut dst = PixelCanvas::new(6, 6, Color::WHITE);
        dst.copy_from(&src, Rect::new(0, 0, 2, 3));

        let red = dst.pixels().iter().filter(|&&p| p == RED).count();
        assert_eq!(red, 6);
        assert_eq!(dst.get(2, 0), Some(Color::WHITE));
    }

    #[test]
    fn clips_to_canvas_and_source() {
        let mut src = PixelCanvas::new(3, 3, RED);
        src.set(2, 2, Color::BLACK);
        let mut dst = PixelCanvas::new(4, 4, Color::WHITE);
        dst.copy_from(&src, Rect::new(-1, -1, 10, 10));

        // src (1, 1) lands on dst (0, 0); src (2, 2) on dst (1, 1).
        assert_eq!(dst.get(0, 0), Some(RED));
        assert_eq!(dst.get(1, 1), Some(Color::BLACK));
        // Past the source extent the destination is untouched.
        assert_eq!(dst.get(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn disjoint_dest_is_noop() {
        let src = PixelCanvas::new(2, 2, RED);
        let mut dst = PixelCanvas::new(2, 2, Color::WHITE);
        let before = dst.clone();
        dst.copy_from(&src, Rect::new(5, 5, 2, 2));
        assert_eq!(dst, before);
    }
}
