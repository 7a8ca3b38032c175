use crate::coords::Color;
use crate::error::RasterError;

/// Row-major RGBA pixel buffer owned by a single render.
///
/// Draw helpers from [`line`](crate::line), [`shapes`](crate::shapes) and
/// [`curve`](crate::curve) are implemented as methods on this type and all
/// funnel through [`set`](Self::set), so every write is bounds-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    /// Creates a `width` × `height` canvas pre-filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let len = width as usize * height as usize;
        log::trace!("PixelCanvas::new {width}x{height}");
        Self { width, height, pixels: vec![fill; len] }
    }

    /// Builds a canvas from tightly packed RGBA8 bytes, e.g. a decoded image.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(RasterError::BufferSize { expected, actual: bytes.len() });
        }
        // `Color` has alignment 1, so this cast cannot fail on alignment.
        let pixels = bytemuck::cast_slice::<u8, Color>(bytes).to_vec();
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Writes one pixel. Coordinates outside the canvas are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Returns the stored color, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites every pixel.
    #[inline]
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Row-major view of the buffer for encoders.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The same buffer as packed RGBA8 bytes. No copy.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    #[inline]
    pub(crate) fn row(&self, y: u32) -> &[Color] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn new_is_prefilled() {
        let c = PixelCanvas::new(3, 2, RED);
        assert_eq!(c.pixels().len(), 6);
        assert!(c.pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn set_then_get() {
        let mut c = PixelCanvas::new(4, 4, Color::WHITE);
        c.set(2, 3, RED);
        assert_eq!(c.get(2, 3), Some(RED));
        assert_eq!(c.pixels()[3 * 4 + 2], RED);
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut c = PixelCanvas::new(4, 4, Color::WHITE);
        let before = c.clone();
        c.set(-1, 0, RED);
        c.set(0, -1, RED);
        c.set(4, 0, RED);
        c.set(0, 4, RED);
        c.set(i32::MAX, i32::MIN, RED);
        assert_eq!(c, before);
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let c = PixelCanvas::new(4, 4, Color::WHITE);
        assert_eq!(c.get(4, 0), None);
        assert_eq!(c.get(-1, -1), None);
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut c = PixelCanvas::new(2, 2, Color::WHITE);
        c.set(0, 0, RED);
        c.fill(Color::BLACK);
        assert!(c.pixels().iter().all(|&p| p == Color::BLACK));
    }

    #[test]
    fn zero_sized_canvas_accepts_writes() {
        let mut c = PixelCanvas::new(0, 0, Color::WHITE);
        c.set(0, 0, RED);
        assert_eq!(c.get(0, 0), None);
        assert!(c.as_bytes().is_empty());
    }

    // ── byte views ────────────────────────────────────────────────────────

    #[test]
    fn as_bytes_is_rgba_row_major() {
        let mut c = PixelCanvas::new(2, 1, Color::TRANSPARENT);
        c.set(1, 0, Color::new(10, 20, 30, 40));
        assert_eq!(c.as_bytes(), &[0, 0, 0, 0, 10, 20, 30, 40]);
    }

    #[test]
    fn from_rgba_bytes_checks_length() {
        let err = PixelCanvas::from_rgba_bytes(2, 2, &[0; 12]).unwrap_err();
        assert_eq!(err, RasterError::BufferSize { expected: 16, actual: 12 });

        let c = PixelCanvas::from_rgba_bytes(1, 1, &[1, 2, 3, 4]).unwrap();
        assert_eq!(c.get(0, 0), Some(Color::new(1, 2, 3, 4)));
    }
}
