//! Square-grid contact sheet from a set of equally sized images.

use easel_raster::{Color, PixelCanvas, Rect};

/// Layout parameters for [`stitch`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StitchConfig {
    /// Padding around every image, in pixels.
    pub border: u32,
    pub background: Color,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self { border: 5, background: Color::WHITE }
    }
}

/// Side length of the largest square grid that `count` images fill.
#[inline]
pub fn grid_side(count: usize) -> usize {
    count.isqrt()
}

/// Lays out the first `grid_side(n)²` images row by row.
///
/// Cell size comes from the first image plus the border on each side.
/// Images of a different size are cropped to the cell interior. Returns
/// `None` when there is nothing to place.
pub fn stitch(images: &[PixelCanvas], config: &StitchConfig) -> Option<PixelCanvas> {
    let side = grid_side(images.len());
    let first = images.first().filter(|_| side > 0)?;

    let (iw, ih) = (first.width(), first.height());
    let cell_w = iw + 2 * config.border;
    let cell_h = ih + 2 * config.border;
    let side_u = side as u32;

    let mut sheet = PixelCanvas::new(cell_w * side_u, cell_h * side_u, config.background);
    log::debug!(
        "stitch: {side}x{side} grid of {iw}x{ih} images, {} dropped",
        images.len() - side * side
    );

    for (index, img) in images.iter().take(side * side).enumerate() {
        let (col, row) = ((index % side) as u32, (index / side) as u32);
        let dest = Rect::new(
            (col * cell_w + config.border) as i32,
            (row * cell_h + config.border) as i32,
            iw,
            ih,
        );
        sheet.copy_from(img, dest);
    }

    Some(sheet)
}
