//! Image codec boundary.
//!
//! The rasterizer never touches files; this module turns a finished
//! [`PixelCanvas`] into PNG bytes or a file, and decodes PNG/JPEG images back
//! into canvases for compositing.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use easel_raster::PixelCanvas;
use image::{ImageFormat, RgbaImage};

/// Copies the canvas into an `image` buffer.
pub fn to_rgba_image(canvas: &PixelCanvas) -> Result<RgbaImage> {
    RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.as_bytes().to_vec())
        .context("canvas buffer does not match its dimensions")
}

/// Encodes the canvas as PNG in memory.
pub fn encode_png(canvas: &PixelCanvas) -> Result<Vec<u8>> {
    let img = to_rgba_image(canvas)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).context("PNG encoding failed")?;
    Ok(out.into_inner())
}

/// Writes the canvas to `path` as PNG, whatever the extension.
pub fn save_png(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    let img = to_rgba_image(canvas)?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {} ({}x{})", path.display(), canvas.width(), canvas.height());
    Ok(())
}

/// Decodes a PNG or JPEG file into a canvas.
pub fn load_canvas(path: &Path) -> Result<PixelCanvas> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    Ok(PixelCanvas::from_rgba_bytes(w, h, img.as_raw())?)
}

/// Whether `path` has an extension this module can decode.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|e| matches!(e.as_str(), "png" | "jpg" | "jpeg"))
}
