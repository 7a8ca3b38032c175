use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use easel_engine::encode::{is_supported_image, load_canvas};
use easel_engine::stitch::grid_side;
use easel_engine::{stitch, StitchConfig};
use easel_raster::PixelCanvas;

/// PNG/JPEG files directly inside `dir`, sorted by path.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Lays out the images in `dir` on a square contact sheet.
///
/// Only the first `grid_side(n)²` files are decoded; the rest are never
/// opened. Returns `Ok(None)` when the directory holds no usable images.
pub fn render(dir: &Path, border: u32) -> Result<Option<PixelCanvas>> {
    let mut paths = collect_images(dir)?;
    if paths.is_empty() {
        log::info!("no PNG or JPEG images in {}", dir.display());
        return Ok(None);
    }

    let side = grid_side(paths.len());
    if paths.len() > side * side {
        log::info!("using {} of {} images", side * side, paths.len());
        paths.truncate(side * side);
    }

    let images = paths
        .iter()
        .map(|p| load_canvas(p))
        .collect::<Result<Vec<_>>>()?;
    log::info!("loaded {} images from {}", images.len(), dir.display());

    let config = StitchConfig { border, ..StitchConfig::default() };
    Ok(stitch(&images, &config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::save_png;
    use easel_raster::Color;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("easel-studio-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn collects_only_supported_files_in_order() {
        let dir = scratch_dir("collect");
        for name in ["b.png", "a.JPG", "notes.txt", "c.jpeg"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("nested.png")).unwrap();

        let names: Vec<_> = collect_images(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.jpeg"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_renders_nothing() {
        let dir = scratch_dir("empty");
        assert!(render(&dir, 5).unwrap().is_none());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(collect_images(Path::new("/nonexistent/easel-studio")).is_err());
    }

    #[test]
    fn four_images_make_a_two_by_two_sheet() {
        let dir = scratch_dir("sheet");
        for (i, shade) in [10u8, 60, 110, 160].into_iter().enumerate() {
            let tile = PixelCanvas::new(4, 3, Color::gray(shade));
            save_png(&tile, &dir.join(format!("{i}.png"))).unwrap();
        }

        let sheet = render(&dir, 2).unwrap().unwrap();
        assert_eq!((sheet.width(), sheet.height()), (16, 14));
        assert_eq!(sheet.get(0, 0), Some(Color::WHITE));
        assert_eq!(sheet.get(2, 2), Some(Color::gray(10)));
        assert_eq!(sheet.get(10, 2), Some(Color::gray(60)));
        assert_eq!(sheet.get(2, 9), Some(Color::gray(110)));
        assert_eq!(sheet.get(10, 9), Some(Color::gray(160)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn images_past_the_square_are_never_decoded() {
        let dir = scratch_dir("leftover");
        for i in 0..4 {
            let tile = PixelCanvas::new(4, 3, Color::gray(40 * i as u8));
            save_png(&tile, &dir.join(format!("{i}.png"))).unwrap();
        }
        fs::write(dir.join("9.png"), b"not a png").unwrap();

        let sheet = render(&dir, 2).unwrap().unwrap();
        assert_eq!((sheet.width(), sheet.height()), (16, 14));
        assert_eq!(sheet.get(10, 9), Some(Color::gray(120)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn undecodable_placed_image_is_an_error() {
        let dir = scratch_dir("corrupt");
        fs::write(dir.join("0.png"), b"not a png").unwrap();
        assert!(render(&dir, 2).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
