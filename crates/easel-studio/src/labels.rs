use std::path::Path;

use anyhow::Result;
use easel_engine::{FontId, FontSystem, TextRenderer, TextStyle};
use easel_raster::{PixelCanvas, Point};

/// Optional text layer shared by the scenes.
///
/// Without a font every call is a no-op, so scenes stay renderable (and
/// testable) on machines with no font configured.
pub struct Labeler {
    fonts: FontSystem,
    font: Option<FontId>,
    renderer: TextRenderer,
}

impl Labeler {
    pub fn disabled() -> Self {
        Self { fonts: FontSystem::new(), font: None, renderer: TextRenderer::new() }
    }

    /// Loads `path` if given. A font that fails to load is an error; a missing
    /// path only disables labels.
    pub fn from_font_path(path: Option<&Path>) -> Result<Self> {
        let mut labeler = Self::disabled();
        match path {
            Some(path) => labeler.font = Some(labeler.fonts.load_font_file(path)?),
            None => log::warn!("no --font given, text labels will be skipped"),
        }
        Ok(labeler)
    }

    /// Draws `text` with its baseline starting at `at`.
    pub fn label(&mut self, canvas: &mut PixelCanvas, text: &str, at: Point, size: f32) {
        let Some(font) = self.font else { return };
        self.renderer.draw(canvas, &self.fonts, text, at, &TextStyle::new(font, size));
    }

    /// Draws `lines` top to bottom, `size` pixels apart.
    pub fn lines<S: AsRef<str>>(&mut self, canvas: &mut PixelCanvas, lines: &[S], at: Point, size: f32) {
        let Some(font) = self.font else { return };
        self.renderer.draw_lines(canvas, &self.fonts, lines, at, &TextStyle::new(font, size));
    }
}
