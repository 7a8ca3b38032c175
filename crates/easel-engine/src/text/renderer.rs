use std::collections::HashMap;

use easel_raster::{Color, PixelCanvas, Point};
use fontdue::layout::{
    CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle as GlyphStyle,
};
use fontdue::Metrics;

use super::{FontSystem, TextAnchor, TextStyle};

/// Draws strings into a [`PixelCanvas`].
///
/// Glyphs are rasterized by fontdue on first use and cached for the
/// renderer's lifetime. The cache key is `GlyphRasterConfig` (font, glyph,
/// size), so repeated labels are rasterized once.
pub struct TextRenderer {
    layout: Layout<()>,
    glyph_cache: HashMap<GlyphRasterConfig, (Metrics, Vec<u8>)>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            glyph_cache: HashMap::new(),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `text` anchored at `anchor`.
    ///
    /// Unknown fonts are logged and skipped; a label never fails a render.
    pub fn draw(
        &mut self,
        canvas: &mut PixelCanvas,
        fonts: &FontSystem,
        text: &str,
        anchor: Point,
        style: &TextStyle,
    ) {
        let Some(font) = fonts.get(style.font) else {
            log::warn!("TextRenderer: unknown FontId {:?}, skipping {text:?}", style.font);
            return;
        };

        let top = match style.anchor {
            TextAnchor::TopLeft => anchor.y as f32,
            TextAnchor::Baseline => {
                let ascent = font
                    .horizontal_line_metrics(style.size)
                    .map_or(style.size, |m| m.ascent);
                anchor.y as f32 - ascent
            }
        };

        self.layout.reset(&LayoutSettings {
            x: anchor.x as f32,
            y: top,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &GlyphStyle::new(text, style.size, 0));

        for g in self.layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }

            let (metrics, coverage) = self
                .glyph_cache
                .entry(g.key)
                .or_insert_with(|| font.rasterize_config(g.key));
            if metrics.width == 0 {
                continue;
            }

            let origin = Point::new(g.x.round() as i32, g.y.round() as i32);
            for (i, &c) in coverage.iter().enumerate() {
                if c == 0 {
                    continue;
                }
                let x = origin.x + (i % metrics.width) as i32;
                let y = origin.y + (i / metrics.width) as i32;
                if let Some(dst) = canvas.get(x, y) {
                    canvas.set(x, y, mix(dst, style.color, c));
                }
            }
        }
    }

    /// Draws one string per line, advancing `style.size` pixels per line.
    pub fn draw_lines<S: AsRef<str>>(
        &mut self,
        canvas: &mut PixelCanvas,
        fonts: &FontSystem,
        lines: &[S],
        anchor: Point,
        style: &TextStyle,
    ) {
        let advance = style.size.round() as i32;
        for (i, line) in lines.iter().enumerate() {
            let at = anchor.offset(0, i as i32 * advance);
            self.draw(canvas, fonts, line.as_ref(), at, style);
        }
    }

    /// Number of distinct glyph rasterizations held.
    pub fn cached_glyphs(&self) -> usize {
        self.glyph_cache.len()
    }
}

/// Mixes `src` over `dst` by glyph coverage (0 = keep `dst`, 255 = `src`).
fn mix(dst: Color, src: Color, coverage: u8) -> Color {
    let c = u16::from(coverage);
    let ch = |d: u8, s: u8| ((u16::from(s) * c + u16::from(d) * (255 - c) + 127) / 255) as u8;
    Color::new(ch(dst.r, src.r), ch(dst.g, src.g), ch(dst.b, src.b), ch(dst.a, src.a))
}
