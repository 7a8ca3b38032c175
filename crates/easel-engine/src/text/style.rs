use easel_raster::Color;

use super::FontId;

/// Which part of the first line the anchor point refers to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAnchor {
    /// Anchor is the left end of the baseline (pen position).
    #[default]
    Baseline,
    /// Anchor is the top-left of the line box.
    TopLeft,
}

/// Text configuration passed with every draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    /// Font size in pixels. Also the line advance for multi-line draws.
    pub size: f32,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl TextStyle {
    /// Black text on the baseline.
    #[inline]
    pub fn new(font: FontId, size: f32) -> Self {
        Self { font, size, color: Color::BLACK, anchor: TextAnchor::Baseline }
    }

    #[inline]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[inline]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}
