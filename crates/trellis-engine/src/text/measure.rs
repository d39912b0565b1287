use super::FontId;

/// Text measurement seam used by layout-adjacent widget code.
///
/// Implementations only need single-line metrics; widgets never wrap.
pub trait TextMeasure {
    /// Width of `text` on one line, in logical pixels.
    fn measure_width(&self, text: &str, font: FontId, size: f32) -> f32;

    /// Height of one line of text, in logical pixels.
    fn line_height(&self, font: FontId, size: f32) -> f32;
}

/// Fixed-advance estimate: every character is `char_width` wide.
///
/// Ignores the font and size. Default metrics match a 7x13 bitmap face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    #[inline]
    pub const fn new(char_width: f32, line_height: f32) -> Self {
        Self { char_width, line_height }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(7.0, 13.0)
    }
}

impl TextMeasure for MonospaceMetrics {
    #[inline]
    fn measure_width(&self, text: &str, _font: FontId, _size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    #[inline]
    fn line_height(&self, _font: FontId, _size: f32) -> f32 {
        self.line_height
    }
}
