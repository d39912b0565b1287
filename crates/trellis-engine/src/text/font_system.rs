use std::fmt;

use crate::text::TextMeasure;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// `FontId::DEFAULT` names the first loaded font, which is also what themes
/// reference unless told otherwise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FontId(pub(crate) usize);

impl FontId {
    pub const DEFAULT: FontId = FontId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontSystem {
    /// Sums horizontal advances of a single unwrapped line.
    ///
    /// Unknown font ids measure as zero width.
    fn measure_width(&self, text: &str, font: FontId, size: f32) -> f32 {
        let Some(f) = self.get(font) else {
            return 0.0;
        };
        text.chars()
            .map(|c| f.metrics(c, size).advance_width)
            .sum()
    }

    fn line_height(&self, font: FontId, size: f32) -> f32 {
        self.get(font)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| m.new_line_size)
            .unwrap_or(size * 1.2)
    }
}
