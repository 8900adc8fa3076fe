use std::fmt;

use crate::coords::Vec2;

use super::{ShapedGlyph, ShapedRun};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font loaded into a [`FontSystem`].
///
/// The index is public: ids normally come from [`FontSystem::load_font`],
/// but every text operation tolerates unknown ids (yielding empty runs),
/// so hosts may construct ids directly, e.g. when persisting font slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the host (or a
/// `UiScene`) and borrowed by measure/paint so glyphs can be shaped and
/// rasterized on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in measure and shape calls.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in logical pixels. An unknown `id` or empty
    /// `text` measures as a zero-width, one-line-high box so layout stays
    /// total over its inputs.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        let run = self.shape_text(text, id, size, max_width);
        if run.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }
        Vec2::new(run.bounds.max().x, run.bounds.max().y.max(size))
    }

    /// Lays out `text` within `max_width` and rasterizes per-glyph coverage.
    ///
    /// Positions are relative to the run origin (top-left of the first line).
    /// Whitespace produces no glyph boxes. An unknown `id` or empty `text`
    /// yields an empty run — never an error.
    #[must_use]
    pub fn shape_text(
        &self,
        text: &str,
        id: FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> ShapedRun {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            log::debug!("shape_text: unknown font id {id:?}");
            return ShapedRun::empty();
        };
        if text.is_empty() {
            return ShapedRun::empty();
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let mut glyphs = Vec::with_capacity(layout.glyphs().len());
        for g in layout.glyphs() {
            if g.width == 0 || g.height == 0 {
                continue; // whitespace and zero-extent glyphs carry no coverage
            }
            let (_, coverage) = font.rasterize_config(g.key);
            glyphs.push(ShapedGlyph {
                x: g.x,
                y: g.y,
                width: g.width,
                height: g.height,
                coverage,
            });
        }
        ShapedRun::from_glyphs(glyphs)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
