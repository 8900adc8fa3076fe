use crate::coords::Rect;

/// One positioned, rasterized glyph box.
///
/// `x`/`y` are the top-left corner of the glyph bitmap relative to the run
/// origin; `coverage` is a row-major `width × height` alpha bitmap
/// (`0` = transparent, `255` = fully covered).
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedGlyph {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl ShapedGlyph {
    /// Bounding box of this glyph, relative to the run origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width as f32, self.height as f32)
    }
}

/// A laid-out sequence of glyph boxes plus their union bounding box.
///
/// Produced by [`FontSystem::shape_text`](super::FontSystem::shape_text),
/// but constructible directly so compositing can be driven by synthetic
/// runs (tests, custom shapers).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedRun {
    pub glyphs: Vec<ShapedGlyph>,
    /// Union of all glyph boxes, relative to the run origin.
    /// Zero-sized for an empty run.
    pub bounds: Rect,
}

impl ShapedRun {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a run and computes its bounding box.
    pub fn from_glyphs(glyphs: Vec<ShapedGlyph>) -> Self {
        let bounds = glyphs
            .iter()
            .map(ShapedGlyph::bounds)
            .fold(Rect::default(), Rect::union);
        Self { glyphs, bounds }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_glyph(x: f32, y: f32, w: usize, h: usize) -> ShapedGlyph {
        ShapedGlyph { x, y, width: w, height: h, coverage: vec![255; w * h] }
    }

    #[test]
    fn empty_run_has_zero_bounds() {
        let run = ShapedRun::empty();
        assert!(run.is_empty());
        assert_eq!(run.bounds, Rect::default());
    }

    #[test]
    fn bounds_is_union_of_glyph_boxes() {
        let run = ShapedRun::from_glyphs(vec![
            solid_glyph(0.0, 2.0, 4, 6),
            solid_glyph(10.0, 0.0, 2, 8),
        ]);
        assert_eq!(run.bounds, Rect::new(0.0, 0.0, 12.0, 8.0));
    }
}
