use std::cell::RefCell;
use std::rc::Weak;

use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::{Color, GradientDirection, GradientSpec, Paint};
use glint_engine::text::{FontId, ShapedRun};

use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

// ── paste delegation ──────────────────────────────────────────────────────

/// Host hook that overrides the text a label produces for copy/paste.
///
/// The label holds a [`Weak`] reference: the provider's owner lives
/// independently of the label, and a dropped provider simply means "no
/// override" — never an error.
pub trait PasteTextProvider {
    /// Replacement copy text, or `None` to use the label's own text.
    fn paste_text_for_label(&self) -> Option<String>;
}

// ── label ─────────────────────────────────────────────────────────────────

/// Cached shaping result, valid until a property or the content width changes.
struct CachedLayout {
    max_width: Option<f32>,
    run: ShapedRun,
}

/// A text label with content insets and an optional linear-gradient fill
/// over the glyph region.
///
/// Padding contributes to both [`measure`](Widget::measure) and
/// [`paint`](Widget::paint): the measured size is the text's intrinsic size
/// grown by the insets, and drawing happens inside the bounds shrunk by the
/// same insets (clamped to zero — oversized padding draws nothing).
///
/// With two or more `gradient_colors`, glyphs are filled with an evenly
/// spaced multi-stop gradient along `direction`, spanning the whole glyph
/// bounding box (one continuous ramp even across wrapped lines). With fewer
/// than two colors the label draws in its flat foreground `color`, exactly
/// like a plain text widget.
///
/// # Example
/// ```rust,ignore
/// Label::new("Hello", font, 16.0, white)
///     .with_padding(Edges::all(6.0))
///     .with_gradient(GradientDirection::TopToDown, vec![red, blue])
/// ```
pub struct Label {
    text: String,
    font: FontId,
    size: f32,
    color: Color,
    padding: Edges,
    direction: GradientDirection,
    gradient_colors: Vec<Color>,
    paste_provider: Option<Weak<dyn PasteTextProvider>>,
    /// `Some` = layout clean, `None` = dirty; recomputed lazily on paint.
    layout: RefCell<Option<CachedLayout>>,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            size,
            color,
            padding: Edges::default(),
            direction: GradientDirection::default(),
            gradient_colors: Vec::new(),
            paste_provider: None,
            layout: RefCell::new(None),
        }
    }

    // ── builder-style construction ────────────────────────────────────────

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gradient(mut self, direction: GradientDirection, colors: Vec<Color>) -> Self {
        self.direction = direction;
        self.gradient_colors = colors;
        self
    }

    pub fn with_paste_text_provider(mut self, provider: Weak<dyn PasteTextProvider>) -> Self {
        self.paste_provider = Some(provider);
        self
    }

    // ── property setters (mark layout dirty, recompute lazily) ────────────

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.padding = padding;
        self.invalidate();
    }

    pub fn set_gradient_direction(&mut self, direction: GradientDirection) {
        self.direction = direction;
        self.invalidate();
    }

    pub fn set_gradient_colors(&mut self, colors: Vec<Color>) {
        self.gradient_colors = colors;
        self.invalidate();
    }

    /// Installs (or clears) the copy/paste override hook.
    pub fn set_paste_text_provider(&mut self, provider: Option<Weak<dyn PasteTextProvider>>) {
        self.paste_provider = provider;
        self.invalidate();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn invalidate(&mut self) {
        *self.layout.get_mut() = None;
    }

    // ── copy/paste hook ───────────────────────────────────────────────────

    /// Text this label contributes to a copy/paste interaction.
    ///
    /// Consults the provider first: a live provider returning a non-empty
    /// string wins; an absent, dropped, or declining provider falls back to
    /// the label's own text. Hosts wiring up clipboard behavior must call
    /// this rather than reading the text directly.
    pub fn paste_text(&self) -> String {
        if let Some(provider) = self.paste_provider.as_ref().and_then(Weak::upgrade) {
            if let Some(text) = provider.paste_text_for_label() {
                if !text.is_empty() {
                    return text;
                }
            }
        }
        self.text.clone()
    }

    // ── layout cache ──────────────────────────────────────────────────────

    /// Reshapes the text if the cache is dirty or the content width changed
    /// (e.g. the host resized the label's bounds). After this call the
    /// layout state is clean.
    fn ensure_layout(&self, painter: &Painter, max_width: Option<f32>) {
        let mut cache = self.layout.borrow_mut();
        let stale = match cache.as_ref() {
            Some(c) => c.max_width != max_width,
            None => true,
        };
        if stale {
            let run = painter.fonts().shape_text(&self.text, self.font, self.size, max_width);
            *cache = Some(CachedLayout { max_width, run });
        }
    }
}

impl Widget for Label {
    /// Intrinsic text size grown by padding on each axis, clamped into the
    /// constraints. Padding contributes even when the text is empty.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = constraints.shrink(self.padding);
        let text_max = if inner.max.x.is_finite() { Some(inner.max.x) } else { None };
        let text_size = ctx.fonts.measure_text(&self.text, self.font, self.size, text_max);
        constraints.constrain(Vec2::new(
            text_size.x + self.padding.h(),
            text_size.y + self.padding.v(),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let content = inset_rect(rect, self.padding);
        if content.is_empty() {
            return; // padding exceeds bounds; nothing to draw
        }

        let max_width = if content.size.x > 0.0 { Some(content.size.x) } else { None };
        self.ensure_layout(painter, max_width);
        let cache = self.layout.borrow();
        let Some(run) = cache.as_ref().map(|c| &c.run) else {
            return;
        };
        if run.is_empty() {
            return;
        }

        let paint = match GradientSpec::resolve(self.direction, &self.gradient_colors) {
            Some(spec) => {
                // The gradient spans the run's whole bounding box, so a
                // wrapped label gets one continuous ramp rather than a
                // per-line repeat.
                let glyph_box =
                    Rect::from_origin_size(run.bounds.origin + content.origin, run.bounds.size);
                Paint::LinearGradient(spec.in_rect(glyph_box))
            }
            None => Paint::Solid(self.color),
        };
        painter.draw_run(run, &paint, content.origin);
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect) -> EventResult {
        match event {
            UiEvent::Copy => {
                let text = self.paste_text();
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    if let Err(e) = cb.set_text(text) {
                        log::debug!("clipboard write failed: {e}");
                    }
                } else {
                    log::debug!("clipboard unavailable");
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glint_engine::raster::Surface;
    use glint_engine::text::FontSystem;

    use super::*;

    fn white() -> Color {
        Color::from_straight(1.0, 1.0, 1.0, 1.0)
    }

    fn label(text: &str) -> Label {
        // FontId(0) with an empty FontSystem: shaping yields an empty run,
        // measuring falls back to (0, size × 1.2). Layout-path tests only.
        Label::new(text, FontId(0), 10.0, white())
    }

    struct FixedProvider(String);

    impl PasteTextProvider for FixedProvider {
        fn paste_text_for_label(&self) -> Option<String> {
            Some(self.0.clone())
        }
    }

    struct DecliningProvider;

    impl PasteTextProvider for DecliningProvider {
        fn paste_text_for_label(&self) -> Option<String> {
            None
        }
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn measure_adds_padding_to_intrinsic_size() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let l = label("x").with_padding(Edges { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 });
        let size = l.measure(Constraints::unbounded(), &ctx);
        // intrinsic = (0, 12); + padding: w = 0+4+2, h = 12+1+3
        assert_eq!(size, Vec2::new(6.0, 16.0));
    }

    #[test]
    fn measure_empty_text_still_includes_padding() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let l = label("").with_padding(Edges::all(5.0));
        let size = l.measure(Constraints::unbounded(), &ctx);
        assert_eq!(size.x, 10.0);
        assert!(size.y >= 10.0);
    }

    #[test]
    fn measure_clamps_to_constraints() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let l = label("x").with_padding(Edges::all(50.0));
        let size = l.measure(Constraints::loose(Vec2::new(10.0, 10.0)), &ctx);
        assert_eq!(size, Vec2::new(10.0, 10.0));
    }

    // ── paint edge cases ──────────────────────────────────────────────────

    #[test]
    fn paint_with_oversized_padding_draws_nothing() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(10, 10);
        let l = label("hello").with_padding(Edges::all(20.0));
        l.paint(
            &mut Painter::new(&mut surface, &fonts),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(surface.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn paint_empty_text_is_noop() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(10, 10);
        let l = label("");
        l.paint(
            &mut Painter::new(&mut surface, &fonts),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(surface.data().iter().all(|&b| b == 0));
    }

    // ── layout cache state machine ────────────────────────────────────────

    #[test]
    fn setters_invalidate_cached_layout() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(10, 10);
        let mut l = label("a");
        l.paint(
            &mut Painter::new(&mut surface, &fonts),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(l.layout.borrow().is_some(), "paint should populate the cache");

        l.set_text("b");
        assert!(l.layout.borrow().is_none(), "set_text should mark layout dirty");

        l.paint(
            &mut Painter::new(&mut surface, &fonts),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(l.layout.borrow().is_some());

        l.set_gradient_direction(GradientDirection::TopToDown);
        assert!(l.layout.borrow().is_none());
    }

    // ── paste_text ────────────────────────────────────────────────────────

    #[test]
    fn paste_text_prefers_provider_override() {
        let provider: Rc<dyn PasteTextProvider> = Rc::new(FixedProvider("override".into()));
        let l = label("original").with_paste_text_provider(Rc::downgrade(&provider));
        assert_eq!(l.paste_text(), "override");
    }

    #[test]
    fn paste_text_without_provider_returns_own_text() {
        let l = label("original");
        assert_eq!(l.paste_text(), "original");
    }

    #[test]
    fn paste_text_ignores_empty_override() {
        let provider: Rc<dyn PasteTextProvider> = Rc::new(FixedProvider(String::new()));
        let l = label("original").with_paste_text_provider(Rc::downgrade(&provider));
        assert_eq!(l.paste_text(), "original");
    }

    #[test]
    fn paste_text_ignores_declining_provider() {
        let provider: Rc<dyn PasteTextProvider> = Rc::new(DecliningProvider);
        let l = label("original").with_paste_text_provider(Rc::downgrade(&provider));
        assert_eq!(l.paste_text(), "original");
    }

    #[test]
    fn paste_text_survives_dropped_provider() {
        let l;
        {
            let provider: Rc<dyn PasteTextProvider> = Rc::new(FixedProvider("override".into()));
            l = label("original").with_paste_text_provider(Rc::downgrade(&provider));
            assert_eq!(l.paste_text(), "override");
        }
        // Provider owner is gone; the weak reference no longer upgrades.
        assert_eq!(l.paste_text(), "original");
    }
}
