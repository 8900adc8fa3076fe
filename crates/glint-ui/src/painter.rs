use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::{Color, Paint};
use glint_engine::raster::{Surface, pixel_center};
use glint_engine::text::{FontId, FontSystem, ShapedRun};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's CPU [`Surface`] with a widget-level API and borrows
/// the font system so widgets can shape and measure text while painting.
pub struct Painter<'a> {
    surface: &'a mut Surface,
    font_system: &'a FontSystem,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut Surface, font_system: &'a FontSystem) -> Self {
        Self { surface, font_system }
    }

    #[inline]
    pub fn fonts(&self) -> &FontSystem {
        self.font_system
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` with the painter's font system.
    pub fn measure_text(
        &self,
        text: &str,
        font: FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> Vec2 {
        self.font_system.measure_text(text, font, size, max_width)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.surface.fill_rect(rect, color);
    }

    /// Shapes `text` and draws it at `origin` in a flat color.
    pub fn text(
        &mut self,
        text: &str,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let run = self.font_system.shape_text(text, font, size, max_width);
        self.draw_run(&run, &Paint::Solid(color), origin);
    }

    /// Composites a shaped run through its glyph coverage with `paint`.
    ///
    /// `origin` places the run's top-left on the surface; gradient paints
    /// are expected in surface pixel space (see `GradientSpec::in_rect`).
    /// An empty run is a no-op.
    ///
    /// For gradient paints, the gradient is rendered into a buffer sized to
    /// the run's bounding box and then masked by per-glyph coverage, so
    /// gradient colors appear only where glyph pixels are covered. The
    /// buffer lives only for the duration of this call.
    pub fn draw_run(&mut self, run: &ShapedRun, paint: &Paint, origin: Vec2) {
        if run.is_empty() {
            return;
        }

        let gradient = match paint {
            Paint::LinearGradient(_) => {
                let bounds = Rect::from_origin_size(run.bounds.origin + origin, run.bounds.size);
                Some(GradientBuffer::render(paint, bounds))
            }
            Paint::Solid(_) => None,
        };

        for glyph in &run.glyphs {
            let gx = (origin.x + glyph.x).round() as i32;
            let gy = (origin.y + glyph.y).round() as i32;
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let cov = glyph.coverage[row * glyph.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let x = gx + col as i32;
                    let y = gy + row as i32;
                    let base = match &gradient {
                        Some(buf) => buf.at(x, y),
                        None => paint.sample(pixel_center(x, y)),
                    };
                    self.surface.blend_pixel(x, y, base.scaled(cov as f32 / 255.0));
                }
            }
        }
    }
}

// ── gradient buffer ───────────────────────────────────────────────────────

/// Offscreen gradient raster covering a run's bounding box.
///
/// Scoped to a single `draw_run` call; no cross-call caching.
struct GradientBuffer {
    x0: i32,
    y0: i32,
    width: usize,
    height: usize,
    colors: Vec<Color>,
}

impl GradientBuffer {
    fn render(paint: &Paint, bounds: Rect) -> Self {
        let x0 = bounds.origin.x.floor() as i32;
        let y0 = bounds.origin.y.floor() as i32;
        let width = (bounds.max().x.ceil() as i32 - x0).max(0) as usize;
        let height = (bounds.max().y.ceil() as i32 - y0).max(0) as usize;

        let mut colors = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                colors.push(paint.sample(pixel_center(x0 + col as i32, y0 + row as i32)));
            }
        }
        Self { x0, y0, width, height, colors }
    }

    /// Gradient color at surface pixel `(x, y)`; edge-clamped so glyph
    /// pixels that round just outside the box still sample the gradient.
    #[inline]
    fn at(&self, x: i32, y: i32) -> Color {
        if self.width == 0 || self.height == 0 {
            return Color::transparent();
        }
        let col = (x - self.x0).clamp(0, self.width as i32 - 1) as usize;
        let row = (y - self.y0).clamp(0, self.height as i32 - 1) as usize;
        self.colors[row * self.width + col]
    }
}
