use glint_engine::coords::{Rect, Vec2};
use glint_engine::raster::Surface;
use glint_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Element;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the [`FontSystem`] and drives the measure → paint cycle of a root
/// [`Element`] into a CPU [`Surface`]. The host's render loop calls
/// [`frame`](Self::frame) once per redraw and [`dispatch`](Self::dispatch)
/// for input events.
pub struct UiScene {
    /// Public so hosts can measure text outside the frame cycle.
    pub font_system: FontSystem,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new() }
    }

    /// Loads a TrueType/OpenType font for use by widgets.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(bytes)
    }

    /// Measures and paints `root` into `surface`.
    ///
    /// The root is given the surface extent as loose constraints and painted
    /// at the origin within its measured size. Returns the measured size.
    pub fn frame(&self, root: &Element, surface: &mut Surface) -> Vec2 {
        let viewport = surface.bounds();
        let ctx = LayoutCtx { fonts: &self.font_system };
        let size = root.measure(Constraints::loose(viewport.size), &ctx);

        let mut painter = Painter::new(surface, &self.font_system);
        root.paint(&mut painter, Rect::from_origin_size(Vec2::zero(), size));
        size
    }

    /// Routes an input event to `root` within its last painted rect.
    pub fn dispatch(&self, root: &mut Element, event: &UiEvent, rect: Rect) -> EventResult {
        root.on_event(event, rect)
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
