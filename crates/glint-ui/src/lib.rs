//! Glint UI — a small widget layer on top of `glint-engine`.
//!
//! The centerpiece is [`widgets::label::Label`]: a text label with content
//! insets and an optional eight-direction linear-gradient fill over the
//! glyph region, plus a delegation hook for copy/paste text.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glint_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf")).unwrap();
//!
//! let label = Label::new("Hello!", font, 18.0, Color::from_straight(1.0, 1.0, 1.0, 1.0))
//!     .with_padding(Edges::all(8.0))
//!     .with_gradient(
//!         GradientDirection::LeftToRight,
//!         vec![
//!             Color::from_srgb_u8(255, 64, 64, 255),
//!             Color::from_srgb_u8(64, 64, 255, 255),
//!         ],
//!     );
//!
//! let mut surface = Surface::new(320, 64);
//! scene.frame(&label.into(), &mut surface);
//! // surface.data() now holds the composited RGBA8 pixels.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere
//! an [`Element`](widget::Element) is accepted.

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend UI — import this in component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::label::{Label, PasteTextProvider};

    // Re-export the engine primitives everyone needs.
    pub use glint_engine::coords::{Rect, Vec2};
    pub use glint_engine::paint::{
        Color, ColorStop, GradientDirection, GradientSpec, LinearGradient, Paint,
    };
    pub use glint_engine::raster::Surface;
    pub use glint_engine::text::{FontId, ShapedGlyph, ShapedRun};
}
