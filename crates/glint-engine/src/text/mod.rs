//! Text shaping and glyph rasterization over `fontdue`.
//!
//! The engine does not implement shaping itself: `fontdue` lays out glyph
//! boxes and rasterizes per-glyph coverage. This module wraps that behind
//! [`FontSystem`] and exposes the laid-out result as a [`ShapedRun`] the
//! painter can composite.

mod font_system;
mod shaped_run;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use shaped_run::{ShapedGlyph, ShapedRun};
