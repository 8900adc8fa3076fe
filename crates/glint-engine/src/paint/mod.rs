//! Paint model shared between the UI layer and the raster surface.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, GradientDirection, GradientSpec, LinearGradient};

use crate::coords::Vec2;

/// Paint source for filling glyph coverage or geometry.
///
/// Intentionally a small enum. Extend by adding variants (`RadialGradient`,
/// `Image`, …) while keeping the enum stable for renderer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Evaluates the paint at a pixel position.
    ///
    /// Solid paints are position-independent; gradients project `p` onto
    /// their pixel-space axis.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.color_at(p),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
