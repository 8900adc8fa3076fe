//! Glint engine crate.
//!
//! Owns the primitives the widget layer builds on: 2D geometry, the paint
//! model (colors and linear gradients), text shaping/rasterization, and a
//! CPU pixel surface used as the render target.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod text;
