//! Coordinate and geometry types shared between the engine and the UI layer.
//!
//! Canonical space:
//! - Logical pixels (the CPU surface is 1:1 logical-to-physical)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
