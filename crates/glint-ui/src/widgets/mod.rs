//! Shipped widgets.

pub mod label;
