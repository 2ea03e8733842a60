//! Paint model.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//!
//! Colors here are pass-through values: the clock layers never blend or
//! interpret them, they only carry them from host configuration to the
//! drawing backend. Geometry types remain in `coords`.

mod color;

pub use color::Color;
