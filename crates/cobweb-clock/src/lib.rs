//! Cobweb clock presentation layer.
//!
//! Pure-geometry layout producers for an analog clock with decorative
//! cobweb line art, plus the per-frame scene that records and replays
//! them. Everything is recomputed from absolute time each frame; the only
//! cross-frame state is configuration, dial geometry, and a reused draw
//! list.

pub mod angle;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod style;

pub use frame::ClockScene;
pub use geometry::ClockGeometry;
pub use style::{ClockConfig, ClockStyle};
