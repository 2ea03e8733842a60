//! Cobweb engine crate.
//!
//! Renderer-agnostic substrate for the cobweb clock: coordinate and paint
//! value types, the recorded draw stream, the drawing-surface seam, and
//! wall-clock sampling. Nothing here owns a window or a render loop — the
//! host schedules frames and supplies the [`render::DrawSurface`]
//! implementation.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
