//! Rendering seam.
//!
//! The engine records frames into `scene` draw streams; actual painting is
//! delegated to a host-supplied [`DrawSurface`]. [`replay`] walks a stream
//! in paint order and dispatches each command.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Surfaces paint immediately and never fail; host-side I/O happens
//!   outside this seam.

mod surface;
mod svg;

pub use surface::{DrawSurface, replay};
pub use svg::SvgSurface;
