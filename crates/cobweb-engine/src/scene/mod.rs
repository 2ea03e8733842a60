//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands for one frame
//! - keep shape-specific payloads and push helpers isolated per shape file
//!   under `scene::shapes`
//!
//! Paint order is insertion order: frames are recorded back-to-front, so no
//! sorting pass exists. Items carry a [`Layer`] tag for diagnostics and
//! test accounting only.

mod cmd;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::Layer;
pub use list::{DrawItem, DrawList};
pub use shapes::{CircleCmd, PathCmd, SegmentCmd};
