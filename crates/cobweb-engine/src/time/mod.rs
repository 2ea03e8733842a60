//! Time subsystem.
//!
//! Resolves the system clock into civil wall-clock components in a named
//! IANA timezone. Intended usage:
//! - call [`sample`] exactly once per frame and share the result across
//!   every layout of that frame
//! - use [`components_at`] when the instant is already known (tests,
//!   host-driven replay)

mod components;
mod wall_clock;

pub use components::TimeComponents;
pub use wall_clock::{TimeError, components_at, resolve_zone, sample};
