//! Pure-geometry layout producers.
//!
//! Responsibilities:
//! - compute shapes from dial geometry (and, where a shape tracks the
//!   current time, sampled components) — nothing else
//! - return draw commands as data; recording and replay live in `frame`
//!
//! None of these touch the system clock themselves: the scene samples time
//! once per frame and passes the same components to every producer, so a
//! frame cannot disagree with itself about "now".

pub mod face;
pub mod hands;
pub mod web;
