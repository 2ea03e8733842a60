//! Dial angle mapping.
//!
//! Convention: twelve o'clock (top of the dial) is −π/2 and angles grow
//! clockwise, which on a +Y-down surface means the usual `(cos, sin)`
//! projection just works.

use std::f64::consts::{FRAC_PI_2, TAU};

use cobweb_engine::time::TimeComponents;

/// Maps elapsed dial units to a drawing angle in radians.
///
/// One full revolution spans `units_per_turn` units, so
/// `dial_angle(0, _) == -π/2` (top) and `dial_angle(3, 12) == 0` (three
/// o'clock, right side). Total over all finite inputs; non-finite inputs
/// propagate as non-finite output.
#[inline]
pub fn dial_angle(units: f64, units_per_turn: f64) -> f64 {
    units * (TAU / units_per_turn) - FRAC_PI_2
}

/// Hour-hand angle: the 12-hour dial position advanced by elapsed minutes.
#[inline]
pub fn hour_angle(t: &TimeComponents) -> f64 {
    dial_angle(t.fractional_hour(), 12.0)
}

/// Minute-hand angle: the minute position advanced by elapsed seconds.
#[inline]
pub fn minute_angle(t: &TimeComponents) -> f64 {
    dial_angle(t.fractional_minute(), 60.0)
}

/// Second-hand angle including the sub-second fraction, so the hand
/// sweeps smoothly instead of stepping once per second.
#[inline]
pub fn second_angle(t: &TimeComponents) -> f64 {
    dial_angle(t.smooth_second(), 60.0)
}
