//! Clock hands.

use cobweb_engine::paint::Color;
use cobweb_engine::scene::SegmentCmd;
use cobweb_engine::time::TimeComponents;

use crate::angle::{hour_angle, minute_angle, second_angle};
use crate::geometry::ClockGeometry;
use crate::style::ClockStyle;

/// Hand lengths as fractions of the dial radius.
const HOUR_LENGTH: f32 = 0.5;
const MINUTE_LENGTH: f32 = 0.75;
const SECOND_LENGTH: f32 = 0.9;

/// The three hands, in fixed hour, minute, second order.
///
/// Every hand starts at the dial center; only angle, length, and color
/// differ. The second hand uses the sub-second fraction so it sweeps
/// rather than stepping.
pub fn hands(
    t: &TimeComponents,
    geom: ClockGeometry,
    style: &ClockStyle,
) -> [SegmentCmd; 3] {
    [
        hand(geom, hour_angle(t), HOUR_LENGTH, style.hour_hand, style.hand_width),
        hand(geom, minute_angle(t), MINUTE_LENGTH, style.minute_hand, style.hand_width),
        hand(geom, second_angle(t), SECOND_LENGTH, style.second_hand, style.hand_width),
    ]
}

fn hand(
    geom: ClockGeometry,
    angle: f64,
    fraction: f32,
    color: Color,
    width: f32,
) -> SegmentCmd {
    SegmentCmd::new(
        geom.center,
        geom.point_at(angle, geom.radius * fraction),
        color,
        width,
    )
}
