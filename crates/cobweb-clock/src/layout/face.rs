//! Clock-face markers.

use cobweb_engine::paint::Color;
use cobweb_engine::scene::SegmentCmd;

use crate::angle::dial_angle;
use crate::geometry::ClockGeometry;

/// Inner anchor of an hour marker, as a fraction of the dial radius.
///
/// Numerically equal to the cobweb wire anchor, but deliberately a
/// separate constant: the two are independent visual choices.
const HOUR_MARKER_INNER: f32 = 0.8;

/// Inner anchor of a minute marker, as a fraction of the dial radius.
const MINUTE_MARKER_INNER: f32 = 0.9;

const HOUR_MARKER_WIDTH: f32 = 4.0;
const MINUTE_MARKER_WIDTH: f32 = 2.0;

/// The 12 hour markers, ascending from twelve o'clock.
///
/// Lazy and restartable — call again for a fresh pass. Each marker runs
/// from 0.8× to 1.0× the radius along its hour angle.
pub fn hour_markers(
    geom: ClockGeometry,
    color: Color,
) -> impl Iterator<Item = SegmentCmd> {
    (0..12).map(move |hour| {
        marker(
            geom,
            dial_angle(hour as f64, 12.0),
            HOUR_MARKER_INNER,
            HOUR_MARKER_WIDTH,
            color,
        )
    })
}

/// The 55 minute markers, ascending, skipping the five-minute positions
/// already covered by hour markers.
///
/// Each marker runs from 0.9× to 1.0× the radius along its minute angle.
pub fn minute_markers(
    geom: ClockGeometry,
    color: Color,
) -> impl Iterator<Item = SegmentCmd> {
    (0..60).filter(|minute| minute % 5 != 0).map(move |minute| {
        marker(
            geom,
            dial_angle(minute as f64, 60.0),
            MINUTE_MARKER_INNER,
            MINUTE_MARKER_WIDTH,
            color,
        )
    })
}

fn marker(
    geom: ClockGeometry,
    angle: f64,
    inner: f32,
    width: f32,
    color: Color,
) -> SegmentCmd {
    SegmentCmd::new(
        geom.point_at(angle, geom.radius * inner),
        geom.point_at(angle, geom.radius),
        color,
        width,
    )
}
