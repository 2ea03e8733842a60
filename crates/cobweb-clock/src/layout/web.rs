//! Cobweb line art.

use cobweb_engine::paint::Color;
use cobweb_engine::scene::{PathCmd, SegmentCmd};
use cobweb_engine::time::TimeComponents;

use crate::angle::second_angle;
use crate::geometry::ClockGeometry;

/// One wire per hour position.
const WIRE_COUNT: usize = 12;

/// Fixed anchor of each wire, as a fraction of the dial radius.
///
/// Matches the hour-marker inner anchor numerically but is an independent
/// constant; the two are separate visual choices.
const WIRE_ANCHOR: f32 = 0.8;

/// Distance of the shared moving endpoint (the second-hand tip), as a
/// fraction of the dial radius.
const WIRE_TIP: f32 = 0.5;

/// Cobweb line set for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Cobweb {
    /// The 12 radial wires, ascending by hour position.
    pub wires: [SegmentCmd; WIRE_COUNT],
    /// Closed polygon through the wire midpoints, stroked as one contour.
    pub perimeter: PathCmd,
}

/// Computes the cobweb for the sampled time.
///
/// All 12 wires end at the same point: the instantaneous second-hand tip.
/// They converge there on purpose — 12 wires meeting one moving point —
/// and the perimeter polygon follows their midpoints, so it deforms as
/// the tip sweeps. With a zero radius everything collapses to the center;
/// no input is rejected.
pub fn cobweb(
    t: &TimeComponents,
    geom: ClockGeometry,
    color: Color,
    width: f32,
) -> Cobweb {
    let tip = geom.point_at(second_angle(t), geom.radius * WIRE_TIP);

    // Anchors sit at i·30° from the +X axis, unlike the markers' dial
    // angles; the full set of 12 positions is the same either way.
    let wires: [SegmentCmd; WIRE_COUNT] = std::array::from_fn(|i| {
        let angle = ((i * 30) as f64).to_radians();
        let anchor = geom.point_at(angle, geom.radius * WIRE_ANCHOR);
        SegmentCmd::new(anchor, tip, color, width)
    });

    let midpoints = wires.iter().map(SegmentCmd::midpoint).collect();
    let perimeter = PathCmd::closed(midpoints, color, width);

    Cobweb { wires, perimeter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobweb_engine::coords::Vec2;

    fn geom() -> ClockGeometry {
        ClockGeometry::new(Vec2::new(200.0, 200.0), 100.0)
    }

    fn t() -> TimeComponents {
        TimeComponents::new(10, 9, 15, 0.5)
    }

    #[test]
    fn all_wires_converge_on_one_tip() {
        let web = cobweb(&t(), geom(), Color::WHITE, 0.2);
        let tip = web.wires[0].end;
        for wire in &web.wires {
            assert_eq!(wire.end, tip);
        }
    }

    #[test]
    fn the_tip_is_the_second_hand_position() {
        let g = geom();
        let web = cobweb(&t(), g, Color::WHITE, 0.2);
        let expected = g.point_at(crate::angle::second_angle(&t()), g.radius * 0.5);
        assert_eq!(web.wires[0].end, expected);
    }

    #[test]
    fn anchors_are_fixed_at_eight_tenths_radius() {
        let g = geom();
        let web = cobweb(&t(), g, Color::WHITE, 0.2);
        for wire in &web.wires {
            assert!((wire.start.distance(g.center) - 80.0).abs() < 1e-3);
        }
        // First anchor is on the +X axis, not at twelve o'clock.
        assert!((web.wires[0].start.x - 280.0).abs() < 1e-3);
        assert!((web.wires[0].start.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn anchors_do_not_move_with_time() {
        let g = geom();
        let early = cobweb(&TimeComponents::new(0, 0, 0, 0.0), g, Color::WHITE, 0.2);
        let late = cobweb(&TimeComponents::new(23, 59, 59, 0.9), g, Color::WHITE, 0.2);
        for (a, b) in early.wires.iter().zip(&late.wires) {
            assert_eq!(a.start, b.start);
        }
    }

    #[test]
    fn perimeter_is_a_closed_path_through_the_midpoints() {
        let web = cobweb(&t(), geom(), Color::WHITE, 0.2);
        assert!(web.perimeter.closed);
        assert_eq!(web.perimeter.points.len(), WIRE_COUNT);
        for (p, wire) in web.perimeter.points.iter().zip(&web.wires) {
            assert_eq!(*p, wire.start.midpoint(wire.end));
        }
    }

    #[test]
    fn wires_carry_the_configured_paint() {
        let color = Color::from_srgb_u8(10, 20, 30);
        let web = cobweb(&t(), geom(), color, 1.5);
        for wire in &web.wires {
            assert_eq!(wire.color, color);
            assert_eq!(wire.width, 1.5);
        }
        assert_eq!(web.perimeter.color, color);
        assert_eq!(web.perimeter.width, 1.5);
    }

    #[test]
    fn zero_radius_collapses_the_whole_web_to_center() {
        let g = ClockGeometry::new(Vec2::new(50.0, 60.0), 0.0);
        let web = cobweb(&t(), g, Color::WHITE, 0.2);
        for wire in &web.wires {
            assert_eq!(wire.start, g.center);
            assert_eq!(wire.end, g.center);
        }
        for p in &web.perimeter.points {
            assert_eq!(*p, g.center);
        }
    }
}
