use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::path::PathCmd;
use crate::scene::shapes::segment::SegmentCmd;

/// Backend-agnostic draw command.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - handle the variant in `render::replay`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Segment(SegmentCmd),
    Path(PathCmd),
    Circle(CircleCmd),
}
