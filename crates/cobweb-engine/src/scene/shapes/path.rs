use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Stroked polyline payload.
///
/// A closed path strokes back from the last point to the first as one
/// continuous contour; it is not equivalent to pushing the edges as
/// independent segments (joins render differently on most backends).
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub points: Vec<Vec2>,
    pub closed: bool,
    pub color: Color,
    pub width: f32,
}

impl PathCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, closed: bool, color: Color, width: f32) -> Self {
        Self { points, closed, color, width }
    }

    /// Closed contour through `points`.
    #[inline]
    pub fn closed(points: Vec<Vec2>, color: Color, width: f32) -> Self {
        Self::new(points, true, color, width)
    }
}

impl DrawList {
    /// Records a stroked path.
    #[inline]
    pub fn push_path(&mut self, layer: Layer, cmd: PathCmd) {
        self.push(layer, DrawCmd::Path(cmd));
    }
}
