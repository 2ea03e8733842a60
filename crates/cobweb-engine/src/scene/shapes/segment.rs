use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Stroked line segment payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
    pub width: f32,
}

impl SegmentCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, color: Color, width: f32) -> Self {
        Self { start, end, color, width }
    }

    /// Point halfway along the segment.
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        self.start.midpoint(self.end)
    }
}

impl DrawList {
    /// Records a stroked segment.
    #[inline]
    pub fn push_segment(&mut self, layer: Layer, cmd: SegmentCmd) {
        self.push(layer, DrawCmd::Segment(cmd));
    }
}
