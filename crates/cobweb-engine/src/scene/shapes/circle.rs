use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Filled circle payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn push_circle(&mut self, layer: Layer, cmd: CircleCmd) {
        self.push(layer, DrawCmd::Circle(cmd));
    }

    /// Records a filled circle from its parts.
    #[inline]
    pub fn push_filled_circle(&mut self, layer: Layer, center: Vec2, radius: f32, color: Color) {
        self.push_circle(layer, CircleCmd::new(center, radius, color));
    }
}
