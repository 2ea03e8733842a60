use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Immediate-mode drawing primitive supplied by the host.
///
/// Implementations paint synchronously and are infallible by contract;
/// anything that can fail (file I/O, GPU submission) belongs behind this
/// seam on the host side.
pub trait DrawSurface {
    /// Erases the whole surface before a frame replays onto it.
    fn clear(&mut self);

    /// Strokes a straight line from `start` to `end`.
    fn stroke_segment(&mut self, start: Vec2, end: Vec2, color: Color, width: f32);

    /// Strokes `points` as one continuous path, closing it back to the
    /// first point when `closed` is set.
    fn stroke_path(&mut self, points: &[Vec2], closed: bool, color: Color, width: f32);

    /// Fills a circle of `radius` logical pixels around `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Replays a recorded draw stream onto `surface` in paint order.
///
/// Degenerate items are dropped the way a renderer would drop them:
/// circles with non-positive radius and paths with fewer than two points
/// produce no draw calls. Zero-length segments are passed through — round
/// line caps make them visible dots on most backends.
pub fn replay(list: &DrawList, surface: &mut impl DrawSurface) {
    for item in list.items() {
        match &item.cmd {
            DrawCmd::Segment(cmd) => {
                surface.stroke_segment(cmd.start, cmd.end, cmd.color, cmd.width);
            }
            DrawCmd::Path(cmd) => {
                if cmd.points.len() < 2 {
                    continue;
                }
                surface.stroke_path(&cmd.points, cmd.closed, cmd.color, cmd.width);
            }
            DrawCmd::Circle(cmd) => {
                if cmd.radius <= 0.0 {
                    continue;
                }
                surface.fill_circle(cmd.center, cmd.radius, cmd.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Layer, PathCmd, SegmentCmd};

    /// Counts dispatched calls, in order.
    #[derive(Default)]
    struct CountingSurface {
        calls: Vec<&'static str>,
    }

    impl DrawSurface for CountingSurface {
        fn clear(&mut self) {
            self.calls.push("clear");
        }
        fn stroke_segment(&mut self, _: Vec2, _: Vec2, _: Color, _: f32) {
            self.calls.push("segment");
        }
        fn stroke_path(&mut self, _: &[Vec2], _: bool, _: Color, _: f32) {
            self.calls.push("path");
        }
        fn fill_circle(&mut self, _: Vec2, _: f32, _: Color) {
            self.calls.push("circle");
        }
    }

    #[test]
    fn replays_in_insertion_order() {
        let mut list = DrawList::new();
        list.push_segment(
            Layer::Face,
            SegmentCmd::new(Vec2::zero(), Vec2::new(1.0, 0.0), Color::WHITE, 1.0),
        );
        list.push_path(
            Layer::Web,
            PathCmd::closed(vec![Vec2::zero(), Vec2::new(1.0, 1.0)], Color::WHITE, 1.0),
        );
        list.push_filled_circle(Layer::Overlay, Vec2::zero(), 5.0, Color::WHITE);

        let mut surface = CountingSurface::default();
        replay(&list, &mut surface);
        assert_eq!(surface.calls, ["segment", "path", "circle"]);
    }

    #[test]
    fn drops_degenerate_circle_and_path() {
        let mut list = DrawList::new();
        list.push_filled_circle(Layer::Overlay, Vec2::zero(), 0.0, Color::WHITE);
        list.push_filled_circle(Layer::Overlay, Vec2::zero(), -2.0, Color::WHITE);
        list.push_path(
            Layer::Web,
            PathCmd::closed(vec![Vec2::zero()], Color::WHITE, 1.0),
        );

        let mut surface = CountingSurface::default();
        replay(&list, &mut surface);
        assert!(surface.calls.is_empty());
    }
}
