use std::fmt::Write as _;

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::render::DrawSurface;

/// Text backend that records a frame as an SVG document.
///
/// Used by the demo binary and by snapshot-style tests; real hosts plug in
/// their own [`DrawSurface`] (canvas, GPU, plotter). Writing happens into
/// an in-memory string, so the surface itself stays infallible — file I/O
/// is the caller's problem.
#[derive(Debug)]
pub struct SvgSurface {
    viewport: Viewport,
    background: Option<Color>,
    body: String,
}

impl SvgSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, background: None, body: String::new() }
    }

    /// Fills the surface with `color` on every `clear`.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Finalizes the document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.viewport.width,
            h = self.viewport.height,
            body = self.body,
        )
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
        if let Some(bg) = self.background {
            let _ = writeln!(
                self.body,
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
                bg.to_css(),
            );
        }
    }

    fn stroke_segment(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
             stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            start.x,
            start.y,
            end.x,
            end.y,
            color.to_css(),
            width,
        );
    }

    fn stroke_path(&mut self, points: &[Vec2], closed: bool, color: Color, width: f32) {
        let tag = if closed { "polygon" } else { "polyline" };

        let mut attr = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                attr.push(' ');
            }
            let _ = write!(attr, "{:.2},{:.2}", p.x, p.y);
        }

        let _ = writeln!(
            self.body,
            "  <{tag} points=\"{attr}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            color.to_css(),
            width,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
            center.x,
            center.y,
            radius,
            color.to_css(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SvgSurface {
        SvgSurface::new(Viewport::new(100.0, 80.0))
    }

    #[test]
    fn document_carries_viewport_dimensions() {
        let svg = surface().finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("viewBox=\"0 0 100 80\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn segment_becomes_a_line_element() {
        let mut s = surface();
        s.stroke_segment(Vec2::zero(), Vec2::new(10.0, 20.0), Color::WHITE, 2.0);
        let svg = s.finish();
        assert!(svg.contains("<line x1=\"0.00\" y1=\"0.00\" x2=\"10.00\" y2=\"20.00\""));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn closed_path_becomes_a_polygon() {
        let mut s = surface();
        s.stroke_path(
            &[Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
            true,
            Color::BLACK,
            0.2,
        );
        let svg = s.finish();
        assert!(svg.contains("<polygon points=\"0.00,0.00 1.00,0.00 1.00,1.00\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn clear_drops_previous_frame_and_repaints_background() {
        let mut s = surface().with_background(Color::BLACK);
        s.stroke_segment(Vec2::zero(), Vec2::new(1.0, 1.0), Color::WHITE, 1.0);
        s.clear();
        let svg = s.finish();
        assert!(!svg.contains("<line"));
        assert!(svg.contains("<rect width=\"100%\""));
    }
}
