use cobweb_engine::coords::{Vec2, Viewport};

/// Scale from half the short viewport side to the dial radius.
const RADIUS_FRACTION: f32 = 0.65;

/// Per-resize dial geometry shared by every layout within a frame.
///
/// Invariant: one value is derived per resize and used by all layouts of a
/// frame — a frame never mixes geometry computed from two different radii.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl ClockGeometry {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Derives the dial from surface dimensions: centered, radius 0.65 of
    /// half the short side.
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            center: Vec2::new(viewport.width * 0.5, viewport.height * 0.5),
            radius: viewport.min_side() * 0.5 * RADIUS_FRACTION,
        }
    }

    /// Projects a polar coordinate on the dial into surface space.
    ///
    /// `dist` is an absolute distance from the center. Nothing is
    /// rejected: non-positive (and NaN) distances collapse to the center,
    /// so a degenerate radius yields a degenerate but harmless frame.
    #[inline]
    pub fn point_at(&self, angle: f64, dist: f32) -> Vec2 {
        let dist = dist.max(0.0);
        let (sin, cos) = angle.sin_cos();
        Vec2::new(
            self.center.x + (cos * dist as f64) as f32,
            self.center.y + (sin * dist as f64) as f32,
        )
    }
}
