//! Per-frame orchestration.

use cobweb_engine::coords::Viewport;
use cobweb_engine::render::{DrawSurface, replay};
use cobweb_engine::scene::{DrawList, Layer};
use cobweb_engine::time::{self, TimeComponents, TimeError};

use crate::geometry::ClockGeometry;
use crate::layout::{face, hands, web};
use crate::style::ClockConfig;

/// Screen-space radius of the center dot, independent of dial size.
const CENTER_DOT_RADIUS: f32 = 5.0;

/// Top-level coordinator that owns the cross-frame state.
///
/// That state is deliberately small: the configuration, the per-resize
/// dial geometry, and one [`DrawList`] reused across frames so recording
/// stops allocating once warmed. Everything painted is recomputed from the
/// sampled instant each frame — there is no easing and no retained shape
/// state.
///
/// Hosts call [`resize`](Self::resize) on surface changes and
/// [`render_frame`](Self::render_frame) once per tick, at whatever cadence
/// they schedule.
pub struct ClockScene {
    config: ClockConfig,
    geometry: ClockGeometry,
    list: DrawList,
}

impl ClockScene {
    pub fn new(config: ClockConfig, viewport: Viewport) -> Self {
        Self {
            config,
            geometry: ClockGeometry::from_viewport(viewport),
            list: DrawList::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Mutable access for hosts that tweak colors or the zone between
    /// frames; values are re-read on the next frame.
    #[inline]
    pub fn config_mut(&mut self) -> &mut ClockConfig {
        &mut self.config
    }

    #[inline]
    pub fn geometry(&self) -> ClockGeometry {
        self.geometry
    }

    /// Recomputes dial geometry for new surface dimensions.
    ///
    /// The new radius applies to every layout from the next frame on; a
    /// frame in progress is never mixed.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            // Collapsed or minimized surfaces are not an error; the
            // geometry degenerates to the center until the next resize.
            log::warn!("resize to degenerate viewport {viewport:?}");
        }
        self.geometry = ClockGeometry::from_viewport(viewport);
        log::debug!(
            "dial resized: center=({:.1}, {:.1}) radius={:.1}",
            self.geometry.center.x,
            self.geometry.center.y,
            self.geometry.radius,
        );
    }

    /// Renders one frame from the current wall clock.
    ///
    /// Time is sampled exactly once and shared by the cobweb and the
    /// hands, so they always agree about "now" within a frame. An
    /// unrecognized zone id surfaces as an error — it is never silently
    /// replaced by system-local time.
    pub fn render_frame(&mut self, surface: &mut impl DrawSurface) -> Result<(), TimeError> {
        let now = time::sample(&self.config.zone_id)?;
        self.render_frame_at(&now, surface);
        Ok(())
    }

    /// Renders one frame from an already-sampled instant.
    ///
    /// Deterministic counterpart of [`render_frame`](Self::render_frame);
    /// used by tests and by hosts that sample or replay time themselves.
    pub fn render_frame_at(&mut self, t: &TimeComponents, surface: &mut impl DrawSurface) {
        self.record(t);
        surface.clear();
        replay(&self.list, surface);
    }

    /// Last recorded frame, for diagnostics and tests.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Records the frame back-to-front: face markers, cobweb wires, the
    /// cobweb perimeter, the hands, and the center dot on top.
    fn record(&mut self, t: &TimeComponents) {
        let style = &self.config.style;
        let geom = self.geometry;

        self.list.clear();

        for marker in face::hour_markers(geom, style.hour_markers)
            .chain(face::minute_markers(geom, style.minute_markers))
        {
            self.list.push_segment(Layer::Face, marker);
        }

        let cobweb = web::cobweb(t, geom, style.web, style.web_width);
        for wire in cobweb.wires {
            self.list.push_segment(Layer::Web, wire);
        }
        self.list.push_path(Layer::Web, cobweb.perimeter);

        for hand in hands::hands(t, geom, style) {
            self.list.push_segment(Layer::Hands, hand);
        }

        self.list
            .push_filled_circle(Layer::Overlay, geom.center, CENTER_DOT_RADIUS, style.center_dot);
    }
}
