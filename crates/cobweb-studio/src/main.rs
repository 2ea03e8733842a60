//! Cobweb studio — renders the cobweb clock to an SVG snapshot.
//!
//! A stand-in for a real host: it owns the "render loop" (a short burst of
//! frames), supplies the drawing surface, and writes the last frame to
//! disk. Real embeddings drive `ClockScene` from their own scheduler with
//! their own `DrawSurface`.

use std::time::Duration;

use anyhow::{Context, Result};

use cobweb_clock::style::{ClockConfig, DEFAULT_ZONE, WELL_KNOWN_ZONES};
use cobweb_clock::ClockScene;
use cobweb_engine::coords::Viewport;
use cobweb_engine::paint::Color;
use cobweb_engine::render::SvgSurface;
use cobweb_engine::time;

/// Frame cadence of the burst, roughly 30 fps.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

struct Options {
    zone: String,
    size: f32,
    frames: u32,
    out: String,
    background: Color,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut opts = Self {
            zone: DEFAULT_ZONE.to_owned(),
            size: 400.0,
            frames: 1,
            out: "cobweb.svg".to_owned(),
            background: Color::from_srgb_u8(0x14, 0x16, 0x1a),
        };

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .with_context(|| format!("{name} expects a value"))
            };
            match arg.as_str() {
                "--zone" => opts.zone = value("--zone")?,
                "--size" => {
                    opts.size = value("--size")?
                        .parse()
                        .context("--size expects a number of pixels")?;
                }
                "--frames" => {
                    opts.frames = value("--frames")?
                        .parse()
                        .context("--frames expects a count")?;
                }
                "--out" => opts.out = value("--out")?,
                "--bg" => {
                    let hex = value("--bg")?;
                    opts.background = Color::from_hex(&hex)
                        .with_context(|| format!("`{hex}` is not a #rrggbb[aa] color"))?;
                }
                "--list-zones" => {
                    for id in WELL_KNOWN_ZONES {
                        println!("{id}");
                    }
                    std::process::exit(0);
                }
                other => anyhow::bail!(
                    "unknown option `{other}` (try --zone, --size, --frames, --out, --bg, --list-zones)"
                ),
            }
        }

        Ok(opts)
    }
}

fn main() -> Result<()> {
    cobweb_engine::logging::init();

    let opts = Options::parse(std::env::args().skip(1))?;

    // Validate the zone up front; fall back instead of dying mid-loop.
    let zone = match time::resolve_zone(&opts.zone) {
        Ok(_) => opts.zone.clone(),
        Err(err) => {
            log::warn!("{err}; falling back to {DEFAULT_ZONE}");
            DEFAULT_ZONE.to_owned()
        }
    };

    let viewport = Viewport::new(opts.size, opts.size);
    let mut scene = ClockScene::new(ClockConfig::with_zone(zone.as_str()), viewport);

    log::info!(
        "rendering {} frame(s) at {}x{} in {zone}",
        opts.frames,
        opts.size,
        opts.size,
    );

    let mut last_frame = String::new();
    for frame in 0..opts.frames.max(1) {
        let mut surface = SvgSurface::new(viewport).with_background(opts.background);
        scene
            .render_frame(&mut surface)
            .context("frame rendering failed")?;
        last_frame = surface.finish();

        log::debug!("frame {frame} recorded ({} draw items)", scene.draw_list().len());
        if frame + 1 < opts.frames {
            std::thread::sleep(FRAME_INTERVAL);
        }
    }

    std::fs::write(&opts.out, &last_frame)
        .with_context(|| format!("writing {}", opts.out))?;

    println!("wrote {} ({} bytes, zone {zone})", opts.out, last_frame.len());
    Ok(())
}
