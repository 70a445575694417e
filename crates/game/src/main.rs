//! Radar demo: drives the radar panel from a simulated host.
//!
//! A player walks a slow circle around the origin while enemies wander
//! around; a motion sensor reports them to the radar and each frame is
//! painted into a recorded draw list, printed to the console periodically.

mod config;
mod hud;
mod sensors;

use anyhow::{bail, Result};
use engine_core::{FrameClock, Viewer};
use radar::{DrawList, RadarPanel, RadarSurface};

use config::DemoConfig;
use hud::ConsoleRadar;
use sensors::{MotionSensor, SweepStats};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::load();
    if config.panel_size <= 0 {
        bail!("panel_size must be positive, got {}", config.panel_size);
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "Radar demo: {} frames at {:.0} fps, {} enemies, seed {}",
        config.frames,
        config.frame_rate,
        config.enemy_count,
        seed
    );

    let mut clock = FrameClock::simulated();
    let mut viewer = Viewer::default();
    let mut radar = RadarPanel::with_seed(config.radar.clone(), seed);
    radar.init(clock.curtime());

    let mut sensor = MotionSensor::new(
        config.enemy_count,
        radar.range() * 0.8,
        config.ping_interval,
        config.contact_ttl,
        seed.wrapping_add(1),
    );

    let mut surface = DrawList::new(config.panel_size, config.panel_size);
    let console = ConsoleRadar::new(41, 21);
    let dt = config.frame_time();
    let mut totals = SweepStats::default();

    for _ in 0..config.frames {
        clock.advance(dt);
        let now = clock.curtime();

        viewer.turn(config.turn_rate * dt);
        viewer.translate((viewer.forward() * config.walk_speed * dt).extend(0.0));
        sensor.update(dt);
        if let Some(stats) = sensor.sweep(&mut radar, &viewer, now) {
            totals.added += stats.added;
            totals.refreshed += stats.refreshed;
            totals.dropped += stats.dropped;
        }

        surface.clear();
        radar.paint(&mut surface, &viewer, now);

        if config.print_every > 0 && clock.frame_count() % u64::from(config.print_every) == 0 {
            let status = format!(
                "t={:6.2}s  yaw={:5.1}  contacts={:2}/{}  ghost={:2}",
                now,
                viewer.yaw,
                radar.contacts().len(),
                radar.contacts().capacity(),
                radar.ghost().alpha(),
            );
            print!("{}", console.render(&surface, &radar.config().background_texture, &status));
        }
    }

    let (wide, _) = surface.panel_size();
    log::info!(
        "Done: {} added, {} refreshed, {} dropped ({}px panel)",
        totals.added,
        totals.refreshed,
        totals.dropped,
        wide
    );
    Ok(())
}
