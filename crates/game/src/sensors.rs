//! Simulated enemies and the motion sensor that reports them to the radar.
//!
//! Sightings are snapped to a coarse grid, so an enemy loitering in one
//! cell refreshes its existing contact instead of adding a new one.

use engine_core::{Vec3, Viewer};
use radar::{ContactKind, RadarPanel, ReportOutcome};
use rand::prelude::*;

/// Grid cell size for reported positions, in world units.
const SIGHTING_GRID: f32 = 64.0;

pub struct Enemy {
    pub position: Vec3,
    /// Planar heading in radians.
    heading: f32,
    speed: f32,
}

/// Counts of what the radar did with the last sweep's reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    pub added: u32,
    pub refreshed: u32,
    pub dropped: u32,
}

pub struct MotionSensor {
    pub enemies: Vec<Enemy>,
    /// Sightings beyond this distance are not reported.
    pub detection_range: f32,
    ping_interval: f32,
    next_ping: f32,
    contact_ttl: f32,
    rng: StdRng,
}

impl MotionSensor {
    pub fn new(enemy_count: usize, spawn_radius: f32, ping_interval: f32, contact_ttl: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let enemies = (0..enemy_count)
            .map(|_| {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let dist = rng.gen_range(0.2..1.3) * spawn_radius;
                Enemy {
                    position: Vec3::new(angle.cos() * dist, angle.sin() * dist, rng.gen_range(-200.0..200.0)),
                    heading: rng.gen::<f32>() * std::f32::consts::TAU,
                    // Some enemies hold still and keep refreshing one contact.
                    speed: if rng.gen_bool(0.3) { 0.0 } else { rng.gen_range(40.0..160.0) },
                }
            })
            .collect();

        Self {
            enemies,
            detection_range: spawn_radius * 1.5,
            ping_interval,
            next_ping: 0.0,
            contact_ttl,
            rng,
        }
    }

    /// Move enemies by one frame.
    pub fn update(&mut self, dt: f32) {
        for enemy in &mut self.enemies {
            if self.rng.gen_bool(0.02) {
                enemy.heading += self.rng.gen_range(-1.0..1.0);
            }
            enemy.position.x += enemy.heading.cos() * enemy.speed * dt;
            enemy.position.y += enemy.heading.sin() * enemy.speed * dt;
        }
    }

    /// Report every enemy within detection range, once per ping interval.
    pub fn sweep(&mut self, radar: &mut RadarPanel, viewer: &Viewer, now: f32) -> Option<SweepStats> {
        if now < self.next_ping {
            return None;
        }
        self.next_ping = now + self.ping_interval;

        let mut stats = SweepStats::default();
        for enemy in &self.enemies {
            if enemy.position.truncate().distance(viewer.origin.truncate()) > self.detection_range {
                continue;
            }
            match radar.report_contact(snap(enemy.position), ContactKind::Enemy, self.contact_ttl, now) {
                ReportOutcome::Added => stats.added += 1,
                ReportOutcome::Refreshed => stats.refreshed += 1,
                ReportOutcome::Dropped => stats.dropped += 1,
            }
        }
        Some(stats)
    }
}

fn snap(position: Vec3) -> Vec3 {
    (position / SIGHTING_GRID).round() * SIGHTING_GRID
}
