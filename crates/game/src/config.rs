//! Demo configuration. Loaded from radar_demo.ron at startup.

use radar::RadarConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the simulated host. Loaded from `radar_demo.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Simulated frames per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    /// Fixed seed for enemies and radar effects. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Radar panel edge in pixels.
    #[serde(default = "default_panel_size")]
    pub panel_size: i32,
    /// Enemies wandering around the player.
    #[serde(default = "default_enemy_count")]
    pub enemy_count: usize,
    /// Seconds a sighting stays on the radar.
    #[serde(default = "default_contact_ttl")]
    pub contact_ttl: f32,
    /// Seconds between sensor sweeps.
    #[serde(default = "default_ping_interval")]
    pub ping_interval: f32,
    /// Player turn rate in degrees per second.
    #[serde(default = "default_turn_rate")]
    pub turn_rate: f32,
    /// Player walking speed in units per second, along the facing.
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    /// Print the console radar every N frames (0 = never).
    #[serde(default = "default_print_every")]
    pub print_every: u32,
    #[serde(default)]
    pub radar: RadarConfig,
}

fn default_frames() -> u32 {
    600
}
fn default_frame_rate() -> f32 {
    60.0
}
fn default_panel_size() -> i32 {
    256
}
fn default_enemy_count() -> usize {
    12
}
fn default_contact_ttl() -> f32 {
    2.5
}
fn default_ping_interval() -> f32 {
    0.5
}
fn default_turn_rate() -> f32 {
    20.0
}
fn default_walk_speed() -> f32 {
    60.0
}
fn default_print_every() -> u32 {
    60
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            frame_rate: default_frame_rate(),
            seed: None,
            panel_size: default_panel_size(),
            enemy_count: default_enemy_count(),
            contact_ttl: default_contact_ttl(),
            ping_interval: default_ping_interval(),
            turn_rate: default_turn_rate(),
            walk_speed: default_walk_speed(),
            print_every: default_print_every(),
            radar: RadarConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load config from `radar_demo.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str::<DemoConfig>(&data) {
                Ok(c) if radar::validate_range(c.radar.range).is_ok() => return c,
                Ok(c) => log::warn!("Invalid radar range {} in {:?}, using defaults", c.radar.range, path),
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Seconds per simulated frame.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate.max(1.0)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("radar_demo.ron")
}
