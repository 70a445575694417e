//! Radar settings. Loaded from a RON file; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::draw::CONTACT_FADE_TIME;

/// Default radar range in world units.
pub const DEFAULT_RADAR_RANGE: f32 = 3000.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read radar config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid radar config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("radar range must be a positive number, got {0}")]
    InvalidRange(f32),
}

/// How contacts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    /// Per-kind icons with ghost copies.
    #[default]
    Icons,
    /// Plain colored dots.
    Dots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    /// World distance covered by the radar rim.
    #[serde(default = "default_range")]
    pub range: f32,
    #[serde(default)]
    pub draw_mode: DrawMode,
    /// CRT ghost copies of contact icons.
    #[serde(default = "default_true")]
    pub ghosting: bool,
    /// Draw T/inverted-T dots for targets above/below the viewer (dot mode only).
    #[serde(default)]
    pub vertical_indicators: bool,
    #[serde(default = "default_background_texture")]
    pub background_texture: String,
    /// Seconds before expiry over which a contact fades out.
    #[serde(default = "default_fade_time")]
    pub contact_fade_time: f32,
}

fn default_range() -> f32 {
    DEFAULT_RADAR_RANGE
}
fn default_true() -> bool {
    true
}
fn default_background_texture() -> String {
    "hud/radar_background".to_string()
}
fn default_fade_time() -> f32 {
    CONTACT_FADE_TIME
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            range: default_range(),
            draw_mode: DrawMode::default(),
            ghosting: default_true(),
            vertical_indicators: false,
            background_texture: default_background_texture(),
            contact_fade_time: default_fade_time(),
        }
    }
}

/// Reject ranges the projector cannot divide by.
pub fn validate_range(range: f32) -> Result<f32, ConfigError> {
    if range.is_finite() && range > 0.0 {
        Ok(range)
    } else {
        Err(ConfigError::InvalidRange(range))
    }
}

impl RadarConfig {
    pub fn from_ron_str(data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(data)?;
        validate_range(config.range)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron_str(&data)
    }

    /// Load from `path`; a missing or invalid file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(c) => c,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Invalid radar config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}
