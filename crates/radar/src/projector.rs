//! World-to-radar projection.
//!
//! The radar is a polar display centred on the viewer with forward pointing
//! up. A target is first reduced to its true planar distance, placed straight
//! "south" of the centre, and then rotated by the difference between the
//! viewer's yaw and the target's bearing.

use engine_core::Viewer;
use glam::Vec3;

/// Replacement for exactly-zero planar offsets.
const OFFSET_EPSILON: f32 = 0.00001;

/// Keeps blips inside the decorative outer ring instead of on the panel edge.
pub const PANEL_FIT_DIVISOR: f32 = 2.15;

/// Whether the vertical offset between viewer and target is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZMode {
    /// Treat the target as level with the viewer; `z_delta` is always 0.
    #[default]
    Ignore,
    /// Report `target.z - viewer.z` as `z_delta`.
    Relative,
}

/// Where a world position lands on the radar panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    /// Panel-local pixel x.
    pub x: f32,
    /// Panel-local pixel y (down is positive; forward is up).
    pub y: f32,
    /// Height of the target above the viewer, 0 under [`ZMode::Ignore`].
    pub z_delta: f32,
    /// Distance as a fraction of the radar range, 1.0 when clamped.
    pub scale: f32,
    /// False when the target lies beyond range and was pinned to the rim.
    pub in_range: bool,
}

/// Bearing of a planar offset in degrees, in [0, 360).
///
/// `dx` must be non-zero.
fn bearing_degrees(dx: f32, dy: f32) -> f32 {
    let base = (dy / dx).atan().to_degrees();
    if dx < 0.0 {
        // Second and third quadrants: atan folded them onto the first/fourth.
        base + 180.0
    } else if dy < 0.0 {
        base + 360.0
    } else {
        base
    }
}

/// Project `target` onto a square radar panel `panel_radius` pixels wide.
pub fn world_to_radar(
    target: Vec3,
    viewer: &Viewer,
    max_range: f32,
    panel_radius: f32,
    z_mode: ZMode,
) -> RadarPoint {
    let mut dx = target.x - viewer.origin.x;
    let mut dy = target.y - viewer.origin.y;
    if dx == 0.0 {
        dx = OFFSET_EPSILON;
    }
    if dy == 0.0 {
        dy = OFFSET_EPSILON;
    }

    let bearing = bearing_degrees(dx, dy);

    // Put the target dead south at its true distance; the rotation below
    // supplies all directional information.
    let dist = (dx * dx + dy * dy).sqrt();
    let (flat_x, flat_y) = (0.0_f32, -dist);

    let theta = (viewer.yaw - bearing).to_radians();
    let (sin, cos) = theta.sin_cos();
    let mut x = flat_x * cos - flat_y * sin;
    let mut y = flat_x * sin + flat_y * cos;

    let (scale, in_range) = if dist > max_range {
        let shrink = max_range / dist;
        x *= shrink;
        y *= shrink;
        (1.0, false)
    } else {
        (dist / max_range, true)
    };

    let fit = panel_radius / PANEL_FIT_DIVISOR / max_range;
    let half = panel_radius / 2.0;

    let z_delta = match z_mode {
        ZMode::Ignore => 0.0,
        ZMode::Relative => target.z - viewer.origin.z,
    };

    RadarPoint {
        x: half + x * fit,
        y: half + y * fit,
        z_delta,
        scale,
        in_range,
    }
}
