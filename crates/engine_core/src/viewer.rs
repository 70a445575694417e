//! The local viewer the radar is centred on.

use glam::{Vec2, Vec3};

/// World position and facing of the local player.
///
/// World space is z-up: the radar plane is XY and `yaw` is measured in
/// degrees counter-clockwise from +X, so yaw 90 faces +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewer {
    pub origin: Vec3,
    /// Facing angle in degrees.
    pub yaw: f32,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl Viewer {
    /// Create a viewer at `origin` facing `yaw` degrees.
    pub fn new(origin: Vec3, yaw: f32) -> Self {
        Self { origin, yaw }
    }

    /// Planar forward direction.
    pub fn forward(&self) -> Vec2 {
        let rad = self.yaw.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }

    /// Turn by `degrees`, keeping yaw in [0, 360).
    pub fn turn(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }

    /// Move by a world-space delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.origin += delta;
    }
}
