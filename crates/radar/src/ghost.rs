//! CRT ghosting: a faint after-image that periodically swells and fades.
//!
//! The effect runs on its own timer, independent of contacts. Each frame
//! either ramps the alpha up, ramps it down, or waits for the next ramp.

use rand::Rng;

/// Peak alpha of the ghost copies.
pub const MAX_GHOST_ALPHA: u8 = 25;

/// Delay before the first ramp after a reset.
const FIRST_GHOST_DELAY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostPhase {
    /// Waiting for the next ramp to start.
    Idle,
    RampUp,
    RampDown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GhostFade {
    alpha: u8,
    /// Ramp up once the frame time passes this. Infinite while not pending.
    start_at: f32,
    /// Ramp down once the frame time passes this. Infinite while not pending.
    stop_at: f32,
}

impl GhostFade {
    pub fn new(now: f32) -> Self {
        Self {
            alpha: 0,
            start_at: now + FIRST_GHOST_DELAY,
            stop_at: f32::INFINITY,
        }
    }

    pub fn reset(&mut self, now: f32) {
        *self = Self::new(now);
    }

    /// Current ghost intensity, in `0..=MAX_GHOST_ALPHA`.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn start_at(&self) -> f32 {
        self.start_at
    }

    pub fn stop_at(&self) -> f32 {
        self.stop_at
    }

    pub fn phase(&self, now: f32) -> GhostPhase {
        if now > self.start_at {
            GhostPhase::RampUp
        } else if now > self.stop_at {
            GhostPhase::RampDown
        } else {
            GhostPhase::Idle
        }
    }

    /// Advance one frame.
    pub fn update<R: Rng>(&mut self, now: f32, rng: &mut R) {
        match self.phase(now) {
            GhostPhase::RampUp => {
                if self.alpha < MAX_GHOST_ALPHA {
                    self.alpha += 1;
                } else {
                    // How long to hold the ghost before fading it out.
                    self.start_at = f32::INFINITY;
                    self.stop_at = now + rng.gen_range(1.0..2.0);
                }
            }
            GhostPhase::RampDown => {
                if self.alpha > 0 {
                    self.alpha -= 1;
                } else {
                    // Gap until the next ghost.
                    self.stop_at = f32::INFINITY;
                    self.start_at = now + rng.gen_range(2.0..3.0);
                }
            }
            GhostPhase::Idle => {}
        }
    }
}
