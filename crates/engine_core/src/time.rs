//! Frame clock for the HUD render loop.

use std::time::{Duration, Instant};

/// Source of the current frame time.
///
/// Timestamps are absolute seconds since the clock started and never go
/// backwards between frames.
#[derive(Debug)]
pub struct FrameClock {
    /// Wall-clock reference, `None` for a simulated clock.
    start_time: Option<Instant>,
    /// Current frame time.
    curtime: Duration,
    /// Duration of the last frame.
    delta: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock that follows wall-clock time.
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            curtime: Duration::ZERO,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Create a clock that only moves when [`FrameClock::advance`] is called.
    pub fn simulated() -> Self {
        Self {
            start_time: None,
            curtime: Duration::ZERO,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update timing at the start of a new frame.
    ///
    /// A simulated clock keeps its time and only counts the frame.
    pub fn tick(&mut self) {
        if let Some(start) = self.start_time {
            let now = start.elapsed();
            // Instant is monotonic, but keep the guarantee explicit.
            self.delta = now.saturating_sub(self.curtime);
            self.curtime = self.curtime.max(now);
        }
        self.frame_count += 1;
    }

    /// Step a simulated clock forward by `seconds` and start a new frame.
    pub fn advance(&mut self, seconds: f32) {
        let step = Duration::from_secs_f32(seconds.max(0.0));
        self.delta = step;
        self.curtime += step;
        self.frame_count += 1;
    }

    /// Current frame time in seconds.
    pub fn curtime(&self) -> f32 {
        self.curtime.as_secs_f32()
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Whether this clock ignores wall-clock time.
    pub fn is_simulated(&self) -> bool {
        self.start_time.is_none()
    }
}
