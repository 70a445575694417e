//! Core engine types shared by the HUD crates.
//!
//! This crate provides the small slice of host state the radar needs:
//! - A frame clock reporting monotonically increasing seconds
//! - The local viewer (world origin and facing)

pub mod time;
pub mod viewer;

pub use time::*;
pub use viewer::*;

// Re-export commonly used types
pub use glam::{Vec2, Vec3};
