//! Radar HUD panel: tracks short-lived contacts and draws them as blips
//! relative to the local viewer, with a CRT ghosting effect.
//!
//! The host engine owns the actual drawing; it is reached through
//! [`RadarSurface`]. Everything here runs inside the host's per-frame
//! paint callback.

pub mod config;
pub mod contact;
pub mod draw;
pub mod ghost;
pub mod panel;
pub mod projector;
pub mod registry;
pub mod shared;
pub mod surface;

pub use config::*;
pub use contact::*;
pub use ghost::*;
pub use panel::*;
pub use projector::*;
pub use registry::*;
pub use shared::*;
pub use surface::*;
