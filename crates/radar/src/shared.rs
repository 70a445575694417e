//! Thread-safe handle to a radar panel.
//!
//! Reporting, refreshing, sweeping and painting all touch the same live set,
//! so they go through one lock.

use std::sync::Arc;

use engine_core::Viewer;
use glam::Vec3;
use parking_lot::{Mutex, MutexGuard};

use crate::contact::ContactKind;
use crate::panel::RadarPanel;
use crate::registry::ReportOutcome;
use crate::surface::RadarSurface;

/// Cloneable handle handed to game systems for one level session.
#[derive(Clone)]
pub struct SharedRadar {
    inner: Arc<Mutex<RadarPanel>>,
}

impl SharedRadar {
    pub fn new(panel: RadarPanel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(panel)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, RadarPanel> {
        self.inner.lock()
    }

    pub fn report_contact(&self, position: Vec3, kind: ContactKind, ttl: f32, now: f32) -> ReportOutcome {
        self.lock().report_contact(position, kind, ttl, now)
    }

    pub fn clear_all_contacts(&self) {
        self.lock().clear_all_contacts();
    }

    pub fn paint<S: RadarSurface + ?Sized>(&self, surface: &mut S, viewer: &Viewer, now: f32) {
        self.lock().paint(surface, viewer, now);
    }
}
