//! Fixed-capacity set of live radar contacts.
//!
//! Order is not meaningful: removal swaps the last live entry into the hole,
//! so draw order shifts as contacts expire.

use glam::Vec3;

use crate::contact::{Contact, ContactKind};

/// Most contacts the radar tracks at once.
pub const MAX_CONTACTS: usize = 24;

/// Result of reporting a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// A new contact was stored.
    Added,
    /// A contact already at that position had its expiry extended.
    Refreshed,
    /// The registry was full; nothing was stored.
    Dropped,
}

/// Live contacts, at most [`MAX_CONTACTS`].
#[derive(Debug, Clone)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl Default for ContactRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRegistry {
    pub fn new() -> Self {
        Self {
            contacts: Vec::with_capacity(MAX_CONTACTS),
        }
    }

    /// Insert a contact or refresh the one already at `position`.
    ///
    /// Matching is exact position equality. A refresh only moves the expiry
    /// to `now + ttl`; the stored kind is kept.
    pub fn report(&mut self, position: Vec3, kind: ContactKind, ttl: f32, now: f32) -> ReportOutcome {
        let expire_at = now + ttl;

        if let Some(index) = self.find(position) {
            self.contacts[index].expire_at = expire_at;
            return ReportOutcome::Refreshed;
        }

        if self.is_full() {
            log::debug!("Radar full, dropping {:?} contact at {:?}", kind, position);
            return ReportOutcome::Dropped;
        }

        self.contacts.push(Contact::new(position, kind, expire_at));
        ReportOutcome::Added
    }

    /// Index of the contact at exactly `position`.
    pub fn find(&self, position: Vec3) -> Option<usize> {
        self.contacts.iter().position(|c| c.position == position)
    }

    /// Remove every contact whose expiry is at or before `now`.
    ///
    /// The slot of a removed contact is refilled from the end and checked
    /// again, so a pass never skips the entry it just moved.
    pub fn sweep_expired(&mut self, now: f32) -> usize {
        let mut removed = 0;
        let mut i = 0;
        while i < self.contacts.len() {
            if self.contacts[i].is_expired(now) {
                self.contacts.swap_remove(i);
                removed += 1;
            } else {
                i += 1;
            }
        }
        if removed > 0 {
            log::debug!("Radar swept {} expired contact(s), {} live", removed, self.contacts.len());
        }
        removed
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contacts.len() >= MAX_CONTACTS
    }

    pub fn capacity(&self) -> usize {
        MAX_CONTACTS
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }
}
