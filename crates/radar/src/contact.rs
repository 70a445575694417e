//! Radar contacts and the per-kind style table.

use glam::Vec3;

use crate::surface::Rgba;

/// What a contact represents. Selects icon, color and draw policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// 'Regular' sized enemy (humanoid).
    Enemy,
    /// A tag this build has no style for. Kept so reports from newer game
    /// code still land in the registry; the icon path skips these.
    Unknown(u8),
}

impl ContactKind {
    /// Wire tag used by game logic that reports contacts by number.
    pub fn tag(self) -> u8 {
        match self {
            ContactKind::Enemy => 0,
            ContactKind::Unknown(tag) => tag,
        }
    }

    /// Style for this kind, or `None` when it has no icon.
    pub fn style(self) -> Option<&'static ContactStyle> {
        match self {
            ContactKind::Enemy => Some(&ENEMY_STYLE),
            ContactKind::Unknown(_) => None,
        }
    }

    /// Slot of this kind in per-kind tables, `None` for unstyled kinds.
    pub fn style_index(self) -> Option<usize> {
        match self {
            ContactKind::Enemy => Some(0),
            ContactKind::Unknown(_) => None,
        }
    }

    /// Every kind with a style, ordered by [`ContactKind::style_index`].
    pub fn styled() -> &'static [ContactKind; STYLED_KIND_COUNT] {
        &[ContactKind::Enemy]
    }
}

impl From<u8> for ContactKind {
    fn from(tag: u8) -> Self {
        match tag {
            0 => ContactKind::Enemy,
            other => ContactKind::Unknown(other),
        }
    }
}

/// Number of kinds with a style.
pub const STYLED_KIND_COUNT: usize = 1;

/// How a kind of contact looks on the radar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactStyle {
    /// Texture path handed to the host on first paint.
    pub icon: &'static str,
    /// Icon tint; alpha is replaced per frame.
    pub icon_color: Rgba,
    /// Color of the dot when drawn without icons.
    pub dot_color: Rgba,
    /// Full-size icon edge in panel pixels.
    pub icon_size: i32,
    /// Dot edge in panel pixels.
    pub dot_size: i32,
}

static ENEMY_STYLE: ContactStyle = ContactStyle {
    icon: "hud/radar_icon_enemy",
    icon_color: [255, 255, 255, 255],
    dot_color: [255, 40, 20, 255],
    icon_size: 24,
    dot_size: 4,
};

/// Color used by the dot path for kinds without a style.
pub const GENERIC_DOT_COLOR: Rgba = [255, 255, 255, 255];
/// Dot size used for kinds without a style.
pub const GENERIC_DOT_SIZE: i32 = 3;

/// One tracked position on the radar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub position: Vec3,
    pub kind: ContactKind,
    /// Frame time (seconds) at which the contact is removed.
    pub expire_at: f32,
}

impl Contact {
    pub fn new(position: Vec3, kind: ContactKind, expire_at: f32) -> Self {
        Self {
            position,
            kind,
            expire_at,
        }
    }

    /// Seconds left before the contact expires (negative once expired).
    pub fn time_left(&self, now: f32) -> f32 {
        self.expire_at - now
    }

    pub fn is_expired(&self, now: f32) -> bool {
        self.expire_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_kinds() {
        assert_eq!(ContactKind::from(0), ContactKind::Enemy);
        assert_eq!(ContactKind::from(7), ContactKind::Unknown(7));
        assert_eq!(ContactKind::Unknown(7).tag(), 7);
    }

    #[test]
    fn only_known_kinds_have_styles() {
        assert!(ContactKind::Enemy.style().is_some());
        assert!(ContactKind::Unknown(3).style().is_none());
        for (i, kind) in ContactKind::styled().iter().enumerate() {
            assert!(kind.style().is_some());
            assert_eq!(kind.style_index(), Some(i));
        }
        assert_eq!(ContactKind::Unknown(3).style_index(), None);
    }

    #[test]
    fn contact_expires_at_deadline() {
        let c = Contact::new(Vec3::ZERO, ContactKind::Enemy, 5.0);
        assert!(!c.is_expired(4.99));
        assert!(c.is_expired(5.0));
        assert!((c.time_left(4.0) - 1.0).abs() < 1e-6);
    }
}
