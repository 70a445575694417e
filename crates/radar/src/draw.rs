//! Per-contact draw parameters: alpha, icon size, ghost copies and dots.

use rand::Rng;

use crate::surface::Rect;

/// Alpha of a contact outside its fade window, before flicker.
pub const CONTACT_BASE_ALPHA: u8 = 90;
/// A fading contact never drops below this alpha.
pub const CONTACT_MIN_ALPHA: u8 = 10;
/// Upper bound of the random flicker added to settled contacts.
pub const CONTACT_MAX_FLICKER: u8 = 30;
/// Default length of the fade-out before a contact expires, in seconds.
pub const CONTACT_FADE_TIME: f32 = 1.0;

/// Icon scale of a contact on the rim; contacts on the viewer draw at 1.0.
pub const FAR_ICON_SCALE: f32 = 0.75;

/// Vertical offsets within this band draw as a plain dot.
pub const DOT_Z_DEADZONE: f32 = 128.0;
const DOT_Z_MAX: f32 = 3096.0;
const DOT_Z_UNITS_PER_PIXEL: f32 = 400.0;

/// Alpha for a contact with `time_left` seconds to live.
///
/// Inside the fade window the alpha falls linearly toward zero, floored at
/// [`CONTACT_MIN_ALPHA`]. Otherwise it is the base alpha plus `flicker`.
pub fn contact_alpha(time_left: f32, fade_time: f32, flicker: u8) -> u8 {
    if fade_time > 0.0 && time_left < fade_time {
        let faded = f32::from(CONTACT_BASE_ALPHA) * (time_left / fade_time);
        (faded.max(f32::from(CONTACT_MIN_ALPHA))) as u8
    } else {
        CONTACT_BASE_ALPHA + flicker.min(CONTACT_MAX_FLICKER)
    }
}

/// Random flicker term for this frame.
pub fn random_flicker<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(0..=CONTACT_MAX_FLICKER)
}

/// Remap normalized distance [1, 0] to icon scale [0.75, 1.0].
pub fn icon_scale(normalized_distance: f32) -> f32 {
    let t = normalized_distance.clamp(0.0, 1.0);
    1.0 - (1.0 - FAR_ICON_SCALE) * t
}

/// Small random displacement of a ghost copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostJitter {
    pub dx: i32,
    pub dy: i32,
    /// Added to both edges.
    pub grow: i32,
}

impl GhostJitter {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            dx: rng.gen_range(-3..=3),
            dy: rng.gen_range(-3..=3),
            grow: rng.gen_range(-2..=4),
        }
    }

    /// Where the ghost of `icon` is drawn.
    pub fn apply(&self, icon: Rect) -> Rect {
        let (cx, cy) = icon.center();
        let w = (icon.width() + self.grow).max(1);
        let h = (icon.height() + self.grow).max(1);
        Rect::centered(cx + self.dx, cy + self.dy, w, h)
    }
}

/// Shape of a radar dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotGlyph {
    /// Target roughly level with the viewer.
    Square(Rect),
    /// Target above or below: a crossbar on the target's position with a
    /// stem pointing toward the viewer's height.
    Stemmed { crossbar: Rect, stem: Rect },
}

impl DotGlyph {
    pub fn rects(&self) -> impl Iterator<Item = Rect> {
        let (first, second) = match *self {
            DotGlyph::Square(rect) => (rect, None),
            DotGlyph::Stemmed { crossbar, stem } => (crossbar, Some(stem)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Dot for a target at (`x`, `y`).
///
/// Targets well below the viewer get an upside-down T, targets well above
/// get a T. The crossbar always sits on (`x`, `y`); the stem grows with the
/// height difference.
pub fn dot_glyph(x: i32, y: i32, z_delta: f32, base_size: i32) -> DotGlyph {
    if z_delta.abs() <= DOT_Z_DEADZONE {
        return DotGlyph::Square(Rect::centered(x, y, base_size, base_size));
    }

    let bar = (z_delta.abs().min(DOT_Z_MAX) / DOT_Z_UNITS_PER_PIXEL) as i32 + 2;
    let half = (base_size / 2).max(1);
    let crossbar = Rect::centered(x, y, half * 5, 1);
    let stem_x0 = x - half / 2;

    let stem = if z_delta < 0.0 {
        Rect::new(stem_x0, y - bar, stem_x0 + half, y)
    } else {
        Rect::new(stem_x0, y + 1, stem_x0 + half, y + 1 + bar)
    };
    DotGlyph::Stemmed { crossbar, stem }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn settled_contacts_get_base_plus_flicker() {
        assert_eq!(contact_alpha(3.0, CONTACT_FADE_TIME, 0), 90);
        assert_eq!(contact_alpha(3.0, CONTACT_FADE_TIME, 30), 120);
        // Flicker is capped.
        assert_eq!(contact_alpha(3.0, CONTACT_FADE_TIME, 200), 120);
    }

    #[test]
    fn fading_contacts_ramp_down_to_floor() {
        assert_eq!(contact_alpha(0.5, CONTACT_FADE_TIME, 30), 45);
        assert_eq!(contact_alpha(0.05, CONTACT_FADE_TIME, 30), CONTACT_MIN_ALPHA);
        assert_eq!(contact_alpha(-1.0, CONTACT_FADE_TIME, 0), CONTACT_MIN_ALPHA);
    }

    #[test]
    fn flicker_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            assert!(random_flicker(&mut rng) <= CONTACT_MAX_FLICKER);
        }
    }

    #[test]
    fn nearer_contacts_draw_larger() {
        assert_eq!(icon_scale(0.0), 1.0);
        assert_eq!(icon_scale(1.0), FAR_ICON_SCALE);
        assert!((icon_scale(0.5) - 0.875).abs() < 1e-6);
        assert_eq!(icon_scale(4.0), FAR_ICON_SCALE);
    }

    #[test]
    fn ghost_stays_near_its_icon() {
        let mut rng = StdRng::seed_from_u64(12);
        let icon = Rect::centered(50, 50, 24, 24);
        for _ in 0..100 {
            let ghost = GhostJitter::random(&mut rng).apply(icon);
            let (cx, cy) = ghost.center();
            assert!((cx - 50).abs() <= 4 && (cy - 50).abs() <= 4);
            assert!(ghost.width() >= 22 && ghost.width() <= 28);
        }
    }

    #[test]
    fn level_targets_draw_a_square() {
        assert_eq!(dot_glyph(10, 10, 0.0, 4), DotGlyph::Square(Rect::centered(10, 10, 4, 4)));
        assert_eq!(dot_glyph(10, 10, 128.0, 4).rects().count(), 1);
    }

    #[test]
    fn crossbar_marks_the_target_position() {
        for z in [-800.0, 800.0] {
            let DotGlyph::Stemmed { crossbar, .. } = dot_glyph(10, 20, z, 4) else {
                panic!("expected a stemmed dot for z {}", z);
            };
            assert_eq!(crossbar.center(), (10, 20));
            assert_eq!(crossbar.height(), 1);
            assert_eq!(crossbar.width(), 10);
        }
    }

    #[test]
    fn targets_below_raise_a_stem_up_to_the_crossbar() {
        let DotGlyph::Stemmed { stem, .. } = dot_glyph(10, 20, -800.0, 4) else {
            panic!("expected a stemmed dot");
        };
        // 800 / 400 + 2
        assert_eq!(stem.y0, 16);
        assert_eq!(stem.y1, 20);
        assert_eq!(stem.width(), 2);
    }

    #[test]
    fn targets_above_hang_a_stem_below_the_crossbar() {
        let DotGlyph::Stemmed { stem, .. } = dot_glyph(10, 20, 100_000.0, 4) else {
            panic!("expected a stemmed dot");
        };
        // Clamped: 3096 / 400 + 2
        assert_eq!(stem.y0, 21);
        assert_eq!(stem.y1, 30);
    }
}
