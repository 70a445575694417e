//! The radar HUD panel.
//!
//! Owns the contact registry and ghost timer for one level session. The host
//! calls [`RadarPanel::paint`] once per frame; game logic feeds it through
//! [`RadarPanel::report_contact`].

use engine_core::Viewer;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{validate_range, ConfigError, DrawMode, RadarConfig};
use crate::contact::{Contact, ContactKind, GENERIC_DOT_COLOR, GENERIC_DOT_SIZE, STYLED_KIND_COUNT};
use crate::draw::{self, GhostJitter};
use crate::ghost::GhostFade;
use crate::projector::{world_to_radar, ZMode};
use crate::registry::{ContactRegistry, ReportOutcome};
use crate::surface::{RadarSurface, Rect, Rgba, TextureId};

const BACKGROUND_COLOR: Rgba = [255, 255, 255, 255];

/// Textures created on the first paint after (re)initialization.
#[derive(Debug, Clone, Copy)]
struct PanelTextures {
    background: TextureId,
    /// Indexed by [`ContactKind::style_index`].
    icons: [TextureId; STYLED_KIND_COUNT],
}

impl PanelTextures {
    fn icon(&self, kind: ContactKind) -> Option<TextureId> {
        kind.style_index().map(|i| self.icons[i])
    }
}

pub struct RadarPanel {
    config: RadarConfig,
    contacts: ContactRegistry,
    ghost: GhostFade,
    textures: Option<PanelTextures>,
    visible: bool,
    rng: StdRng,
}

impl RadarPanel {
    pub fn new(config: RadarConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Panel with a fixed random stream, for reproducible flicker and jitter.
    pub fn with_seed(config: RadarConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RadarConfig, rng: StdRng) -> Self {
        Self {
            config,
            contacts: ContactRegistry::new(),
            ghost: GhostFade::new(0.0),
            textures: None,
            visible: true,
            rng,
        }
    }

    /// Start of a level session: forget contacts and restart the ghost timer.
    pub fn init(&mut self, now: f32) {
        self.reset(now);
        log::info!("Radar panel initialized (range {:.0})", self.config.range);
    }

    /// Video mode change or level load. Host textures are gone, so they are
    /// recreated on the next paint.
    pub fn vid_init(&mut self, now: f32) {
        self.textures = None;
        self.reset(now);
    }

    pub fn reset(&mut self, now: f32) {
        self.contacts.clear();
        self.ghost.reset(now);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn range(&self) -> f32 {
        self.config.range
    }

    /// Change the radar range. Invalid values leave the range untouched.
    pub fn set_range(&mut self, range: f32) -> Result<(), ConfigError> {
        self.config.range = validate_range(range)?;
        log::info!("Radar range set to {:.0}", range);
        Ok(())
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.config.draw_mode = mode;
    }

    /// Track a contact at `position` for `ttl` seconds, or extend the one
    /// already there. Silently dropped when the radar is full.
    pub fn report_contact(&mut self, position: Vec3, kind: ContactKind, ttl: f32, now: f32) -> ReportOutcome {
        let outcome = self.contacts.report(position, kind, ttl, now);
        if outcome == ReportOutcome::Added {
            log::debug!("Radar contact {:?} at {:?} for {:.1}s", kind, position, ttl);
        }
        outcome
    }

    pub fn find_contact(&self, position: Vec3) -> Option<&Contact> {
        self.contacts.find(position).and_then(|i| self.contacts.get(i))
    }

    pub fn clear_all_contacts(&mut self) {
        self.contacts.clear();
    }

    pub fn contacts(&self) -> &ContactRegistry {
        &self.contacts
    }

    pub fn ghost(&self) -> &GhostFade {
        &self.ghost
    }

    /// Draw one frame and drop contacts that have expired.
    pub fn paint<S: RadarSurface + ?Sized>(&mut self, surface: &mut S, viewer: &Viewer, now: f32) {
        if !self.visible {
            return;
        }

        let textures = self.ensure_textures(surface);
        let (wide, tall) = surface.panel_size();
        surface.draw_textured_rect(textures.background, Rect::new(0, 0, wide, tall), BACKGROUND_COLOR);

        self.ghost.update(now, &mut self.rng);

        let mut painter = ContactPainter {
            config: &self.config,
            textures,
            ghost_alpha: self.ghost.alpha(),
            rng: &mut self.rng,
            viewer,
            panel_radius: wide as f32,
        };
        for contact in self.contacts.iter() {
            let flicker = draw::random_flicker(painter.rng);
            let alpha = draw::contact_alpha(contact.time_left(now), painter.config.contact_fade_time, flicker);
            match painter.config.draw_mode {
                DrawMode::Icons => painter.draw_icon_on_radar(surface, contact, alpha),
                DrawMode::Dots => painter.draw_position_on_radar(surface, contact, alpha),
            }
        }

        self.contacts.sweep_expired(now);
    }

    fn ensure_textures<S: RadarSurface + ?Sized>(&mut self, surface: &mut S) -> PanelTextures {
        if let Some(textures) = self.textures {
            return textures;
        }

        let background = surface.create_texture(&self.config.background_texture);
        let icons = ContactKind::styled().map(|kind| {
            let icon = kind.style().map_or("", |style| style.icon);
            surface.create_texture(icon)
        });
        let textures = PanelTextures { background, icons };
        log::debug!("Radar textures created ({} icon(s))", icons.len());
        self.textures = Some(textures);
        textures
    }
}

/// Per-frame drawing state, borrowed from the panel for one paint.
///
/// The panel edge is used as the radar diameter; the panel is round.
struct ContactPainter<'a> {
    config: &'a RadarConfig,
    textures: PanelTextures,
    ghost_alpha: u8,
    rng: &'a mut StdRng,
    viewer: &'a Viewer,
    panel_radius: f32,
}

impl ContactPainter<'_> {
    fn draw_icon_on_radar<S: RadarSurface + ?Sized>(&mut self, surface: &mut S, contact: &Contact, alpha: u8) {
        let (Some(style), Some(texture)) = (contact.kind.style(), self.textures.icon(contact.kind)) else {
            return;
        };

        let point = world_to_radar(
            contact.position,
            self.viewer,
            self.config.range,
            self.panel_radius,
            ZMode::Ignore,
        );

        let scale = draw::icon_scale(point.scale);
        let size = ((style.icon_size as f32) * scale).round() as i32;
        let icon = Rect::centered(point.x as i32, point.y as i32, size, size);
        let [r, g, b, _] = style.icon_color;
        surface.draw_textured_rect(texture, icon, [r, g, b, alpha]);

        // No ghost for icons pegged to the rim, including targets at exactly range.
        if self.config.ghosting && scale > draw::FAR_ICON_SCALE && self.ghost_alpha > 0 {
            let ghost = GhostJitter::random(self.rng).apply(icon);
            surface.draw_textured_rect(texture, ghost, [r, g, b, self.ghost_alpha]);
        }
    }

    fn draw_position_on_radar<S: RadarSurface + ?Sized>(&mut self, surface: &mut S, contact: &Contact, alpha: u8) {
        let z_mode = if self.config.vertical_indicators {
            ZMode::Relative
        } else {
            ZMode::Ignore
        };
        let point = world_to_radar(contact.position, self.viewer, self.config.range, self.panel_radius, z_mode);

        let (color, size) = match contact.kind.style() {
            Some(style) => (style.dot_color, style.dot_size),
            None => (GENERIC_DOT_COLOR, GENERIC_DOT_SIZE),
        };
        let [r, g, b, _] = color;
        draw_radar_dot(surface, point.x as i32, point.y as i32, point.z_delta, size, [r, g, b, alpha]);
    }
}

/// Draw a dot, or a T glyph for targets above/below the viewer.
pub fn draw_radar_dot<S: RadarSurface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    z_delta: f32,
    base_size: i32,
    color: Rgba,
) {
    for rect in draw::dot_glyph(x, y, z_delta, base_size).rects() {
        surface.draw_filled_rect(rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghost::MAX_GHOST_ALPHA;
    use crate::registry::MAX_CONTACTS;
    use crate::surface::{DrawCommand, DrawList};

    const PANEL: i32 = 256;
    const ENEMY_ICON: &str = "hud/radar_icon_enemy";

    fn panel() -> RadarPanel {
        let mut p = RadarPanel::with_seed(RadarConfig::default(), 7);
        p.init(0.0);
        p
    }

    fn viewer_facing_y() -> Viewer {
        Viewer::new(Vec3::ZERO, 90.0)
    }

    #[test]
    fn first_paint_creates_textures_once() {
        let mut p = panel();
        p.report_contact(Vec3::new(0.0, 800.0, 0.0), ContactKind::Enemy, 5.0, 0.0);
        let mut list = DrawList::new(PANEL, PANEL);
        for frame in 1..=3 {
            p.paint(&mut list, &viewer_facing_y(), frame as f32 * 0.1);
        }
        assert_eq!(list.texture_count(), 2);
        assert_eq!(list.textured_with("hud/radar_background").count(), 3);
        // The cached icon texture is reused on every frame.
        assert_eq!(list.textured_with(ENEMY_ICON).count(), 3);
    }

    #[test]
    fn hidden_panel_draws_nothing_and_keeps_contacts() {
        let mut p = panel();
        p.report_contact(Vec3::new(100.0, 0.0, 0.0), ContactKind::Enemy, 1.0, 0.0);
        p.set_visible(false);
        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 5.0);
        assert!(list.commands.is_empty());
        assert_eq!(p.contacts().len(), 1);
    }

    #[test]
    fn contact_ahead_draws_icon_above_center() {
        let mut p = panel();
        p.report_contact(Vec3::new(0.0, 1000.0, 0.0), ContactKind::Enemy, 5.0, 0.0);
        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 0.5);

        let icons: Vec<_> = list.textured_with(ENEMY_ICON).collect();
        assert_eq!(icons.len(), 1);
        let (rect, color) = icons[0];
        let (cx, cy) = rect.center();
        assert!((cx - PANEL / 2).abs() <= 1);
        assert!(cy < PANEL / 2 - 30);
        assert!(color[3] >= 90 && color[3] <= 120);
        // A third of the way out: 24 * (1 - 0.25 / 3) = 22.
        assert_eq!(rect.width(), 22);
    }

    #[test]
    fn paint_sweeps_expired_contacts() {
        let mut p = panel();
        p.report_contact(Vec3::new(100.0, 0.0, 0.0), ContactKind::Enemy, 5.0, 0.0);
        p.report_contact(Vec3::new(100.0, 0.0, 0.0), ContactKind::Enemy, 5.0, 3.0);
        assert_eq!(p.find_contact(Vec3::new(100.0, 0.0, 0.0)).unwrap().expire_at, 8.0);

        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 9.0);
        assert!(p.contacts().is_empty());
    }

    #[test]
    fn fading_contact_uses_reduced_alpha() {
        let mut p = panel();
        p.report_contact(Vec3::new(500.0, 0.0, 0.0), ContactKind::Enemy, 1.0, 0.0);
        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 0.5);
        let (_, color) = list.textured_with(ENEMY_ICON).next().unwrap();
        assert_eq!(color[3], 45);
    }

    #[test]
    fn unknown_kinds_skip_icons_but_draw_dots() {
        let mut p = panel();
        p.report_contact(Vec3::new(500.0, 0.0, 0.0), ContactKind::Unknown(9), 5.0, 0.0);

        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 0.1);
        assert_eq!(list.commands.len(), 1); // background only

        p.set_draw_mode(DrawMode::Dots);
        list.clear();
        p.paint(&mut list, &viewer_facing_y(), 0.2);
        let dots: Vec<_> = list.filled().collect();
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].0.width(), GENERIC_DOT_SIZE);
    }

    #[test]
    fn out_of_range_contact_never_ghosts() {
        let mut p = panel();
        p.report_contact(Vec3::new(10_000.0, 0.0, 0.0), ContactKind::Enemy, 60.0, 0.0);
        p.report_contact(Vec3::new(0.0, 500.0, 0.0), ContactKind::Enemy, 60.0, 0.0);

        let mut list = DrawList::new(PANEL, PANEL);
        let mut now = 0.0;
        // Run until the ghost is at full strength.
        while p.ghost().alpha() < MAX_GHOST_ALPHA {
            now += 1.0 / 60.0;
            list.clear();
            p.paint(&mut list, &viewer_facing_y(), now);
        }

        // Two icons plus one ghost for the in-range contact.
        let icons: Vec<_> = list.textured_with(ENEMY_ICON).collect();
        assert_eq!(icons.len(), 3);
        let ghosts = icons.iter().filter(|(_, c)| c[3] == p.ghost().alpha()).count();
        assert_eq!(ghosts, 1);
    }

    #[test]
    fn contact_at_exact_range_never_ghosts() {
        let mut p = panel();
        p.report_contact(Vec3::new(0.0, 3000.0, 0.0), ContactKind::Enemy, 60.0, 0.0);

        let mut list = DrawList::new(PANEL, PANEL);
        let mut now = 0.0;
        while p.ghost().alpha() < MAX_GHOST_ALPHA {
            now += 1.0 / 60.0;
            list.clear();
            p.paint(&mut list, &viewer_facing_y(), now);
        }

        let icons: Vec<_> = list.textured_with(ENEMY_ICON).collect();
        assert_eq!(icons.len(), 1);
        // Rim icons draw at minimum scale: 24 * 0.75.
        assert_eq!(icons[0].0.width(), 18);
    }

    #[test]
    fn ghosting_can_be_disabled() {
        let config = RadarConfig {
            ghosting: false,
            ..RadarConfig::default()
        };
        let mut p = RadarPanel::with_seed(config, 3);
        p.init(0.0);
        p.report_contact(Vec3::new(0.0, 500.0, 0.0), ContactKind::Enemy, 60.0, 0.0);

        let mut list = DrawList::new(PANEL, PANEL);
        let mut now = 0.0;
        while p.ghost().alpha() < MAX_GHOST_ALPHA {
            now += 1.0 / 60.0;
            list.clear();
            p.paint(&mut list, &viewer_facing_y(), now);
        }
        assert_eq!(list.textured_with(ENEMY_ICON).count(), 1);
    }

    #[test]
    fn vertical_indicator_draws_t_glyph() {
        let config = RadarConfig {
            draw_mode: DrawMode::Dots,
            vertical_indicators: true,
            ..RadarConfig::default()
        };
        let mut p = RadarPanel::with_seed(config, 5);
        p.init(0.0);
        p.report_contact(Vec3::new(0.0, 500.0, 600.0), ContactKind::Enemy, 5.0, 0.0);

        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 0.1);
        assert_eq!(list.filled().count(), 2);
    }

    #[test]
    fn capacity_limits_drawn_contacts() {
        let mut p = panel();
        for i in 0..(MAX_CONTACTS + 5) {
            p.report_contact(Vec3::new(100.0 + i as f32, 0.0, 0.0), ContactKind::Enemy, 5.0, 0.0);
        }
        p.set_draw_mode(DrawMode::Dots);
        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 0.1);
        assert_eq!(list.filled().count(), MAX_CONTACTS);
    }

    #[test]
    fn set_range_rejects_bad_values() {
        let mut p = panel();
        assert!(p.set_range(-5.0).is_err());
        assert_eq!(p.range(), 3000.0);
        p.set_range(1500.0).unwrap();
        assert_eq!(p.range(), 1500.0);
    }

    #[test]
    fn vid_init_recreates_textures_and_clears_state() {
        let mut p = panel();
        p.report_contact(Vec3::new(100.0, 0.0, 0.0), ContactKind::Enemy, 5.0, 0.0);
        let mut list = DrawList::new(PANEL, PANEL);
        p.paint(&mut list, &viewer_facing_y(), 0.1);

        let mut fresh = DrawList::new(PANEL, PANEL);
        p.vid_init(1.0);
        assert!(p.contacts().is_empty());
        p.paint(&mut fresh, &viewer_facing_y(), 1.1);
        assert_eq!(fresh.texture_count(), 2);
        assert!(matches!(fresh.commands[0], DrawCommand::Textured { .. }));
    }
}
