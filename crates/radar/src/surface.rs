//! Seam to the host's 2D drawing API.
//!
//! The panel never draws by itself; it issues rectangle calls through
//! [`RadarSurface`]. [`DrawList`] records those calls, which is what tests
//! and the console demo render from.

/// 8-bit RGBA color.
pub type Rgba = [u8; 4];

/// Host texture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Pixel rectangle in panel-local coordinates, `x1`/`y1` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle of size `w` x `h` centred on (`cx`, `cy`).
    pub fn centered(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        let x0 = cx - w / 2;
        let y0 = cy - h / 2;
        Self::new(x0, y0, x0 + w, y0 + h)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }
}

/// Drawing calls the radar needs from the host GUI layer.
pub trait RadarSurface {
    /// Panel width and height in pixels.
    fn panel_size(&self) -> (i32, i32);
    /// Load (or look up) a texture by path.
    fn create_texture(&mut self, path: &str) -> TextureId;
    fn draw_filled_rect(&mut self, rect: Rect, color: Rgba);
    fn draw_textured_rect(&mut self, texture: TextureId, rect: Rect, color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Filled { rect: Rect, color: Rgba },
    Textured { texture: TextureId, rect: Rect, color: Rgba },
}

/// A [`RadarSurface`] that records calls instead of drawing.
#[derive(Debug, Clone)]
pub struct DrawList {
    wide: i32,
    tall: i32,
    textures: Vec<String>,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(wide: i32, tall: i32) -> Self {
        Self {
            wide,
            tall,
            textures: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Drop recorded commands, keeping loaded textures.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Path a texture was created from.
    pub fn texture_path(&self, id: TextureId) -> Option<&str> {
        self.textures.get(id.0 as usize).map(String::as_str)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Textured draws that used the texture loaded from `path`.
    pub fn textured_with<'a>(&'a self, path: &'a str) -> impl Iterator<Item = (&'a Rect, &'a Rgba)> + 'a {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Textured { texture, rect, color } if self.texture_path(*texture) == Some(path) => {
                Some((rect, color))
            }
            _ => None,
        })
    }

    pub fn filled(&self) -> impl Iterator<Item = (&Rect, &Rgba)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Filled { rect, color } => Some((rect, color)),
            _ => None,
        })
    }
}

impl RadarSurface for DrawList {
    fn panel_size(&self) -> (i32, i32) {
        (self.wide, self.tall)
    }

    fn create_texture(&mut self, path: &str) -> TextureId {
        if let Some(index) = self.textures.iter().position(|t| t == path) {
            return TextureId(index as u32);
        }
        self.textures.push(path.to_string());
        TextureId(self.textures.len() as u32 - 1)
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Filled { rect, color });
    }

    fn draw_textured_rect(&mut self, texture: TextureId, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Textured { texture, rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_spans_requested_size() {
        let r = Rect::centered(10, 10, 4, 6);
        assert_eq!(r, Rect::new(8, 7, 12, 13));
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 6);
        assert_eq!(r.center(), (10, 10));
    }

    #[test]
    fn textures_are_deduplicated_by_path() {
        let mut list = DrawList::new(128, 128);
        let a = list.create_texture("hud/a");
        let b = list.create_texture("hud/b");
        assert_ne!(a, b);
        assert_eq!(list.create_texture("hud/a"), a);
        assert_eq!(list.texture_count(), 2);
        assert_eq!(list.texture_path(b), Some("hud/b"));
    }

    #[test]
    fn records_commands_in_order() {
        let mut list = DrawList::new(64, 64);
        let tex = list.create_texture("hud/icon");
        list.draw_filled_rect(Rect::new(0, 0, 2, 2), [1, 2, 3, 4]);
        list.draw_textured_rect(tex, Rect::new(4, 4, 8, 8), [255; 4]);

        assert_eq!(list.commands.len(), 2);
        assert_eq!(list.filled().count(), 1);
        assert_eq!(list.textured_with("hud/icon").count(), 1);
        list.clear();
        assert!(list.commands.is_empty());
        assert_eq!(list.texture_count(), 1);
    }
}
