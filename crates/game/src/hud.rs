//! Console rendering of the radar panel.
//! Rasterizes the recorded draw calls into a character grid.

use radar::{DrawCommand, DrawList, Rect, RadarSurface, PANEL_FIT_DIVISOR};

/// Icons at or above this alpha draw as solid blips; fainter ones (ghosts,
/// fading contacts) draw as faint blips.
const SOLID_ALPHA: u8 = 40;

pub struct ConsoleRadar {
    cols: usize,
    rows: usize,
}

impl ConsoleRadar {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(3),
            rows: rows.max(3),
        }
    }

    /// Draw the panel contents as text, framed like the game HUD.
    pub fn render(&self, list: &DrawList, background: &str, status: &str) -> String {
        let (wide, tall) = list.panel_size();
        let mut grid = vec![vec![' '; self.cols]; self.rows];
        self.draw_rim(&mut grid);

        for cmd in &list.commands {
            match cmd {
                DrawCommand::Textured { texture, rect, color } => {
                    if list.texture_path(*texture) == Some(background) {
                        continue;
                    }
                    let glyph = if color[3] >= SOLID_ALPHA { 'E' } else { 'e' };
                    self.plot(&mut grid, rect, wide, tall, glyph);
                }
                DrawCommand::Filled { rect, .. } => self.plot(&mut grid, rect, wide, tall, '*'),
            }
        }

        // Player marker always on top.
        grid[self.rows / 2][self.cols / 2] = '^';

        let mut output = String::new();
        output.push_str(&format!("╔{}╗\n", "═".repeat(self.cols)));
        for row in &grid {
            output.push('║');
            output.extend(row.iter());
            output.push_str("║\n");
        }
        output.push_str(&format!("╚{}╝\n", "═".repeat(self.cols)));
        output.push_str(status);
        output.push('\n');
        output
    }

    fn draw_rim(&self, grid: &mut [Vec<char>]) {
        let cx = (self.cols as f32 - 1.0) / 2.0;
        let cy = (self.rows as f32 - 1.0) / 2.0;
        // Blips are kept inside this fraction of the panel width.
        let rim = 1.0 / PANEL_FIT_DIVISOR;
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let nx = (c as f32 - cx) / self.cols as f32;
                let ny = (r as f32 - cy) / self.rows as f32;
                let d = (nx * nx + ny * ny).sqrt();
                if (d - rim).abs() < 0.5 / self.cols as f32 + 0.01 {
                    *cell = '·';
                }
            }
        }
    }

    fn plot(&self, grid: &mut [Vec<char>], rect: &Rect, wide: i32, tall: i32, glyph: char) {
        if wide <= 0 || tall <= 0 {
            return;
        }
        let (x, y) = rect.center();
        let c = (x as f32 / wide as f32 * self.cols as f32).floor();
        let r = (y as f32 / tall as f32 * self.rows as f32).floor();
        if c < 0.0 || r < 0.0 || c >= self.cols as f32 || r >= self.rows as f32 {
            return;
        }
        let cell = &mut grid[r as usize][c as usize];
        // Solid blips win over faint ones sharing a cell.
        if *cell != 'E' {
            *cell = glyph;
        }
    }
}
