//! SandView: maps the engine's pixel window into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_sand_engine::PixelView;
use tui_sand_types::{GridSize, ParticleKind, Rgb};

use crate::fb::{CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the HUD line shows about the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub kind: ParticleKind,
    pub painting: bool,
    pub path_label: &'static str,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            kind: ParticleKind::Sand,
            painting: false,
            path_label: "pixels",
        }
    }
}

/// A lightweight terminal view for the sand grid.
///
/// Layout: row 0 is the HUD line, a box border starts on row 1, and the grid
/// content begins one cell inside it. Each grid cell becomes a
/// `scale x scale` character block; the grid is clipped to whatever fits the
/// viewport.
pub struct SandView {
    grid: GridSize,
    scale: u16,
}

struct Layout {
    cells_x: u16,
    cells_y: u16,
}

impl SandView {
    pub fn new(grid: GridSize, scale: u16) -> Self {
        Self {
            grid,
            scale: scale.max(1),
        }
    }

    /// Terminal position of grid cell (0, 0).
    ///
    /// Input mapping subtracts this before dividing by the scale.
    pub fn origin(&self) -> (u16, u16) {
        (1, 2)
    }

    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Render the pixel view into the framebuffer.
    pub fn render_pixels(
        &self,
        pixels: &PixelView<'_>,
        status: &Status,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let Some(layout) = self.begin(status, viewport, fb) else {
            return;
        };

        let black = Rgb::new(0, 0, 0);
        for cy in 0..layout.cells_y {
            for cx in 0..layout.cells_x {
                let Some(rgb) = pixels.rgb_at(cx as u32, cy as u32) else {
                    continue;
                };
                if rgb == black {
                    // Empty cells stay background.
                    continue;
                }
                self.fill_cell(
                    fb,
                    cx,
                    cy,
                    '█',
                    CellStyle {
                        fg: rgb,
                        bg: black,
                    },
                );
            }
        }
    }

    /// Render the engine's glyph grid into the framebuffer.
    pub fn render_text(&self, text: &str, status: &Status, viewport: Viewport, fb: &mut FrameBuffer) {
        let Some(layout) = self.begin(status, viewport, fb) else {
            return;
        };

        let style = CellStyle::default();
        for (cy, line) in text.lines().take(layout.cells_y as usize).enumerate() {
            for (cx, ch) in line.chars().take(layout.cells_x as usize).enumerate() {
                if ch == ' ' {
                    continue;
                }
                self.fill_cell(fb, cx as u16, cy as u16, ch, style);
            }
        }
    }

    fn begin(&self, status: &Status, viewport: Viewport, fb: &mut FrameBuffer) -> Option<Layout> {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());
        self.draw_status(status, fb);

        let layout = self.layout(viewport)?;
        self.draw_border(
            fb,
            0,
            1,
            layout.cells_x * self.scale + 2,
            layout.cells_y * self.scale + 2,
        );
        Some(layout)
    }

    fn layout(&self, viewport: Viewport) -> Option<Layout> {
        let avail_w = viewport.width.saturating_sub(2);
        let avail_h = viewport.height.saturating_sub(3);
        let cells_x = ((avail_w / self.scale) as u32).min(self.grid.width) as u16;
        let cells_y = ((avail_h / self.scale) as u32).min(self.grid.height) as u16;
        if cells_x == 0 || cells_y == 0 {
            return None;
        }
        Some(Layout { cells_x, cells_y })
    }

    fn draw_status(&self, status: &Status, fb: &mut FrameBuffer) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        };
        let dim = CellStyle {
            fg: Rgb::new(120, 120, 120),
            bg: Rgb::new(0, 0, 0),
        };

        let mut line = format!(
            "SAND {}x{}  kind {}  view {}",
            self.grid.width,
            self.grid.height,
            status.kind.as_str(),
            status.path_label
        );
        if status.painting {
            line.push_str("  painting");
        }
        fb.put_str(0, 0, &line, label);

        let help = "q quit  space drop  0-5 kind  t view";
        let col = (line.chars().count() + 3) as u16;
        fb.put_str(col, 0, help, dim);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(0, 0, 0),
        };

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, cx: u16, cy: u16, ch: char, style: CellStyle) {
        let (ox, oy) = self.origin();
        let px = ox + cx * self.scale;
        let py = oy + cy * self.scale;
        fb.fill_rect(px, py, self.scale, self.scale, ch, style);
    }
}
