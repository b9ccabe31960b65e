//! Terminal-backed implementation of the driver's presenter.

use anyhow::Result;

use tui_sand_driver::FramePresenter;
use tui_sand_engine::PixelView;
use tui_sand_types::{GridSize, ParticleKind};

use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::sand_view::{SandView, Status, Viewport};

/// Owns the sand view, the renderer, and one reused framebuffer.
///
/// The driver hands this a frame's output; everything terminal-specific
/// (viewport size, diff flushing, enter/exit discipline) stays here.
pub struct TermPresenter {
    view: SandView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    status: Status,
}

impl TermPresenter {
    pub fn new(grid: GridSize, scale: u16) -> Self {
        Self {
            view: SandView::new(grid, scale),
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            status: Status::default(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Force a full redraw on the next frame (e.g. after a terminal resize).
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    /// Terminal position of grid cell (0, 0), for pointer mapping.
    pub fn grid_origin(&self) -> (u16, u16) {
        self.view.origin()
    }

    /// Characters per grid cell, for pointer mapping.
    pub fn cell_scale(&self) -> u16 {
        self.view.scale()
    }

    /// Refresh what the HUD line shows; called once per frame by the host.
    pub fn set_status(&mut self, kind: ParticleKind, painting: bool, path_label: &'static str) {
        self.status = Status {
            kind,
            painting,
            path_label,
        };
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl FramePresenter for TermPresenter {
    fn present_pixels(&mut self, view: &PixelView<'_>) -> Result<()> {
        let viewport = Self::viewport();
        self.view
            .render_pixels(view, &self.status, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn present_text(&mut self, text: &str) -> Result<()> {
        let viewport = Self::viewport();
        self.view
            .render_text(text, &self.status, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
