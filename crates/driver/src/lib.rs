//! Frame driver: per-frame orchestration of paint, advance, and present.
//!
//! One [`FrameDriver::run_frame`] call is one frame. In order: apply the
//! pending brush stroke (spawn calls), advance the simulation by a tick,
//! refresh the presenter from the current pixel view (or the text path), and
//! return the scheduling decision for the next frame.
//!
//! The loop is failure-proof by construction: no error from a single frame's
//! work escapes this crate. Engine failures are logged and degrade to a
//! skipped step; a stale pixel view gets exactly one re-acquire attempt per
//! frame. Only startup (attaching to the engine) can fail fatally.

use log::{debug, warn};

use tui_sand_core::{brush, BrushBuffer, StrokeContext};
use tui_sand_engine::{Engine, PixelBridge, PixelView, ViewSource};
use tui_sand_types::{GridSize, ViewerError, BRUSH_RADIUS};

/// Sink for a finished frame's output.
///
/// Implementations choose how pixels reach the user (terminal cells, a GPU
/// texture, a test recorder); the driver only hands over the latest frame.
pub trait FramePresenter {
    fn present_pixels(&mut self, view: &PixelView<'_>) -> anyhow::Result<()>;
    fn present_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Which engine output the driver presents each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    Pixels,
    Text,
}

impl RenderPath {
    pub fn toggled(self) -> Self {
        match self {
            RenderPath::Pixels => RenderPath::Text,
            RenderPath::Text => RenderPath::Pixels,
        }
    }
}

/// The driver's continue/stop decision, made explicitly every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Continue,
    Stop,
}

/// What a single frame actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub spawns: u32,
    pub advanced: bool,
    pub presented: bool,
    pub reacquired: bool,
}

/// Per-frame orchestrator owning the stroke context and the pixel bridge.
pub struct FrameDriver {
    size: GridSize,
    bridge: PixelBridge,
    ctx: StrokeContext,
    brush_buf: BrushBuffer,
    path: RenderPath,
    stop_requested: bool,
}

impl FrameDriver {
    /// Attach a driver to an engine, acquiring the initial pixel view.
    ///
    /// This is the one fallible step: a bridge failure here is fatal and
    /// surfaces to the caller, per the startup error policy.
    pub fn attach<S: ViewSource>(
        size: GridSize,
        path: RenderPath,
        source: &S,
    ) -> Result<Self, ViewerError> {
        let mut bridge = PixelBridge::new(size);
        bridge.acquire(source)?;
        Ok(Self {
            size,
            bridge,
            ctx: StrokeContext::new(),
            brush_buf: BrushBuffer::new(),
            path,
            stop_requested: false,
        })
    }

    /// The stroke context input handlers write into.
    pub fn context_mut(&mut self) -> &mut StrokeContext {
        &mut self.ctx
    }

    pub fn context(&self) -> &StrokeContext {
        &self.ctx
    }

    pub fn path(&self) -> RenderPath {
        self.path
    }

    pub fn toggle_path(&mut self) {
        self.path = self.path.toggled();
    }

    /// Decline to schedule any further frames; takes effect at the end of
    /// the current frame.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Run one frame against the engine and presenter.
    ///
    /// Never fails: per-frame errors are logged and reflected in the
    /// [`FrameReport`], and the returned [`Schedule`] is `Stop` only after
    /// [`request_stop`](FrameDriver::request_stop).
    pub fn run_frame<E, P>(&mut self, engine: &mut E, presenter: &mut P) -> (Schedule, FrameReport)
    where
        E: Engine + ViewSource,
        P: FramePresenter,
    {
        let mut report = FrameReport::default();

        if !self.paint(engine, &mut report) {
            // Engine-internal spawn failure: skip the rest of this frame.
            return (self.schedule(), report);
        }

        if let Err(err) = engine.advance() {
            warn!("advance failed, skipping frame: {}", err);
            return (self.schedule(), report);
        }
        report.advanced = true;

        self.present(&*engine, presenter, &mut report);

        (self.schedule(), report)
    }

    /// Issue the frame's spawn calls. Returns `false` on an engine-internal
    /// failure, which skips the remaining work for this frame.
    fn paint<E: Engine>(&mut self, engine: &mut E, report: &mut FrameReport) -> bool {
        if self.ctx.is_painting() {
            if let Some((cx, cy)) = self.ctx.pointer() {
                brush::expand_into(&mut self.brush_buf, cx, cy, BRUSH_RADIUS, self.size);
                let kind = self.ctx.kind();
                for &(x, y) in &self.brush_buf {
                    match engine.spawn_at(x, y, kind) {
                        Ok(()) => report.spawns += 1,
                        Err(ViewerError::OutOfBounds { .. }) => {
                            debug!("spawn at ({}, {}) skipped: out of bounds", x, y);
                        }
                        Err(err) => {
                            warn!("spawn failed, skipping frame: {}", err);
                            return false;
                        }
                    }
                }
            }
        }

        if self.ctx.take_single_spawn() {
            let (x, y) = self.trigger_target();
            match engine.spawn_at(x, y, self.ctx.kind()) {
                Ok(()) => report.spawns += 1,
                Err(ViewerError::OutOfBounds { .. }) => {
                    debug!("trigger spawn at ({}, {}) skipped: out of bounds", x, y);
                }
                Err(err) => {
                    warn!("trigger spawn failed, skipping frame: {}", err);
                    return false;
                }
            }
        }

        true
    }

    /// Where the discrete single-spawn trigger lands: the last-known pointer
    /// clamped to the grid, or the grid center before any pointer event.
    fn trigger_target(&self) -> (u32, u32) {
        match self.ctx.pointer() {
            Some((x, y)) => (
                x.clamp(0, self.size.width as i32 - 1) as u32,
                y.clamp(0, self.size.height as i32 - 1) as u32,
            ),
            None => (self.size.width / 2, self.size.height / 2),
        }
    }

    fn present<E, P>(&mut self, engine: &E, presenter: &mut P, report: &mut FrameReport)
    where
        E: Engine + ViewSource,
        P: FramePresenter,
    {
        match self.path {
            RenderPath::Text => {
                let text = engine.render_text();
                match presenter.present_text(&text) {
                    Ok(()) => report.presented = true,
                    Err(err) => warn!("present failed: {:#}", err),
                }
            }
            RenderPath::Pixels => {
                let view = match self.bridge.view(engine) {
                    Ok(view) => Some(view),
                    Err(ViewerError::StaleView) => {
                        // One re-acquire attempt, then give up for this frame.
                        match self.bridge.acquire(engine) {
                            Ok(()) => {
                                report.reacquired = true;
                                self.bridge.view(engine).ok()
                            }
                            Err(err) => {
                                warn!("re-acquire failed, skipping render: {}", err);
                                None
                            }
                        }
                    }
                    Err(err) => {
                        warn!("view unavailable, skipping render: {}", err);
                        None
                    }
                };

                if let Some(view) = view {
                    match presenter.present_pixels(&view) {
                        Ok(()) => report.presented = true,
                        Err(err) => warn!("present failed: {:#}", err),
                    }
                }
            }
        }
    }

    fn schedule(&self) -> Schedule {
        if self.stop_requested {
            Schedule::Stop
        } else {
            Schedule::Continue
        }
    }
}
