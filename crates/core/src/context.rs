//! Per-session stroke context shared between input handlers and the driver.

use tui_sand_types::ParticleKind;

use crate::drag::DragTracker;

/// Pointer and brush state, owned by the frame driver.
///
/// Input handlers mutate this (and nothing else); the driver reads it once
/// per frame boundary. All writes are last-write-wins - there is no event
/// queue, only the most recent pointer position matters to a frame.
#[derive(Debug, Clone)]
pub struct StrokeContext {
    pointer: Option<(i32, i32)>,
    drag: DragTracker,
    kind: ParticleKind,
    spawn_requested: bool,
}

impl StrokeContext {
    pub fn new() -> Self {
        Self {
            pointer: None,
            drag: DragTracker::new(),
            kind: ParticleKind::Sand,
            spawn_requested: false,
        }
    }

    /// Record the latest pointer position in grid coordinates.
    ///
    /// The position is stored unclamped; it may lie outside the grid.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.pointer = Some((x, y));
    }

    /// Last-known pointer position, if any event arrived yet.
    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    pub fn press(&mut self) {
        self.drag.press();
    }

    pub fn release(&mut self) {
        self.drag.release();
    }

    pub fn is_painting(&self) -> bool {
        self.drag.is_painting()
    }

    /// Change the particle kind carried by subsequent spawns.
    pub fn select_kind(&mut self, kind: ParticleKind) {
        self.kind = kind;
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    /// Queue one discrete spawn, independent of the drag-paint path.
    pub fn request_single_spawn(&mut self) {
        self.spawn_requested = true;
    }

    /// Consume the pending discrete spawn request, if one is queued.
    pub fn take_single_spawn(&mut self) -> bool {
        std::mem::take(&mut self.spawn_requested)
    }
}

impl Default for StrokeContext {
    fn default() -> Self {
        Self::new()
    }
}
