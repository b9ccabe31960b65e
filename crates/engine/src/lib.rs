//! Engine boundary for the sand viewer.
//!
//! The simulation itself is an external collaborator: this crate defines the
//! operations the viewer consumes (construct, advance, spawn, pixel output)
//! and deliberately nothing about how a backend implements them. The
//! [`bridge`] module wraps the pixel output in a zero-copy, staleness-checked
//! view; [`inert`] provides a rule-free reference backend so the binary and
//! the tests can exercise the full boundary.

pub mod bridge;
pub mod inert;

pub use bridge::{PixelBridge, PixelView};
pub use inert::InertEngine;

use tui_sand_types::{GridSize, ParticleKind, ViewerError};

/// Location of the engine's pixel output inside its memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub offset: usize,
    pub len: usize,
}

/// The simulation engine, consumed strictly through these operations.
pub trait Engine {
    /// Grid dimensions fixed at construction.
    fn size(&self) -> GridSize;

    /// Advance the simulation by exactly one discrete tick.
    ///
    /// Deterministic given prior state.
    fn advance(&mut self) -> Result<(), ViewerError>;

    /// Introduce a particle at the given cell.
    ///
    /// Spawning into an occupied cell is idempotent, never an error.
    /// Out-of-range coordinates fail with [`ViewerError::OutOfBounds`];
    /// implementations must not clamp and must not panic.
    fn spawn_at(&mut self, x: u32, y: u32, kind: ParticleKind) -> Result<(), ViewerError>;

    /// Textual rendering path: one glyph per cell, `height` lines.
    fn render_text(&self) -> String;
}

/// Read access to the engine-owned memory backing the pixel output.
///
/// The engine owns the bytes. Holders get a non-owning window whose validity
/// ends whenever [`ViewSource::epoch`] changes; they re-borrow through the
/// bridge every frame instead of storing an address.
pub trait ViewSource {
    /// The engine's full memory region.
    fn memory(&self) -> &[u8];

    /// Current location and size of the pixel output inside [`memory`].
    ///
    /// The reported length must equal `width * height * 3`.
    ///
    /// [`memory`]: ViewSource::memory
    fn output_region(&self) -> Region;

    /// Bumped whenever the output region may have moved.
    fn epoch(&self) -> u64;
}
