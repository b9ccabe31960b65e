//! Core interaction logic for the sand viewer.
//!
//! Everything in this crate is pure and synchronous: display-to-grid
//! coordinate mapping, brush expansion, and the small amount of pointer state
//! the frame driver reads once per frame. No I/O, no engine calls, no
//! terminal types - that keeps the whole pointer-to-spawn pipeline
//! unit-testable.

pub mod brush;
pub mod context;
pub mod drag;
pub mod mapper;

pub use brush::{expand_into, BrushBuffer};
pub use context::StrokeContext;
pub use drag::{DragTracker, PaintState};
pub use mapper::map_to_grid;
