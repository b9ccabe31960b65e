//! Input translation for the sand viewer.
//!
//! Terminal events become either discrete viewer actions (quit, kind
//! selection, the single-spawn trigger) or stroke-context mutations (pointer
//! position, paint flag). Handlers here have no side effects beyond the
//! context they are handed; the frame driver reads that context once per
//! frame.

pub mod map;
pub mod pointer;

pub use map::{handle_key_event, should_quit, ViewerAction};
pub use pointer::{apply_mouse_event, PointerMapping};
