//! TUI Sand (workspace facade crate).
//!
//! This package keeps the `tui_sand::{core,driver,engine,input,term,types}`
//! public API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_sand_core as core;
pub use tui_sand_driver as driver;
pub use tui_sand_engine as engine;
pub use tui_sand_input as input;
pub use tui_sand_term as term;
pub use tui_sand_types as types;
