//! Key mapping from terminal events to viewer actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_sand_types::ParticleKind;

/// Discrete, non-pointer actions a key press can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// One spawn at the last-known pointer location, independent of painting.
    SpawnOnce,
    /// Change the particle kind carried by subsequent spawns.
    Select(ParticleKind),
    /// Switch between the pixel and text render paths.
    TogglePath,
}

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    match key.code {
        // Trigger control: one discrete spawn.
        KeyCode::Char(' ') => Some(ViewerAction::SpawnOnce),

        // Render path toggle.
        KeyCode::Char('t') | KeyCode::Char('T') => Some(ViewerAction::TogglePath),

        // Kind selection by wire code; '0' selects the eraser.
        KeyCode::Char(c @ '0'..='5') => {
            ParticleKind::from_code(c as u8 - b'0').map(ViewerAction::Select)
        }

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
