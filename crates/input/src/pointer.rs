//! Mouse event translation into stroke-context mutations.

use crossterm::event::{MouseEvent, MouseEventKind};

use tui_sand_core::{map_to_grid, StrokeContext};

/// How terminal cells map onto grid cells.
///
/// `origin` is the terminal position of grid cell (0, 0); events left or
/// above it map to negative grid coordinates, which downstream clipping
/// handles. `scale` is the display-units-per-cell factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapping {
    pub origin: (u16, u16),
    pub scale: f64,
}

impl PointerMapping {
    pub fn new(origin: (u16, u16), scale: f64) -> Self {
        Self { origin, scale }
    }

    /// Grid cell under a terminal position.
    pub fn to_grid(&self, column: u16, row: u16) -> (i32, i32) {
        map_to_grid(
            column as f64 - self.origin.0 as f64,
            row as f64 - self.origin.1 as f64,
            self.scale,
        )
    }
}

/// Fold one mouse event into the stroke context.
///
/// Presses (any button) start painting, releases end it, drags and moves
/// update the pointer position - plain last-write-wins assignments, nothing
/// else. A drag also re-asserts the paint flag: the terminal only reports
/// drags while a button is held.
pub fn apply_mouse_event(mapping: &PointerMapping, event: &MouseEvent, ctx: &mut StrokeContext) {
    match event.kind {
        MouseEventKind::Down(_) => {
            let (x, y) = mapping.to_grid(event.column, event.row);
            ctx.pointer_moved(x, y);
            ctx.press();
        }
        MouseEventKind::Drag(_) => {
            let (x, y) = mapping.to_grid(event.column, event.row);
            ctx.pointer_moved(x, y);
            ctx.press();
        }
        MouseEventKind::Moved => {
            let (x, y) = mapping.to_grid(event.column, event.row);
            ctx.pointer_moved(x, y);
        }
        MouseEventKind::Up(_) => {
            ctx.release();
        }
        _ => {}
    }
}
