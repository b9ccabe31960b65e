//! Brush expansion: one pointer cell into a clipped set of spawn targets.

use arrayvec::ArrayVec;
use tui_sand_types::{GridSize, BOTTOM_MARGIN, BRUSH_CAPACITY, BRUSH_RADIUS};

/// Bounded per-frame buffer of brush target cells.
///
/// Capacity covers a full stroke at [`BRUSH_RADIUS`]; a stroke never
/// allocates.
pub type BrushBuffer = ArrayVec<(u32, u32), BRUSH_CAPACITY>;

/// Iterate the brush neighborhood around a center cell.
///
/// Yields every `(x, y)` with offsets `-radius..=radius` in both axes
/// (an inclusive square, not a disc), clipped to `0 <= x < width` and
/// `0 <= y < height - BOTTOM_MARGIN`. The lower bound is deliberately
/// tighter than the grid: strokes stay off the bottom rows.
///
/// Order is row-major (top row first, left to right) and deterministic for
/// a given input. The iterator is finite and restartable; the center may lie
/// arbitrarily far outside the grid, in which case fewer (possibly zero)
/// cells are produced.
pub fn cells(
    center_x: i32,
    center_y: i32,
    radius: i32,
    size: GridSize,
) -> impl Iterator<Item = (u32, u32)> {
    let width = size.width;
    let max_y = size.height.saturating_sub(BOTTOM_MARGIN);
    (-radius..=radius).flat_map(move |dy| {
        (-radius..=radius).filter_map(move |dx| {
            let x = center_x + dx;
            let y = center_y + dy;
            if x >= 0 && (x as u32) < width && y >= 0 && (y as u32) < max_y {
                Some((x as u32, y as u32))
            } else {
                None
            }
        })
    })
}

/// Collect a brush stroke into a bounded buffer.
///
/// `radius` must not exceed [`BRUSH_RADIUS`]; the buffer capacity is sized
/// for exactly that worst case.
pub fn expand_into(buf: &mut BrushBuffer, center_x: i32, center_y: i32, radius: i32, size: GridSize) {
    debug_assert!(radius <= BRUSH_RADIUS);
    buf.clear();
    for cell in cells(center_x, center_y, radius, size) {
        let _ = buf.try_push(cell);
    }
}
