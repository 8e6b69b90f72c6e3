//! Grid-space primitives shared by the corridor search and the generator.

use crate::types::{CellKind, Pos};

pub(super) fn in_bounds(size: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < size && (pos.y as usize) < size
}

/// Interior excludes the one-cell boundary ring; only interior cells may be
/// carved by the corridor search.
pub(super) fn is_interior(size: usize, pos: Pos) -> bool {
    pos.x >= 1
        && pos.y >= 1
        && (pos.x as usize) < size - 1
        && (pos.y as usize) < size - 1
}

pub(super) fn index(size: usize, pos: Pos) -> usize {
    (pos.y as usize) * size + (pos.x as usize)
}

pub(super) fn rasterize(size: usize, path: &[Pos]) -> Vec<CellKind> {
    let mut cells = vec![CellKind::Wall; size * size];
    for pos in path {
        cells[index(size, *pos)] = CellKind::Path;
    }
    cells
}

/// A 3x3 all-wall window is a dead zone: towers built there could never
/// reach the corridor.
pub(super) fn has_dead_zone(cells: &[CellKind], size: usize) -> bool {
    for window_y in 0..=(size - 3) {
        for window_x in 0..=(size - 3) {
            let mut all_wall = true;
            'window: for dy in 0..3 {
                for dx in 0..3 {
                    if cells[(window_y + dy) * size + (window_x + dx)] == CellKind::Path {
                        all_wall = false;
                        break 'window;
                    }
                }
            }
            if all_wall {
                return true;
            }
        }
    }
    false
}

/// A 2x2 all-path window means the corridor runs alongside itself, which
/// breaks single-file movement.
pub(crate) fn has_open_block(cells: &[CellKind], size: usize) -> bool {
    for window_y in 0..=(size - 2) {
        for window_x in 0..=(size - 2) {
            let open = cells[window_y * size + window_x] == CellKind::Path
                && cells[window_y * size + window_x + 1] == CellKind::Path
                && cells[(window_y + 1) * size + window_x] == CellKind::Path
                && cells[(window_y + 1) * size + window_x + 1] == CellKind::Path;
            if open {
                return true;
            }
        }
    }
    false
}
