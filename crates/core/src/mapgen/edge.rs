//! Entry/exit tile selection on the grid's edge strips.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::Pos;

/// Pair draws are cheap and rejection is rare (only aligned or identical
/// pairs are thrown away), so this bound is never reached in practice.
const PAIR_DRAW_ATTEMPTS: u32 = 64;

/// Picks a boundary cell on one of the four edge strips, offset 1..=size-2
/// from the corners. Corners are never eligible entrances.
pub(super) fn draw_edge_tile(rng: &mut ChaCha8Rng, size: usize) -> Pos {
    let side = rng.next_u32() % 4;
    let offset = 1 + (rng.next_u32() as usize % (size - 2));
    let far = (size - 1) as i32;
    match side {
        0 => Pos { y: 0, x: offset as i32 },
        1 => Pos { y: offset as i32, x: far },
        2 => Pos { y: far, x: offset as i32 },
        _ => Pos { y: offset as i32, x: 0 },
    }
}

/// The unique interior cell cardinally adjacent to an edge tile. The
/// corridor always enters/leaves the interior through this cell.
pub(super) fn access_cell(size: usize, tile: Pos) -> Pos {
    let far = (size - 1) as i32;
    if tile.y == 0 {
        Pos { y: 1, x: tile.x }
    } else if tile.y == far {
        Pos { y: far - 1, x: tile.x }
    } else if tile.x == 0 {
        Pos { y: tile.y, x: 1 }
    } else {
        Pos { y: tile.y, x: far - 1 }
    }
}

fn pair_is_valid(entry: Pos, exit: Pos) -> bool {
    entry != exit && entry.y != exit.y && entry.x != exit.x
}

/// Draws entry and exit tiles independently, rejecting pairs that are
/// identical or share a row or column.
pub(super) fn draw_endpoint_pair(rng: &mut ChaCha8Rng, size: usize) -> Option<(Pos, Pos)> {
    for _ in 0..PAIR_DRAW_ATTEMPTS {
        let entry = draw_edge_tile(rng, size);
        let exit = draw_edge_tile(rng, size);
        if pair_is_valid(entry, exit) {
            return Some((entry, exit));
        }
    }
    None
}
