use std::collections::{BTreeSet, VecDeque};

use core::mapgen::PATH_LENGTH;
use core::{CellKind, GeneratedMap, MapGenerator, Pos};

fn generated_maps(seeds: std::ops::Range<u64>) -> Vec<(u64, GeneratedMap)> {
    let maps: Vec<_> = seeds
        .filter_map(|seed| MapGenerator::new(seed).generate().ok().map(|map| (seed, map)))
        .collect();
    assert!(!maps.is_empty(), "no seed in the range generated a map");
    maps
}

#[test]
fn corridors_have_exactly_the_required_length() {
    for (seed, map) in generated_maps(0..100) {
        assert_eq!(map.path.len(), PATH_LENGTH, "seed {seed}");
        let distinct: BTreeSet<Pos> = map.path.iter().copied().collect();
        assert_eq!(distinct.len(), PATH_LENGTH, "seed {seed} repeats a corridor cell");
    }
}

#[test]
fn endpoints_are_non_corner_edge_cells_in_distinct_rows_and_columns() {
    for (seed, map) in generated_maps(0..100) {
        let far = (map.size - 1) as i32;
        for tile in [map.entry, map.exit] {
            let on_edge = tile.y == 0 || tile.y == far || tile.x == 0 || tile.x == far;
            assert!(on_edge, "seed {seed}: {tile:?} not on the boundary");
            let corner = (tile.y == 0 || tile.y == far) && (tile.x == 0 || tile.x == far);
            assert!(!corner, "seed {seed}: {tile:?} sits on a corner");
        }
        assert_ne!(map.entry, map.exit, "seed {seed}");
        assert_ne!(map.entry.y, map.exit.y, "seed {seed}: endpoints share a row");
        assert_ne!(map.entry.x, map.exit.x, "seed {seed}: endpoints share a column");
    }
}

#[test]
fn no_three_by_three_window_is_entirely_wall() {
    for (seed, map) in generated_maps(0..100) {
        for window_y in 0..=(map.size - 3) as i32 {
            for window_x in 0..=(map.size - 3) as i32 {
                let mut all_wall = true;
                for dy in 0..3 {
                    for dx in 0..3 {
                        let pos = Pos { y: window_y + dy, x: window_x + dx };
                        if map.cell_at(pos) == CellKind::Path {
                            all_wall = false;
                        }
                    }
                }
                assert!(
                    !all_wall,
                    "seed {seed}: dead zone at window ({window_y}, {window_x})"
                );
            }
        }
    }
}

#[test]
fn no_two_by_two_window_is_entirely_path() {
    for (seed, map) in generated_maps(0..100) {
        for window_y in 0..=(map.size - 2) as i32 {
            for window_x in 0..=(map.size - 2) as i32 {
                let open = [(0, 0), (0, 1), (1, 0), (1, 1)].iter().all(|&(dy, dx)| {
                    map.cell_at(Pos { y: window_y + dy, x: window_x + dx }) == CellKind::Path
                });
                assert!(!open, "seed {seed}: open block at window ({window_y}, {window_x})");
            }
        }
    }
}

#[test]
fn corridor_cells_touch_at_most_two_other_corridor_cells() {
    for (seed, map) in generated_maps(0..100) {
        for cell in &map.path {
            let mut touching = 0;
            for neighbor in cell.cardinal_neighbors() {
                if map.in_bounds(neighbor) && map.cell_at(neighbor) == CellKind::Path {
                    touching += 1;
                }
            }
            assert!(touching <= 2, "seed {seed}: {cell:?} touches {touching} corridor cells");
        }
    }
}

#[test]
fn the_corridor_is_walkable_from_entry_to_exit() {
    for (seed, map) in generated_maps(0..100) {
        assert!(
            has_walkable_route(&map, map.entry, map.exit),
            "seed {seed}: no walkable route from entry to exit"
        );
    }
}

#[test]
fn walkable_cells_match_the_corridor_exactly() {
    for (seed, map) in generated_maps(0..100) {
        let corridor: BTreeSet<Pos> = map.path.iter().copied().collect();
        for y in 0..map.size as i32 {
            for x in 0..map.size as i32 {
                let pos = Pos { y, x };
                let expected =
                    if corridor.contains(&pos) { CellKind::Path } else { CellKind::Wall };
                assert_eq!(map.cell_at(pos), expected, "seed {seed}: cell {pos:?}");
            }
        }
    }
}

fn has_walkable_route(map: &GeneratedMap, start: Pos, goal: Pos) -> bool {
    if start == goal {
        return true;
    }

    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);

    while let Some(pos) = open.pop_front() {
        for next in pos.cardinal_neighbors() {
            if seen.contains(&next) || map.cell_at(next) != CellKind::Path {
                continue;
            }
            if next == goal {
                return true;
            }
            seen.insert(next);
            open.push_back(next);
        }
    }

    false
}
