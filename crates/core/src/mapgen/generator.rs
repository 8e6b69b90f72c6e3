//! Map generation orchestration: endpoint draws, bounded search attempts,
//! dead-zone rejection.

use std::fmt;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::edge::draw_endpoint_pair;
use super::grid::{has_dead_zone, has_open_block, rasterize};
use super::model::GeneratedMap;
use super::search::{SearchParams, SearchResult, find_corridor, pair_supports_corridor};
use super::seed::mix_seed_stream;

pub const GRID_SIZE: usize = 8;
pub const PATH_LENGTH: usize = 22;

/// Endpoint pairs tried before generation gives up.
const PAIR_ATTEMPTS: u64 = 10;
/// Corridor candidates examined per endpoint pair. Each search attempt uses
/// its own tie-break stream, so repeat attempts explore genuinely different
/// corridors.
const SEARCH_ATTEMPTS: u64 = 20;
/// Caps backtracking work for a single search so unlucky endpoint pairs
/// stay cheap.
const NODE_BUDGET: u64 = 200_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapGenError {
    Exhausted { pairs_tried: u64, corridors_rejected: u64 },
}

impl fmt::Display for MapGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { pairs_tried, corridors_rejected } => write!(
                f,
                "no valid map after {pairs_tried} endpoint pairs \
                 ({corridors_rejected} corridors rejected)"
            ),
        }
    }
}

impl std::error::Error for MapGenError {}

pub struct MapGenerator {
    seed: u64,
    size: usize,
    path_length: usize,
}

impl MapGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed, size: GRID_SIZE, path_length: PATH_LENGTH }
    }

    /// Produces a grid whose only walkable cells form a single corridor of
    /// exactly `PATH_LENGTH` cells between two edge tiles, or an explicit
    /// error once the bounded attempts run out. Callers must not treat the
    /// error as an empty map.
    pub fn generate(&self) -> Result<GeneratedMap, MapGenError> {
        let mut edge_rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut corridors_rejected = 0_u64;

        for pair_attempt in 0..PAIR_ATTEMPTS {
            let Some((entry, exit)) = draw_endpoint_pair(&mut edge_rng, self.size) else {
                continue;
            };
            let params =
                SearchParams { size: self.size, path_length: self.path_length, entry, exit };
            if !pair_supports_corridor(&params) {
                continue;
            }

            for search_attempt in 0..SEARCH_ATTEMPTS {
                let stream = pair_attempt * SEARCH_ATTEMPTS + search_attempt;
                let mut tie_rng = ChaCha8Rng::seed_from_u64(mix_seed_stream(self.seed, stream));

                match find_corridor(&params, &mut tie_rng, NODE_BUDGET) {
                    SearchResult::Found(path) => {
                        let cells = rasterize(self.size, &path);
                        if has_dead_zone(&cells, self.size) {
                            corridors_rejected += 1;
                            continue;
                        }
                        debug_assert!(!has_open_block(&cells, self.size));
                        return Ok(GeneratedMap { size: self.size, cells, path, entry, exit });
                    }
                    // No corridor exists for this pair under any ordering.
                    SearchResult::NoCorridor => break,
                    // A different tie-break stream may finish within budget.
                    SearchResult::BudgetExhausted => continue,
                }
            }
        }

        Err(MapGenError::Exhausted { pairs_tried: PAIR_ATTEMPTS, corridors_rejected })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::types::{CellKind, Pos};

    use super::*;

    #[test]
    fn same_seed_produces_byte_identical_maps() {
        let a = MapGenerator::new(123_456).generate();
        let b = MapGenerator::new(123_456).generate();
        assert_eq!(a, b);
        if let Ok(map) = a {
            assert_eq!(
                map.canonical_bytes(),
                b.expect("second run matched the first").canonical_bytes()
            );
        }
    }

    #[test]
    fn generated_corridor_has_exactly_path_length_cells() {
        for seed in 0..32_u64 {
            if let Ok(map) = MapGenerator::new(seed).generate() {
                assert_eq!(map.path.len(), PATH_LENGTH, "seed {seed}");
                let distinct: BTreeSet<Pos> = map.path.iter().copied().collect();
                assert_eq!(distinct.len(), PATH_LENGTH, "seed {seed} revisits a cell");
            }
        }
    }

    #[test]
    fn most_seeds_generate_successfully() {
        let successes = (0..64_u64)
            .filter(|&seed| MapGenerator::new(seed).generate().is_ok())
            .count();
        assert!(successes >= 40, "only {successes}/64 seeds produced a map");
    }

    #[test]
    fn grid_marks_exactly_the_corridor_as_walkable() {
        let map = (0..16_u64)
            .find_map(|seed| MapGenerator::new(seed).generate().ok())
            .expect("some seed in 0..16 should generate");
        let path: BTreeSet<Pos> = map.path.iter().copied().collect();
        for y in 0..map.size as i32 {
            for x in 0..map.size as i32 {
                let pos = Pos { y, x };
                let expected =
                    if path.contains(&pos) { CellKind::Path } else { CellKind::Wall };
                assert_eq!(map.cell_at(pos), expected, "cell {pos:?}");
            }
        }
    }

    #[test]
    fn endpoints_share_neither_row_nor_column() {
        for seed in 0..32_u64 {
            if let Ok(map) = MapGenerator::new(seed).generate() {
                assert_ne!(map.entry, map.exit, "seed {seed}");
                assert_ne!(map.entry.y, map.exit.y, "seed {seed}");
                assert_ne!(map.entry.x, map.exit.x, "seed {seed}");
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_maps_uphold_every_corridor_invariant(seed in any::<u64>()) {
            let Ok(map) = MapGenerator::new(seed).generate() else {
                // Bounded attempts may legitimately exhaust for rare seeds.
                return Ok(());
            };

            prop_assert_eq!(map.path.len(), PATH_LENGTH);
            prop_assert_eq!(map.path[0], map.entry);
            prop_assert_eq!(*map.path.last().expect("non-empty"), map.exit);
            for pair in map.path.windows(2) {
                prop_assert_eq!(pair[0].manhattan(pair[1]), 1);
            }

            prop_assert!(!has_dead_zone(&map.cells, map.size), "3x3 dead zone in seed {}", seed);
            prop_assert!(!has_open_block(&map.cells, map.size), "2x2 open block in seed {}", seed);

            // Interior corridor cells touch at most their predecessor and
            // successor.
            for cell in &map.path {
                let mut touching = 0;
                for neighbor in cell.cardinal_neighbors() {
                    if map.in_bounds(neighbor) && map.cell_at(neighbor) == CellKind::Path {
                        touching += 1;
                    }
                }
                prop_assert!(touching <= 2, "cell {:?} touches {} corridor cells", cell, touching);
            }
        }
    }
}
