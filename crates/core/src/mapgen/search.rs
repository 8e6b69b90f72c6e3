//! Depth-first backtracking corridor search with distance-ordered expansion.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::Pos;

use super::edge::access_cell;
use super::grid::{in_bounds, index, is_interior};

pub(super) struct SearchParams {
    pub size: usize,
    pub path_length: usize,
    pub entry: Pos,
    pub exit: Pos,
}

pub(super) enum SearchResult {
    /// Complete corridor from entry to exit inclusive, in walk order.
    Found(Vec<Pos>),
    /// The pair admits no corridor under any expansion order.
    NoCorridor,
    /// The node budget ran out before the search completed.
    BudgetExhausted,
}

/// Rejects endpoint pairs that can never carry a corridor of the required
/// length, before any search runs:
/// - the walk from the entry access cell to the exit access cell takes a
///   fixed number of steps, so their Manhattan distance must match its
///   parity;
/// - adjacent (or identical) access cells would force the exit access cell
///   to gain a second path-neighbor, which the carving rule forbids.
pub(super) fn pair_supports_corridor(params: &SearchParams) -> bool {
    let entry_access = access_cell(params.size, params.entry);
    let exit_access = access_cell(params.size, params.exit);
    let steps = (params.path_length - 3) as u32;
    let distance = entry_access.manhattan(exit_access);
    distance >= 2 && distance <= steps && distance % 2 == steps % 2
}

enum Step {
    Done,
    Dead,
    OutOfBudget,
}

struct Dfs<'a> {
    size: usize,
    path_length: usize,
    exit: Pos,
    exit_access: Pos,
    visited: Vec<bool>,
    path: Vec<Pos>,
    nodes_left: u64,
    tie_rng: &'a mut ChaCha8Rng,
}

/// Runs one full backtracking search. Neighbor expansion is ordered by
/// ascending squared distance to the exit tile; equal distances are ordered
/// by draws from `tie_rng`, which is the only variation between repeat
/// attempts on the same endpoint pair.
pub(super) fn find_corridor(
    params: &SearchParams,
    tie_rng: &mut ChaCha8Rng,
    node_budget: u64,
) -> SearchResult {
    let mut dfs = Dfs {
        size: params.size,
        path_length: params.path_length,
        exit: params.exit,
        exit_access: access_cell(params.size, params.exit),
        visited: vec![false; params.size * params.size],
        path: vec![params.entry],
        nodes_left: node_budget,
        tie_rng,
    };
    dfs.visited[index(params.size, params.entry)] = true;

    match dfs.extend(params.entry) {
        Step::Done => {
            let mut path = dfs.path;
            path.push(params.exit);
            SearchResult::Found(path)
        }
        Step::Dead => SearchResult::NoCorridor,
        Step::OutOfBudget => SearchResult::BudgetExhausted,
    }
}

impl Dfs<'_> {
    fn extend(&mut self, current: Pos) -> Step {
        if self.path.len() == self.path_length - 1 {
            return if current == self.exit_access { Step::Done } else { Step::Dead };
        }
        if self.nodes_left == 0 {
            return Step::OutOfBudget;
        }
        self.nodes_left -= 1;

        let mut ranked: Vec<(u64, u32, Pos)> = Vec::with_capacity(4);
        for next in current.cardinal_neighbors() {
            if self.admissible(next) {
                ranked.push((squared_distance(next, self.exit), self.tie_rng.next_u32(), next));
            }
        }
        ranked.sort_unstable();

        for (_, _, next) in ranked {
            self.path.push(next);
            self.visited[index(self.size, next)] = true;
            match self.extend(next) {
                Step::Done => return Step::Done,
                Step::OutOfBudget => return Step::OutOfBudget,
                Step::Dead => {
                    self.visited[index(self.size, next)] = false;
                    let _ = self.path.pop();
                }
            }
        }

        Step::Dead
    }

    fn admissible(&self, next: Pos) -> bool {
        if !is_interior(self.size, next) || self.visited[index(self.size, next)] {
            return false;
        }
        // The carving rule: a cell may join the corridor only while it
        // touches at most one corridor cell, which keeps the corridor from
        // running alongside itself (no 2x2 open block can ever form).
        if self.path_neighbor_count(next) > 1 {
            return false;
        }
        // The exit access cell must be the final interior cell, and it must
        // end with exactly one corridor neighbor (its predecessor), so at
        // most one of its neighbors may ever be carved.
        let len_after = self.path.len() + 1;
        if next == self.exit_access {
            if len_after != self.path_length - 1 {
                return false;
            }
        } else if next.manhattan(self.exit_access) == 1
            && self.path_neighbor_count(self.exit_access) >= 1
        {
            return false;
        }
        self.can_still_finish(next, len_after)
    }

    /// Lower-bound reachability: from `next` the walk has a fixed number of
    /// steps left to land exactly on the exit access cell, so the Manhattan
    /// distance must fit within them and share their parity.
    fn can_still_finish(&self, next: Pos, len_after: usize) -> bool {
        let remaining = (self.path_length - 1 - len_after) as u32;
        let distance = next.manhattan(self.exit_access);
        distance <= remaining && distance % 2 == remaining % 2
    }

    fn path_neighbor_count(&self, pos: Pos) -> u32 {
        let mut count = 0;
        for neighbor in pos.cardinal_neighbors() {
            if in_bounds(self.size, neighbor) && self.visited[index(self.size, neighbor)] {
                count += 1;
            }
        }
        count
    }
}

fn squared_distance(from: Pos, to: Pos) -> u64 {
    let dx = (from.x - to.x) as i64;
    let dy = (from.y - to.y) as i64;
    (dx * dx + dy * dy) as u64
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn params(entry: Pos, exit: Pos) -> SearchParams {
        SearchParams { size: 8, path_length: 22, entry, exit }
    }

    #[test]
    fn found_corridor_runs_from_entry_to_exit_at_full_length() {
        let params = params(Pos { y: 0, x: 2 }, Pos { y: 5, x: 0 });
        assert!(pair_supports_corridor(&params));

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        match find_corridor(&params, &mut rng, 500_000) {
            SearchResult::Found(path) => {
                assert_eq!(path.len(), 22);
                assert_eq!(path[0], params.entry);
                assert_eq!(*path.last().expect("non-empty"), params.exit);
                for pair in path.windows(2) {
                    assert_eq!(pair[0].manhattan(pair[1]), 1, "corridor must be contiguous");
                }
            }
            SearchResult::NoCorridor => panic!("pair should admit a corridor"),
            SearchResult::BudgetExhausted => panic!("budget should be ample for one search"),
        }
    }

    #[test]
    fn adjacent_access_cells_are_rejected_up_front() {
        // Entry on the top edge at x=1 and exit on the left edge at y=2 put
        // their access cells side by side.
        let params = params(Pos { y: 0, x: 1 }, Pos { y: 2, x: 0 });
        assert!(!pair_supports_corridor(&params));
    }

    #[test]
    fn shared_access_cell_is_rejected_up_front() {
        // Entry (0,1) and exit (1,0) both enter the interior through (1,1).
        let params = params(Pos { y: 0, x: 1 }, Pos { y: 1, x: 0 });
        assert!(!pair_supports_corridor(&params));
    }

    #[test]
    fn corridor_never_touches_itself() {
        let params = params(Pos { y: 0, x: 3 }, Pos { y: 5, x: 7 });
        if !pair_supports_corridor(&params) {
            return;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        if let SearchResult::Found(path) = find_corridor(&params, &mut rng, 500_000) {
            for (position, cell) in path.iter().enumerate() {
                let mut in_path_neighbors = 0;
                for neighbor in cell.cardinal_neighbors() {
                    if path.contains(&neighbor) {
                        in_path_neighbors += 1;
                    }
                }
                assert!(
                    in_path_neighbors <= 2,
                    "cell #{position} {cell:?} touches {in_path_neighbors} corridor cells"
                );
            }
        }
    }
}
