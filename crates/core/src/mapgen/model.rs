//! Public data model for generated corridor maps.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub size: usize,
    pub cells: Vec<CellKind>,
    pub path: Vec<Pos>,
    pub entry: Pos,
    pub exit: Pos,
}

impl GeneratedMap {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.size as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellKind::Wall => 0,
                CellKind::Path => 1,
            });
        }
        bytes.extend(self.entry.y.to_le_bytes());
        bytes.extend(self.entry.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());

        bytes.extend((self.path.len() as u32).to_le_bytes());
        for pos in &self.path {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }

        bytes
    }

    /// Stable fingerprint of the full map; two maps compare equal exactly
    /// when their fingerprint inputs do.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Out-of-bounds coordinates read as walls so callers never index past
    /// the grid.
    pub fn cell_at(&self, pos: Pos) -> CellKind {
        if pos.x < 0 || pos.y < 0 {
            return CellKind::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.size || y >= self.size {
            return CellKind::Wall;
        }
        self.cells[y * self.size + x]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }
}
