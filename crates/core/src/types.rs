use slotmap::new_key_type;

use serde::{Deserialize, Serialize};

new_key_type! {
    pub struct TowerKey;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn cardinal_neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKind {
    Wall,
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TowerClass {
    Moon,
    Steel,
    Ember,
    Tide,
    Gale,
    Terra,
    Sun,
    Gloom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusEffectKind {
    Slow,
    Stun,
    Burn,
    Rot,
    Paralyze,
    Fear,
    Bleed,
}

impl StatusEffectKind {
    /// Kinds whose potency is dealt as damage on every tick while active.
    pub fn deals_tick_damage(self) -> bool {
        matches!(self, Self::Burn | Self::Rot | Self::Bleed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds,
    NotBuildable,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalError {
    MissingTower,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LogEvent {
    TowerPlaced { key: TowerKey, class: TowerClass, pos: Pos },
    TowerRemoved { key: TowerKey, pos: Pos },
    EffectApplied { revision: u64 },
    WaveStarted { wave_number: u32 },
    EnemySpawned { wave_number: u32, pos: Pos },
}
