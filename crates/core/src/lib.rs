pub mod buffs;
pub mod content;
pub mod journal;
pub mod journal_file;
pub mod mapgen;
pub mod session;
pub mod status;
pub mod towers;
pub mod types;
pub mod waves;

pub use buffs::{BuffAggregator, BuffEffect, EffectKind, FinalStats, StatKind, TowerBuffSnapshot};
pub use journal::{EffectJournal, EffectRecord, replay_session};
pub use mapgen::{GeneratedMap, MapGenError, MapGenerator, generate_map, generate_runtime_seed};
pub use session::Session;
pub use towers::{PlacedTower, TowerRegistry};
pub use types::*;
