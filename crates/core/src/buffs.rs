//! Buff accumulation and per-tower stat resolution.

mod aggregator;
mod effect;
mod snapshot;

pub use aggregator::{BuffAggregator, FinalStats};
pub use effect::{BuffEffect, EffectKind, StatKind, StatusField, UniqueEffect};
pub use snapshot::{StatusEffectModifier, TowerBuffSnapshot};
