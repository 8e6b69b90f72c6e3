//! Effect records produced by meta-progression choices.
//!
//! The producer resolves stack levels into final numeric values before
//! building a record; the aggregator only ever sees those values, once per
//! player choice.

use serde::{Deserialize, Serialize};

use crate::types::{Element, StatusEffectKind, TowerClass};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKind {
    Damage,
    AttackSpeed,
    Range,
}

/// Which accumulator of a status-effect modifier a tuning effect adjusts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusField {
    DamagePercent,
    PotencyPercent,
    PotencyFlat,
    DurationTicks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UniqueEffect {
    /// Moon and Steel towers amplify each other while this is active; the
    /// effect value is the percent gained per partner tower.
    LunarSteelResonance,
    /// Crit chance past 100 converts into bonus damage instead of being
    /// wasted.
    Overcrit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Whole-number percent added to a stat multiplier (20 means +20%).
    StatPercent(StatKind),
    /// Absolute crit-chance percentage points.
    CritChance,
    /// Absolute range that supersedes the range multiplier when positive.
    RangeOverride,
    /// Value gained per currently-placed matching tower; the value is a
    /// fractional multiplier increment, not a percent.
    PerTowerCount(StatKind),
    /// Adjusts one field of the per-status modifier table.
    StatusTuning(StatusField),
    Unique(UniqueEffect),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuffEffect {
    pub kind: EffectKind,
    pub target_element: Option<Element>,
    pub target_tower: Option<TowerClass>,
    pub target_status: Option<StatusEffectKind>,
    pub value: f32,
}

impl BuffEffect {
    pub fn global(kind: EffectKind, value: f32) -> Self {
        Self { kind, target_element: None, target_tower: None, target_status: None, value }
    }

    pub fn for_tower(class: TowerClass, kind: EffectKind, value: f32) -> Self {
        Self { target_tower: Some(class), ..Self::global(kind, value) }
    }

    pub fn for_element(element: Element, kind: EffectKind, value: f32) -> Self {
        Self { target_element: Some(element), ..Self::global(kind, value) }
    }

    pub fn for_status(status: StatusEffectKind, field: StatusField, value: f32) -> Self {
        Self {
            target_status: Some(status),
            ..Self::global(EffectKind::StatusTuning(field), value)
        }
    }
}
