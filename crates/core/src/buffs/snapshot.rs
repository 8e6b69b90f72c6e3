//! Cached, fully-resolved buff state for one (tower class, element) pairing.

use std::collections::BTreeMap;

use crate::types::StatusEffectKind;

use super::effect::{BuffEffect, EffectKind, StatKind, StatusField, UniqueEffect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusEffectModifier {
    pub damage_mult: f32,
    pub potency_mult: f32,
    pub potency_flat: f32,
    pub duration_bonus_ticks: f32,
}

impl Default for StatusEffectModifier {
    fn default() -> Self {
        Self { damage_mult: 1.0, potency_mult: 1.0, potency_flat: 0.0, duration_bonus_ticks: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TowerBuffSnapshot {
    pub damage_mult: f32,
    pub attack_speed_mult: f32,
    pub range_mult: f32,
    /// Absolute crit-chance percentage points added to the base.
    pub crit_bonus: f32,
    /// Fixed range that wins over the multiplied range when positive;
    /// [`Self::RANGE_OVERRIDE_UNUSED`] otherwise.
    pub range_override: f32,
    pub status: BTreeMap<StatusEffectKind, StatusEffectModifier>,
    /// Active unique effects with their accumulated values.
    pub uniques: BTreeMap<UniqueEffect, f32>,
}

impl Default for TowerBuffSnapshot {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TowerBuffSnapshot {
    pub const RANGE_OVERRIDE_UNUSED: f32 = -1.0;

    pub fn neutral() -> Self {
        Self {
            damage_mult: 1.0,
            attack_speed_mult: 1.0,
            range_mult: 1.0,
            crit_bonus: 0.0,
            range_override: Self::RANGE_OVERRIDE_UNUSED,
            status: BTreeMap::new(),
            uniques: BTreeMap::new(),
        }
    }

    pub fn status_modifier(&self, kind: StatusEffectKind) -> StatusEffectModifier {
        self.status.get(&kind).copied().unwrap_or_default()
    }

    pub fn has_unique(&self, unique: UniqueEffect) -> bool {
        self.uniques.contains_key(&unique)
    }

    pub fn unique_value(&self, unique: UniqueEffect) -> Option<f32> {
        self.uniques.get(&unique).copied()
    }

    /// Folds one effect into the snapshot. Percent values add onto the
    /// multiplier, so two +20% effects yield x1.40 rather than x1.44 —
    /// balance depends on that, never compound here.
    pub(super) fn absorb(&mut self, effect: &BuffEffect) {
        match effect.kind {
            EffectKind::StatPercent(StatKind::Damage) => {
                self.damage_mult += effect.value / 100.0;
            }
            EffectKind::StatPercent(StatKind::AttackSpeed) => {
                self.attack_speed_mult += effect.value / 100.0;
            }
            EffectKind::StatPercent(StatKind::Range) => {
                self.range_mult += effect.value / 100.0;
            }
            EffectKind::CritChance => {
                self.crit_bonus += effect.value;
            }
            EffectKind::RangeOverride => {
                if effect.value > 0.0 {
                    self.range_override = effect.value;
                }
            }
            EffectKind::StatusTuning(field) => match effect.target_status {
                Some(kind) => self.tune_status(kind, field, effect.value),
                // Untargeted tuning reaches every status kind.
                None => {
                    for kind in ALL_STATUS_KINDS {
                        self.tune_status(kind, field, effect.value);
                    }
                }
            },
            EffectKind::Unique(unique) => {
                *self.uniques.entry(unique).or_insert(0.0) += effect.value;
            }
            // Count-based effects live in the aggregator's rule list, not in
            // per-key snapshots.
            EffectKind::PerTowerCount(_) => {}
        }
    }

    fn tune_status(&mut self, kind: StatusEffectKind, field: StatusField, value: f32) {
        let modifier = self.status.entry(kind).or_default();
        match field {
            StatusField::DamagePercent => modifier.damage_mult += value / 100.0,
            StatusField::PotencyPercent => modifier.potency_mult += value / 100.0,
            StatusField::PotencyFlat => modifier.potency_flat += value,
            StatusField::DurationTicks => modifier.duration_bonus_ticks += value,
        }
    }
}

const ALL_STATUS_KINDS: [StatusEffectKind; 7] = [
    StatusEffectKind::Slow,
    StatusEffectKind::Stun,
    StatusEffectKind::Burn,
    StatusEffectKind::Rot,
    StatusEffectKind::Paralyze,
    StatusEffectKind::Fear,
    StatusEffectKind::Bleed,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_snapshot_has_identity_multipliers_and_unused_override() {
        let snapshot = TowerBuffSnapshot::neutral();
        assert_eq!(snapshot.damage_mult, 1.0);
        assert_eq!(snapshot.attack_speed_mult, 1.0);
        assert_eq!(snapshot.range_mult, 1.0);
        assert_eq!(snapshot.crit_bonus, 0.0);
        assert_eq!(snapshot.range_override, TowerBuffSnapshot::RANGE_OVERRIDE_UNUSED);
        assert!(snapshot.status.is_empty());
        assert!(snapshot.uniques.is_empty());
    }

    #[test]
    fn percent_effects_add_instead_of_compounding() {
        let mut snapshot = TowerBuffSnapshot::neutral();
        let boost = BuffEffect::global(EffectKind::StatPercent(StatKind::Damage), 20.0);
        snapshot.absorb(&boost);
        snapshot.absorb(&boost);
        assert!((snapshot.damage_mult - 1.40).abs() < 1e-6);
    }

    #[test]
    fn targeted_status_tuning_touches_only_its_kind() {
        let mut snapshot = TowerBuffSnapshot::neutral();
        snapshot.absorb(&BuffEffect::for_status(
            StatusEffectKind::Burn,
            StatusField::PotencyFlat,
            2.0,
        ));

        assert_eq!(snapshot.status_modifier(StatusEffectKind::Burn).potency_flat, 2.0);
        assert_eq!(snapshot.status_modifier(StatusEffectKind::Slow).potency_flat, 0.0);
    }

    #[test]
    fn untargeted_status_tuning_reaches_every_kind() {
        let mut snapshot = TowerBuffSnapshot::neutral();
        snapshot.absorb(&BuffEffect::global(
            EffectKind::StatusTuning(StatusField::DurationTicks),
            5.0,
        ));

        for kind in ALL_STATUS_KINDS {
            assert_eq!(snapshot.status_modifier(kind).duration_bonus_ticks, 5.0, "{kind:?}");
        }
    }

    #[test]
    fn repeated_unique_effects_accumulate_their_values() {
        let mut snapshot = TowerBuffSnapshot::neutral();
        let resonance =
            BuffEffect::global(EffectKind::Unique(UniqueEffect::LunarSteelResonance), 25.0);
        snapshot.absorb(&resonance);
        snapshot.absorb(&resonance);

        assert_eq!(snapshot.unique_value(UniqueEffect::LunarSteelResonance), Some(50.0));
    }
}
