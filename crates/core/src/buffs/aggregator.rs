//! The buff aggregator: accepts effect records and answers per-tower stat
//! queries, layering global, tower-scoped, element-scoped, and count-based
//! modifiers.

use std::collections::HashMap;

use crate::content::{RESONANCE_PAIR, tower_spec};
use crate::towers::{PlacedTower, TowerRegistry};
use crate::types::{Element, TowerClass};

use super::effect::{BuffEffect, EffectKind, StatKind, UniqueEffect};
use super::snapshot::TowerBuffSnapshot;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalStats {
    pub damage: f32,
    pub attack_speed: f32,
    pub range: f32,
    pub crit_chance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CountRule {
    beneficiary: Option<TowerClass>,
    stat: StatKind,
    counted_element: Option<Element>,
    value_per_tower: f32,
}

#[derive(Default)]
pub struct BuffAggregator {
    effects: Vec<BuffEffect>,
    count_rules: Vec<CountRule>,
    cache: HashMap<(TowerClass, Element), TowerBuffSnapshot>,
    revision: u64,
}

impl BuffAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts one effect record. The entire snapshot cache is dropped —
    /// not just the touched key — so no query can ever observe a stale
    /// snapshot, and the revision counter moves so dependent systems can
    /// tell that effects changed.
    pub fn apply_effect(&mut self, effect: BuffEffect) {
        match effect.kind {
            EffectKind::PerTowerCount(stat) => self.count_rules.push(CountRule {
                beneficiary: effect.target_tower,
                stat,
                counted_element: effect.target_element,
                value_per_tower: effect.value,
            }),
            _ => self.effects.push(effect),
        }
        self.cache.clear();
        self.revision += 1;
    }

    /// Monotonic while the session lives; bumps on every applied effect.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len() + self.count_rules.len()
    }

    /// New-game reset: forgets every accumulated effect and rule.
    pub fn reset(&mut self) {
        self.effects.clear();
        self.count_rules.clear();
        self.cache.clear();
        self.revision = 0;
    }

    pub fn tower_buffs(&mut self, class: TowerClass, element: Element) -> TowerBuffSnapshot {
        if let Some(hit) = self.cache.get(&(class, element)) {
            return hit.clone();
        }
        let snapshot = self.compute_snapshot(class, element);
        self.cache.insert((class, element), snapshot.clone());
        snapshot
    }

    /// Layering order is fixed: global effects, then tower-scoped, then
    /// element-scoped. Scoped effects that also name an element only land on
    /// towers of that element.
    fn compute_snapshot(&self, class: TowerClass, element: Element) -> TowerBuffSnapshot {
        let mut snapshot = TowerBuffSnapshot::neutral();
        for effect in &self.effects {
            if effect.target_tower.is_none() && effect.target_element.is_none() {
                snapshot.absorb(effect);
            }
        }
        for effect in &self.effects {
            let element_compatible =
                effect.target_element.is_none() || effect.target_element == Some(element);
            if effect.target_tower == Some(class) && element_compatible {
                snapshot.absorb(effect);
            }
        }
        for effect in &self.effects {
            if effect.target_element == Some(element) && effect.target_tower.is_none() {
                snapshot.absorb(effect);
            }
        }
        snapshot
    }

    /// Sums `value_per_tower x live count` over the rules that apply to
    /// `class`. A rule counts towers of its target element when it names
    /// one; otherwise it counts the beneficiary class itself. Unmatched
    /// rules contribute nothing.
    pub fn tower_count_buff(
        &self,
        class: TowerClass,
        stat: StatKind,
        towers: &TowerRegistry,
    ) -> f32 {
        let mut total = 0.0;
        for rule in &self.count_rules {
            if rule.stat != stat {
                continue;
            }
            if rule.beneficiary.is_some_and(|beneficiary| beneficiary != class) {
                continue;
            }
            let count = match rule.counted_element {
                Some(element) => towers.count_of_element(element),
                None => towers.count_of_class(rule.beneficiary.unwrap_or(class)),
            };
            total += rule.value_per_tower * count as f32;
        }
        total
    }

    /// Resolves the tower's effective stats: catalog base values scaled by
    /// the snapshot, count-based bonuses, the Moon/Steel resonance, and the
    /// excess-crit conversion.
    pub fn final_stats(&mut self, tower: &PlacedTower, towers: &TowerRegistry) -> FinalStats {
        let spec = tower_spec(tower.class);
        let snapshot = self.tower_buffs(tower.class, tower.element);

        let mut damage_mult = snapshot.damage_mult
            + self.tower_count_buff(tower.class, StatKind::Damage, towers)
            + resonance_bonus(&snapshot, tower.class, towers);
        let attack_speed_mult = snapshot.attack_speed_mult
            + self.tower_count_buff(tower.class, StatKind::AttackSpeed, towers);
        let range_mult =
            snapshot.range_mult + self.tower_count_buff(tower.class, StatKind::Range, towers);

        let mut crit_chance = spec.crit_chance + snapshot.crit_bonus;
        if crit_chance > 100.0 {
            if snapshot.has_unique(UniqueEffect::Overcrit) {
                damage_mult *= 1.0 + (crit_chance - 100.0) / 100.0;
            }
            crit_chance = 100.0;
        }
        crit_chance = crit_chance.max(0.0);

        let range = if snapshot.range_override > 0.0 {
            snapshot.range_override
        } else {
            spec.range * range_mult
        };

        FinalStats {
            damage: spec.damage * damage_mult,
            attack_speed: spec.attack_speed * attack_speed_mult,
            range,
            crit_chance,
        }
    }
}

/// Moon and Steel boost each other by the resonance value per partner tower
/// currently placed; every other class is untouched.
fn resonance_bonus(snapshot: &TowerBuffSnapshot, class: TowerClass, towers: &TowerRegistry) -> f32 {
    let Some(value) = snapshot.unique_value(UniqueEffect::LunarSteelResonance) else {
        return 0.0;
    };
    let (lunar, steel) = RESONANCE_PAIR;
    let partner = if class == lunar {
        steel
    } else if class == steel {
        lunar
    } else {
        return 0.0;
    };
    towers.count_of_class(partner) as f32 * value / 100.0
}
