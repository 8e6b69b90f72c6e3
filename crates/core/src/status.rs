//! Discrete-tick status effects. Durations are countdown-remaining fields
//! advanced once per simulation tick by the session; there is no timer or
//! suspension machinery.

use crate::buffs::TowerBuffSnapshot;
use crate::content::TowerSpec;
use crate::types::StatusEffectKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveStatus {
    pub kind: StatusEffectKind,
    pub potency: f32,
    /// Damage multiplier captured from the inflicting tower's snapshot, so
    /// later buff changes do not retroactively rescale a running effect.
    pub damage_scale: f32,
    pub remaining_ticks: u32,
}

/// Builds an active status from base values and the inflicting tower's buff
/// snapshot: potency is scaled then shifted, duration is extended by the
/// flat bonus.
pub fn inflict(
    kind: StatusEffectKind,
    base_potency: f32,
    base_duration_ticks: u32,
    snapshot: &TowerBuffSnapshot,
) -> ActiveStatus {
    let modifier = snapshot.status_modifier(kind);
    let potency = base_potency * modifier.potency_mult + modifier.potency_flat;
    let duration = (base_duration_ticks as f32 + modifier.duration_bonus_ticks).max(0.0) as u32;
    ActiveStatus { kind, potency, damage_scale: modifier.damage_mult, remaining_ticks: duration }
}

/// Builds the active status a tower's innate effect applies on hit, if the
/// tower has one.
pub fn inflict_innate(spec: &TowerSpec, snapshot: &TowerBuffSnapshot) -> Option<ActiveStatus> {
    spec.innate_status
        .as_ref()
        .map(|innate| inflict(innate.kind, innate.potency, innate.duration_ticks, snapshot))
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatusTickEvent {
    Damage { kind: StatusEffectKind, amount: f32 },
    Expired { kind: StatusEffectKind },
}

/// Statuses currently running on one target.
#[derive(Clone, Debug, Default)]
pub struct StatusBoard {
    active: Vec<ActiveStatus>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-inflicting a kind that is already running replaces it: the fresher
    /// application wins outright rather than stacking.
    pub fn add(&mut self, status: ActiveStatus) {
        if status.remaining_ticks == 0 {
            return;
        }
        if let Some(existing) = self.active.iter_mut().find(|entry| entry.kind == status.kind) {
            *existing = status;
        } else {
            self.active.push(status);
        }
    }

    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.active.iter().any(|entry| entry.kind == kind)
    }

    pub fn potency_of(&self, kind: StatusEffectKind) -> Option<f32> {
        self.active.iter().find(|entry| entry.kind == kind).map(|entry| entry.potency)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advances every running status by one tick. Damaging kinds emit one
    /// damage event per tick they were active, including the tick on which
    /// they expire.
    pub fn tick(&mut self) -> Vec<StatusTickEvent> {
        let mut events = Vec::new();
        for status in &mut self.active {
            if status.kind.deals_tick_damage() {
                events.push(StatusTickEvent::Damage {
                    kind: status.kind,
                    amount: status.potency * status.damage_scale,
                });
            }
            status.remaining_ticks -= 1;
            if status.remaining_ticks == 0 {
                events.push(StatusTickEvent::Expired { kind: status.kind });
            }
        }
        self.active.retain(|status| status.remaining_ticks > 0);
        events
    }
}
