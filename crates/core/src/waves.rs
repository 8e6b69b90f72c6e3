//! Wave definitions and the discrete-tick spawn scheduler.

use crate::types::Pos;

const BASE_ENEMIES: u32 = 6;
const ENEMIES_PER_WAVE: u32 = 2;
const BASE_SPAWN_INTERVAL: u32 = 40;
const MIN_SPAWN_INTERVAL: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveDefinition {
    pub enemy_count: u32,
    pub spawn_interval_ticks: u32,
    pub enemy_hp_scale: f32,
}

impl WaveDefinition {
    pub fn for_wave(wave_number: u32) -> Self {
        let past_waves = wave_number.saturating_sub(1);
        Self {
            enemy_count: BASE_ENEMIES + past_waves * ENEMIES_PER_WAVE,
            spawn_interval_ticks: BASE_SPAWN_INTERVAL
                .saturating_sub(past_waves * 2)
                .max(MIN_SPAWN_INTERVAL),
            enemy_hp_scale: 1.0 + past_waves as f32 * 0.15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnEvent {
    pub wave_number: u32,
    pub pos: Pos,
}

/// Emits spawn events at the corridor entry while a wave is running. The
/// spawn timer is a countdown-remaining field decremented once per tick.
#[derive(Clone, Debug)]
pub struct WaveScheduler {
    wave_number: u32,
    definition: WaveDefinition,
    spawned: u32,
    spawn_timer: u32,
}

impl Default for WaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveScheduler {
    pub fn new() -> Self {
        let definition = WaveDefinition::for_wave(1);
        Self { wave_number: 1, definition, spawned: 0, spawn_timer: definition.spawn_interval_ticks }
    }

    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    pub fn definition(&self) -> WaveDefinition {
        self.definition
    }

    pub fn all_spawned(&self) -> bool {
        self.spawned >= self.definition.enemy_count
    }

    /// Advances the scheduler by one tick; at most one enemy spawns per tick.
    pub fn tick(&mut self, entry: Pos) -> Option<SpawnEvent> {
        if self.all_spawned() {
            return None;
        }
        self.spawn_timer -= 1;
        if self.spawn_timer > 0 {
            return None;
        }
        self.spawn_timer = self.definition.spawn_interval_ticks;
        self.spawned += 1;
        Some(SpawnEvent { wave_number: self.wave_number, pos: entry })
    }

    /// Moves to the next wave and restarts the spawn countdown.
    pub fn advance_wave(&mut self) {
        self.wave_number += 1;
        self.definition = WaveDefinition::for_wave(self.wave_number);
        self.spawned = 0;
        self.spawn_timer = self.definition.spawn_interval_ticks;
    }
}
