//! The per-game-session aggregate. Constructed once per run and passed by
//! reference to whatever needs it; there is no ambient global instance.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::buffs::{BuffAggregator, BuffEffect, FinalStats, TowerBuffSnapshot};
use crate::journal::EffectJournal;
use crate::mapgen::{GeneratedMap, MapGenError, MapGenerator};
use crate::towers::{PlacedTower, TowerRegistry};
use crate::types::{
    CellKind, Element, LogEvent, PlacementError, Pos, RemovalError, TowerClass, TowerKey,
};
use crate::waves::{SpawnEvent, WaveScheduler};

pub struct Session {
    seed: u64,
    tick: u64,
    map: GeneratedMap,
    towers: TowerRegistry,
    buffs: BuffAggregator,
    waves: WaveScheduler,
    journal: EffectJournal,
    log: Vec<LogEvent>,
}

impl Session {
    /// Fails outright when map generation exhausts its bounded attempts;
    /// callers pick a different seed instead of receiving an empty grid.
    pub fn new(seed: u64) -> Result<Self, MapGenError> {
        let map = MapGenerator::new(seed).generate()?;
        Ok(Self {
            seed,
            tick: 0,
            map,
            towers: TowerRegistry::new(),
            buffs: BuffAggregator::new(),
            waves: WaveScheduler::new(),
            journal: EffectJournal::new(seed),
            log: Vec::new(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn map(&self) -> &GeneratedMap {
        &self.map
    }

    pub fn towers(&self) -> &TowerRegistry {
        &self.towers
    }

    pub fn journal(&self) -> &EffectJournal {
        &self.journal
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn buff_revision(&self) -> u64 {
        self.buffs.revision()
    }

    /// Towers build on wall cells only; the corridor stays clear.
    pub fn place_tower(&mut self, class: TowerClass, pos: Pos) -> Result<TowerKey, PlacementError> {
        if !self.map.in_bounds(pos) {
            return Err(PlacementError::OutOfBounds);
        }
        if self.map.cell_at(pos) != CellKind::Wall {
            return Err(PlacementError::NotBuildable);
        }
        if self.towers.occupant_at(pos).is_some() {
            return Err(PlacementError::Occupied);
        }
        let key = self.towers.place(class, pos);
        self.log.push(LogEvent::TowerPlaced { key, class, pos });
        Ok(key)
    }

    pub fn remove_tower(&mut self, key: TowerKey) -> Result<PlacedTower, RemovalError> {
        let removed = self.towers.remove(key).ok_or(RemovalError::MissingTower)?;
        self.log.push(LogEvent::TowerRemoved { key, pos: removed.pos });
        Ok(removed)
    }

    /// Applies one meta-progression effect and journals it, exactly once.
    pub fn apply_effect(&mut self, effect: BuffEffect) {
        let _ = self.journal.append_effect(effect);
        self.buffs.apply_effect(effect);
        self.log.push(LogEvent::EffectApplied { revision: self.buffs.revision() });
    }

    pub fn tower_stats(&mut self, key: TowerKey) -> Option<FinalStats> {
        let tower = *self.towers.get(key)?;
        Some(self.buffs.final_stats(&tower, &self.towers))
    }

    pub fn tower_buffs(&mut self, class: TowerClass, element: Element) -> TowerBuffSnapshot {
        self.buffs.tower_buffs(class, element)
    }

    /// Advances the simulation clock, returning every spawn emitted during
    /// the advanced span.
    pub fn advance(&mut self, ticks: u32) -> Vec<SpawnEvent> {
        let mut spawns = Vec::new();
        for _ in 0..ticks {
            self.tick += 1;
            if let Some(event) = self.waves.tick(self.map.entry) {
                self.log.push(LogEvent::EnemySpawned {
                    wave_number: event.wave_number,
                    pos: event.pos,
                });
                spawns.push(event);
            }
        }
        spawns
    }

    pub fn start_next_wave(&mut self) {
        self.waves.advance_wave();
        self.log.push(LogEvent::WaveStarted { wave_number: self.waves.wave_number() });
    }

    pub fn wave_number(&self) -> u32 {
        self.waves.wave_number()
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.buffs.revision());
        hasher.write_u32(self.waves.wave_number());
        hasher.write(&self.map.canonical_bytes());
        for tower in self.towers.iter() {
            hasher.write_u8(tower.class as u8);
            hasher.write_u8(tower.element as u8);
            hasher.write_i32(tower.pos.y);
            hasher.write_i32(tower.pos.x);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::buffs::{EffectKind, StatKind};

    use super::*;

    fn working_seed() -> u64 {
        (0..32_u64)
            .find(|&seed| MapGenerator::new(seed).generate().is_ok())
            .expect("some seed in 0..32 should generate")
    }

    fn wall_cell(session: &Session) -> Pos {
        let size = session.map().size as i32;
        for y in 0..size {
            for x in 0..size {
                let pos = Pos { y, x };
                if session.map().cell_at(pos) == CellKind::Wall {
                    return pos;
                }
            }
        }
        unreachable!("a generated map always has wall cells");
    }

    #[test]
    fn towers_cannot_stand_on_the_corridor() {
        let mut session = Session::new(working_seed()).expect("seed generates");
        let corridor_cell = session.map().path[1];
        assert_eq!(
            session.place_tower(TowerClass::Ember, corridor_cell),
            Err(PlacementError::NotBuildable)
        );
    }

    #[test]
    fn occupied_cells_reject_a_second_tower() {
        let mut session = Session::new(working_seed()).expect("seed generates");
        let pos = wall_cell(&session);
        let _first = session.place_tower(TowerClass::Ember, pos).expect("wall cell is buildable");
        assert_eq!(session.place_tower(TowerClass::Tide, pos), Err(PlacementError::Occupied));
    }

    #[test]
    fn out_of_bounds_placement_is_rejected() {
        let mut session = Session::new(working_seed()).expect("seed generates");
        assert_eq!(
            session.place_tower(TowerClass::Ember, Pos { y: -1, x: 3 }),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn removing_a_missing_tower_reports_it() {
        let mut session = Session::new(working_seed()).expect("seed generates");
        let pos = wall_cell(&session);
        let key = session.place_tower(TowerClass::Sun, pos).expect("placement succeeds");
        let removed = session.remove_tower(key).expect("removal succeeds");
        assert_eq!(removed.pos, pos);
        assert_eq!(session.remove_tower(key), Err(RemovalError::MissingTower));
    }

    #[test]
    fn applied_effects_are_journaled_once_each() {
        let mut session = Session::new(working_seed()).expect("seed generates");
        session.apply_effect(BuffEffect::global(EffectKind::StatPercent(StatKind::Damage), 20.0));
        session.apply_effect(BuffEffect::global(EffectKind::CritChance, 5.0));

        assert_eq!(session.journal().records.len(), 2);
        assert_eq!(session.journal().records[0].seq, 0);
        assert_eq!(session.journal().records[1].seq, 1);
        assert_eq!(session.buff_revision(), 2);
    }

    #[test]
    fn advancing_emits_wave_spawns_at_the_entry_tile() {
        let mut session = Session::new(working_seed()).expect("seed generates");
        let entry = session.map().entry;
        let spawns = session.advance(500);
        assert!(!spawns.is_empty());
        assert!(spawns.iter().all(|event| event.pos == entry));
        assert_eq!(session.current_tick(), 500);
    }

    #[test]
    fn snapshot_hash_tracks_state_changes() {
        let seed = working_seed();
        let mut session = Session::new(seed).expect("seed generates");
        let baseline = session.snapshot_hash();

        let fresh = Session::new(seed).expect("seed generates");
        assert_eq!(baseline, fresh.snapshot_hash(), "identical sessions hash identically");

        session.apply_effect(BuffEffect::global(EffectKind::CritChance, 5.0));
        assert_ne!(baseline, session.snapshot_hash());
    }
}
