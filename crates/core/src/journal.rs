use serde::{Deserialize, Serialize};

use crate::buffs::BuffEffect;
use crate::mapgen::MapGenError;
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: u64,
    pub records: Vec<EffectRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectRecord {
    pub seq: u64,
    pub effect: BuffEffect,
}

impl EffectJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, build_id: "dev".to_string(), seed, records: Vec::new() }
    }

    pub fn append_effect(&mut self, effect: BuffEffect) -> u64 {
        let seq = self.records.len() as u64;
        self.records.push(EffectRecord { seq, effect });
        seq
    }
}

/// Rebuilds a session from a journal: regenerate the map from the recorded
/// seed, then apply every journaled effect exactly once, in order. The
/// result is indistinguishable from the session that produced the journal.
pub fn replay_session(journal: &EffectJournal) -> Result<Session, MapGenError> {
    let mut session = Session::new(journal.seed)?;
    for record in &journal.records {
        session.apply_effect(record.effect);
    }
    Ok(session)
}
