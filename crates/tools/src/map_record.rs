use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// The seed is the only map-related value that needs to be stored;
/// regeneration reproduces the map, and the fingerprint proves it did.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    pub format_version: u32,
    pub seed: u64,
    pub fingerprint_hex: String,
}

impl MapRecord {
    pub fn new(seed: u64, fingerprint: u64) -> Self {
        Self { format_version: 1, seed, fingerprint_hex: format!("{fingerprint:016x}") }
    }

    pub fn fingerprint(&self) -> Option<u64> {
        u64::from_str_radix(&self.fingerprint_hex, 16).ok()
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let record: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(record)
    }
}
