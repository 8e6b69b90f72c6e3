use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use game_core::journal_file::load_journal_from_file;
use game_core::{
    CellKind, GeneratedMap, MapGenerator, Pos, generate_runtime_seed, replay_session,
};

mod map_record;

use map_record::MapRecord;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a map, print it, and optionally store its record
    Generate {
        /// Seed to generate from; a runtime seed is drawn when absent
        #[arg(short, long)]
        seed: Option<u64>,
        /// Path to write a JSON map record to
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Regenerate a stored map record and verify its fingerprint
    Check {
        /// Path of the JSON map record to verify
        #[arg(long)]
        record: PathBuf,
    },
    /// Replay an effect journal file and report the final session state
    Replay {
        /// Path to the journal JSONL file to replay
        #[arg(short, long)]
        journal: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Generate { seed, out } => generate(seed, out),
        Commands::Check { record } => check(&record),
        Commands::Replay { journal } => replay(&journal),
    }
}

fn generate(seed: Option<u64>, out: Option<PathBuf>) -> Result<()> {
    let seed = seed.unwrap_or_else(generate_runtime_seed);
    let map = MapGenerator::new(seed)
        .generate()
        .with_context(|| format!("Map generation failed for seed {seed}"))?;

    println!("Seed: {seed}");
    println!("Fingerprint: {:016x}", map.fingerprint());
    println!("{}", render_ascii(&map));

    if let Some(path) = out {
        let record = MapRecord::new(seed, map.fingerprint());
        record
            .write_atomic(&path)
            .with_context(|| format!("Failed to write map record to {}", path.display()))?;
        println!("Record written to {}", path.display());
    }

    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let record = MapRecord::load(path)
        .with_context(|| format!("Failed to read map record from {}", path.display()))?;
    let Some(expected) = record.fingerprint() else {
        bail!("Record holds a malformed fingerprint: {}", record.fingerprint_hex);
    };

    let map = MapGenerator::new(record.seed)
        .generate()
        .with_context(|| format!("Map generation failed for recorded seed {}", record.seed))?;

    if map.fingerprint() != expected {
        bail!(
            "Fingerprint mismatch for seed {}: expected {expected:016x}, regenerated {:016x}",
            record.seed,
            map.fingerprint()
        );
    }

    println!("Seed {} reproduces fingerprint {expected:016x}.", record.seed);
    Ok(())
}

fn replay(path: &Path) -> Result<()> {
    let loaded = load_journal_from_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load journal: {e}"))?;

    let session = replay_session(&loaded.journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during map generation: {e}"))?;

    println!("Replay complete.");
    println!("Seed: {}", session.seed());
    println!("Effects applied: {}", session.journal().records.len());
    println!("Buff revision: {}", session.buff_revision());
    println!("Snapshot hash: {:016x}", session.snapshot_hash());

    Ok(())
}

fn render_ascii(map: &GeneratedMap) -> String {
    let mut out = String::new();
    for y in 0..map.size as i32 {
        for x in 0..map.size as i32 {
            let pos = Pos { y, x };
            let glyph = if pos == map.entry {
                'E'
            } else if pos == map.exit {
                'X'
            } else {
                match map.cell_at(pos) {
                    CellKind::Wall => '#',
                    CellKind::Path => '.',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
