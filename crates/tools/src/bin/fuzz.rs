use anyhow::Result;
use clap::Parser;
use game_core::mapgen::PATH_LENGTH;
use game_core::{CellKind, MapGenerator};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    maps: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting mapgen fuzz harness on seed {} for {} maps...", args.seed, args.maps);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut generated = 0_u32;
    let mut exhausted = 0_u32;
    for _ in 0..args.maps {
        let map_seed = rng.next_u64();
        let map = match MapGenerator::new(map_seed).generate() {
            Ok(map) => map,
            Err(_) => {
                exhausted += 1;
                continue;
            }
        };
        generated += 1;

        // Assert invariants
        assert_eq!(map.path.len(), PATH_LENGTH, "seed {map_seed}: wrong corridor length");
        for pair in map.path.windows(2) {
            assert_eq!(
                pair[0].manhattan(pair[1]),
                1,
                "seed {map_seed}: corridor breaks between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
        for cell in &map.path {
            let mut touching = 0;
            for neighbor in cell.cardinal_neighbors() {
                if map.in_bounds(neighbor) && map.cell_at(neighbor) == CellKind::Path {
                    touching += 1;
                }
            }
            assert!(touching <= 2, "seed {map_seed}: corridor touches itself at {cell:?}");
        }
    }

    println!("Fuzzing completed: {generated} maps generated, {exhausted} seeds exhausted.");
    Ok(())
}
