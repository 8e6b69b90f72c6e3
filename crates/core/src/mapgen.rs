//! Procedural corridor map generation split into coherent submodules.

pub mod model;

mod edge;
mod generator;
mod grid;
mod search;
mod seed;

pub use generator::{GRID_SIZE, MapGenError, MapGenerator, PATH_LENGTH};
pub use model::GeneratedMap;
pub use seed::generate_runtime_seed;

pub fn generate_map(seed: u64) -> Result<GeneratedMap, MapGenError> {
    MapGenerator::new(seed).generate()
}
