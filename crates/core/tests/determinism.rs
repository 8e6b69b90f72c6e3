use core::{MapGenerator, Session};

use xxhash_rust::xxh3::xxh3_64;

#[test]
fn identical_seeds_produce_identical_maps() {
    for seed in [0_u64, 1, 7, 12_345, 987_654, u64::MAX] {
        let first = MapGenerator::new(seed).generate();
        let second = MapGenerator::new(seed).generate();
        assert_eq!(first, second, "seed {seed} diverged between runs");

        if let (Ok(first), Ok(second)) = (first, second) {
            assert_eq!(
                xxh3_64(&first.canonical_bytes()),
                xxh3_64(&second.canonical_bytes()),
                "seed {seed} produced different fingerprints"
            );
        }
    }
}

#[test]
fn different_seeds_usually_produce_different_maps() {
    let maps: Vec<_> =
        (0..16_u64).filter_map(|seed| MapGenerator::new(seed).generate().ok()).collect();
    assert!(maps.len() >= 2, "need at least two generated maps to compare");

    let mut distinct = std::collections::BTreeSet::new();
    for map in &maps {
        distinct.insert(xxh3_64(&map.canonical_bytes()));
    }
    // A handful of collisions would be suspicious; total collapse is a bug.
    assert!(distinct.len() > maps.len() / 2, "seeds collapsed to {} maps", distinct.len());
}

#[test]
fn sessions_from_the_same_seed_hash_identically() {
    let seed = (0..32_u64)
        .find(|&seed| MapGenerator::new(seed).generate().is_ok())
        .expect("some seed in 0..32 should generate");

    let left = Session::new(seed).expect("seed generates");
    let right = Session::new(seed).expect("seed generates");
    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
}

#[test]
fn session_hash_advances_with_the_clock() {
    let seed = (0..32_u64)
        .find(|&seed| MapGenerator::new(seed).generate().is_ok())
        .expect("some seed in 0..32 should generate");

    let mut session = Session::new(seed).expect("seed generates");
    let baseline = session.snapshot_hash();
    let _ = session.advance(10);
    assert_ne!(baseline, session.snapshot_hash());
}
