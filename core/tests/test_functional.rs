//! Explicit seed-threading API tests

use seedstream_core::functional;
use seedstream_core::sampling::UniqueSampler;
use seedstream_core::{Lcg64, Mwc32, RandomError, RandomWrapper, Seed, SeedKind};

fn seed() -> Seed {
    functional::fixed_seed::<Mwc32>("test")
}

#[test]
fn test_init_seeds_are_distinct() {
    let seeds: std::collections::HashSet<Seed> =
        (0..10).map(|_| functional::init_seed::<Mwc32>()).collect();
    assert_eq!(seeds.len(), 10);
}

#[test]
fn test_fixed_seed_kind() {
    assert_eq!(seed().kind(), SeedKind::Initial);
}

#[test]
fn test_random_int_threading() {
    let mut current = seed();
    let mut values = Vec::new();
    for _ in 0..5 {
        let (next, value) = functional::random_int::<Mwc32>(&current, 0, 100).unwrap();
        assert_eq!(next.kind(), SeedKind::Next);
        values.push(value);
        current = next;
    }
    assert_eq!(values, vec![42, 78, 60, 67, 51]);
}

#[test]
fn test_same_seed_same_result() {
    let seed = seed();
    let a = functional::random_int::<Mwc32>(&seed, 0, 1000).unwrap();
    let b = functional::random_int::<Mwc32>(&seed, 0, 1000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_split_seed_diverges() {
    let (parent, child) = functional::split_seed::<Mwc32>(&seed()).unwrap();
    assert_eq!(child.kind(), SeedKind::Split);

    let (_, a) = functional::sample_non_uniquely::<Mwc32, i64>(&parent, &(0..100).collect::<Vec<_>>(), 5).unwrap();
    let (_, b) = functional::sample_non_uniquely::<Mwc32, i64>(&child, &(0..100).collect::<Vec<_>>(), 5).unwrap();
    assert_eq!(a, vec![25, 68, 95, 40, 44]);
    assert_eq!(b, vec![54, 88, 73, 93, 39]);
}

#[test]
fn test_weighted_pick_one_single_item() {
    let (_, pick) = functional::weighted_pick_one::<Mwc32, _>(&seed(), &[(1.0, "1")]).unwrap();
    assert_eq!(pick, "1");
}

#[test]
fn test_sampling_functions() {
    let population = [0, 1, 2, 3, 4];

    let (_, samples) = functional::sample_non_uniquely::<Mwc32, _>(&seed(), &population, 4).unwrap();
    assert_eq!(samples, vec![2, 3, 0, 2]);

    let (_, samples) = functional::sample_non_uniquely::<Mwc32, _>(&seed(), &population, 10).unwrap();
    assert_eq!(samples, vec![2, 3, 0, 2, 1, 3, 0, 1, 0, 3]);

    let (_, samples) = functional::sample_uniquely::<Mwc32, _>(&seed(), &population, 5).unwrap();
    assert_eq!(samples, vec![2, 3, 0, 4, 1]);

    let (_, samples) = functional::sample_uniquely::<Mwc32, _>(&seed(), &population, 10).unwrap();
    assert_eq!(samples, vec![2, 3, 0, 4, 1]);

    let empty: [i32; 0] = [];
    let (next, samples) = functional::sample_uniquely::<Mwc32, _>(&seed(), &empty, 5).unwrap();
    assert!(samples.is_empty());
    assert_eq!(next, seed());
}

#[test]
fn test_matches_wrapper() {
    let population: Vec<u32> = (0..20).collect();

    let mut stream = RandomWrapper::<Lcg64>::from_seed(&functional::fixed_seed::<Lcg64>("same")).unwrap();
    let from_wrapper = stream.sample_uniquely(&population, 7);

    let (next, from_functional) =
        functional::sample_uniquely::<Lcg64, _>(&functional::fixed_seed::<Lcg64>("same"), &population, 7).unwrap();

    assert_eq!(from_wrapper, from_functional);
    assert_eq!(stream.seed(), next);
}

#[test]
fn test_shuffle_and_pick() {
    let mut deck = [0, 1, 2, 3, 4, 5];
    let next = functional::shuffle::<Mwc32, _>(&seed(), &mut deck).unwrap();
    assert_eq!(deck, [0, 4, 2, 5, 3, 1]);
    assert_eq!(next.kind(), SeedKind::Next);

    let choices: Vec<i64> = (0..100).collect();
    let (_, pick) = functional::pick_one::<Mwc32, _>(&seed(), &choices).unwrap();
    assert_eq!(pick, 42);
}

#[test]
fn test_roll_and_advance() {
    let (next, hit) = functional::roll::<Mwc32>(&seed(), 50.0).unwrap();
    assert!(hit);
    let (_, hit) = functional::roll::<Mwc32>(&next, 50.0).unwrap();
    assert!(!hit);

    let skipped = functional::advance::<Mwc32>(&seed(), 2).unwrap();
    let (_, value) = functional::random_int::<Mwc32>(&skipped, 0, 100).unwrap();
    assert_eq!(value, 60);
}

#[test]
fn test_split_wrapped_seed() {
    let mut holder = seed();
    let child = functional::split_wrapped_seed::<Mwc32>(&mut holder).unwrap();
    let (expected_parent, expected_child) = functional::split_seed::<Mwc32>(&seed()).unwrap();
    assert_eq!(holder, expected_parent);
    assert_eq!(child, expected_child);
}

#[test]
fn test_unique_step_resumes_across_seeds() {
    let population = [0, 1, 2, 3, 4];
    let mut sampler = UniqueSampler::new(&population);
    let mut current = seed();
    let mut samples = Vec::new();

    while let Some((next, sample)) =
        functional::sample_uniquely_step::<Mwc32, _>(&current, &mut sampler).unwrap()
    {
        samples.push(sample);
        current = next;
    }
    assert_eq!(samples, vec![2, 3, 0, 4, 1]);
    assert!(sampler.is_exhausted());
}

#[test]
fn test_unique_step_with_interleaved_draws() {
    let population: Vec<u32> = (0..10).collect();
    let mut sampler = UniqueSampler::new(&population);
    let mut current = seed();
    let mut samples = Vec::new();

    for _ in 0..10 {
        // Unrelated draws between steps still leave samples distinct
        let (advanced, _) = functional::random_int::<Mwc32>(&current, 0, 6).unwrap();
        let (next, sample) = functional::sample_uniquely_step::<Mwc32, _>(&advanced, &mut sampler)
            .unwrap()
            .unwrap();
        samples.push(sample);
        current = next;
    }

    samples.sort();
    assert_eq!(samples, population);
    assert!(functional::sample_uniquely_step::<Mwc32, _>(&current, &mut sampler)
        .unwrap()
        .is_none());
}

#[test]
fn test_bad_seed_is_decode_error() {
    let bad = Seed::new(SeedKind::Next, "definitely not hex");
    assert!(matches!(
        functional::split_seed::<Mwc32>(&bad),
        Err(RandomError::Decode(_))
    ));
    let population = [1, 2, 3];
    let mut sampler = UniqueSampler::new(&population);
    assert!(functional::sample_uniquely_step::<Mwc32, _>(&bad, &mut sampler).is_err());
}
