//! Explicit seed threading
//!
//! Each function takes the current [`Seed`], decodes it, performs one
//! operation and hands back the advanced seed next to the result. Use this
//! style when seeds cross process or serialization boundaries between calls;
//! otherwise [`RandomWrapper`](crate::RandomWrapper) does the threading.
//!
//! # Example
//! ```
//! use seedstream_core::{functional, Mwc32};
//!
//! let seed = functional::fixed_seed::<Mwc32>("test");
//! let (seed, first) = functional::random_int::<Mwc32>(&seed, 0, 100).unwrap();
//! let (_seed, second) = functional::random_int::<Mwc32>(&seed, 0, 100).unwrap();
//! assert_eq!((first, second), (42, 78));
//! ```

use crate::error::RandomError;
use crate::rng::Prng;
use crate::sampling::{self, UniqueSampler};
use crate::seed::{Seed, SeedKind};

fn next<R: Prng>(rng: &R) -> Seed {
    Seed::encode(SeedKind::Next, rng)
}

/// Fresh seed from a random UUID
pub fn init_seed<R: Prng>() -> Seed {
    Seed::entropy::<R>()
}

/// Deterministic seed named by `name`
pub fn fixed_seed<R: Prng>(name: &str) -> Seed {
    Seed::fixed::<R>(name)
}

/// Advance one step
pub fn next_seed<R: Prng>(seed: &Seed) -> Result<Seed, RandomError> {
    advance::<R>(seed, 1)
}

/// Skip `times` draws
pub fn advance<R: Prng>(seed: &Seed, times: usize) -> Result<Seed, RandomError> {
    let mut rng: R = seed.decode()?;
    rng.advance(times);
    Ok(next(&rng))
}

/// Split into `(advanced parent, child)`
pub fn split_seed<R: Prng>(seed: &Seed) -> Result<(Seed, Seed), RandomError> {
    let mut rng: R = seed.decode()?;
    let child = rng.split();
    tracing::debug!(algorithm = %R::ALGORITHM, "split seed");
    Ok((next(&rng), Seed::encode(SeedKind::Split, &child)))
}

/// Split in place: `seed` becomes the advanced parent, the child is returned
pub fn split_wrapped_seed<R: Prng>(seed: &mut Seed) -> Result<Seed, RandomError> {
    let (parent, child) = split_seed::<R>(seed)?;
    *seed = parent;
    Ok(child)
}

/// Uniform integer in [min, max)
pub fn random_int<R: Prng>(seed: &Seed, min: i64, max: i64) -> Result<(Seed, i64), RandomError> {
    let mut rng: R = seed.decode()?;
    let value = sampling::random_int(&mut rng, min, max)?;
    Ok((next(&rng), value))
}

/// Biased coin flip, `probability` in percent
pub fn roll<R: Prng>(seed: &Seed, probability: f64) -> Result<(Seed, bool), RandomError> {
    let mut rng: R = seed.decode()?;
    let value = sampling::roll(&mut rng, probability);
    Ok((next(&rng), value))
}

/// Shuffle `deck` in place
pub fn shuffle<R: Prng, T>(seed: &Seed, deck: &mut [T]) -> Result<Seed, RandomError> {
    let mut rng: R = seed.decode()?;
    sampling::shuffle(&mut rng, deck);
    Ok(next(&rng))
}

pub fn pick_one<R: Prng, T: Clone>(seed: &Seed, choices: &[T]) -> Result<(Seed, T), RandomError> {
    let mut rng: R = seed.decode()?;
    let value = sampling::pick_one(&mut rng, choices)?;
    Ok((next(&rng), value))
}

pub fn weighted_pick_one<R: Prng, T: Clone>(
    seed: &Seed,
    choices: &[(f64, T)],
) -> Result<(Seed, T), RandomError> {
    let mut rng: R = seed.decode()?;
    let value = sampling::weighted_pick_one(&mut rng, choices)?;
    Ok((next(&rng), value))
}

pub fn sample_non_uniquely<R: Prng, T: Clone>(
    seed: &Seed,
    population: &[T],
    n: usize,
) -> Result<(Seed, Vec<T>), RandomError> {
    let mut rng: R = seed.decode()?;
    let samples = sampling::sample_non_uniquely(&mut rng, population, n);
    Ok((next(&rng), samples))
}

pub fn sample_uniquely<R: Prng, T: Clone>(
    seed: &Seed,
    population: &[T],
    n: usize,
) -> Result<(Seed, Vec<T>), RandomError> {
    let mut rng: R = seed.decode()?;
    let samples = sampling::sample_uniquely(&mut rng, population, n);
    Ok((next(&rng), samples))
}

/// One step of resumable unique sampling
///
/// The caller may supply any seed at each step, including one advanced by
/// unrelated draws since the previous step. Returns `None` once the
/// population is exhausted; the seed is then unchanged.
///
/// # Example
/// ```
/// use seedstream_core::sampling::UniqueSampler;
/// use seedstream_core::{functional, Mwc32};
///
/// let population = [0, 1, 2, 3, 4];
/// let mut sampler = UniqueSampler::new(&population);
/// let mut seed = functional::fixed_seed::<Mwc32>("test");
///
/// let mut samples = Vec::new();
/// while let Some((next, sample)) =
///     functional::sample_uniquely_step::<Mwc32, _>(&seed, &mut sampler).unwrap()
/// {
///     samples.push(sample);
///     seed = next;
/// }
/// assert_eq!(samples, vec![2, 3, 0, 4, 1]);
/// ```
pub fn sample_uniquely_step<R: Prng, T: Clone>(
    seed: &Seed,
    sampler: &mut UniqueSampler<'_, T>,
) -> Result<Option<(Seed, T)>, RandomError> {
    if sampler.is_exhausted() {
        return Ok(None);
    }
    let mut rng: R = seed.decode()?;
    Ok(sampler
        .next_with(&mut rng)
        .cloned()
        .map(|sample| (next(&rng), sample)))
}
