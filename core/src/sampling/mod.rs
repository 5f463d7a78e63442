//! Sampling and selection on top of [`Prng::range`]
//!
//! Every function here is generic over the generator and touches it only
//! through the trait, so new algorithms get the whole layer for free.
//!
//! # Draw accounting
//!
//! Degenerate inputs return without drawing: singleton choice lists,
//! certain rolls, empty populations. Callers auditing how far a stream has
//! advanced can rely on this.

mod unique;

pub use unique::UniqueSampler;

use crate::error::RandomError;
use crate::rng::{Prng, MAX_RANGE_WIDTH};

/// Uniform integer in [min, max)
///
/// Returns `max` without drawing when `max <= min`.
///
/// # Errors
/// `InvalidArgument` if `max - min` exceeds 2^32
pub fn random_int<R: Prng>(rng: &mut R, min: i64, max: i64) -> Result<i64, RandomError> {
    if max <= min {
        return Ok(max);
    }
    match max.checked_sub(min) {
        Some(width) if width <= MAX_RANGE_WIDTH => Ok(rng.range(min, max)),
        _ => Err(RandomError::InvalidArgument(format!(
            "range [{}, {}) is wider than 2^32",
            min, max
        ))),
    }
}

/// Biased coin flip, `probability` in percent
///
/// # Example
/// ```
/// use seedstream_core::{sampling, Mwc32, Prng};
///
/// let mut rng = Mwc32::from_seed_str("test");
/// assert!(sampling::roll(&mut rng, 100.0));
/// assert!(!sampling::roll(&mut rng, 0.0));
/// ```
pub fn roll<R: Prng>(rng: &mut R, probability: f64) -> bool {
    if probability >= 100.0 {
        return true;
    }
    if probability <= 0.0 || probability.is_nan() {
        return false;
    }
    (rng.range(0, 100) as f64) < probability
}

/// In-place Fisher–Yates shuffle
///
/// # Panics
/// Panics if `deck` holds more than 2^32 elements
pub fn shuffle<R: Prng, T>(rng: &mut R, deck: &mut [T]) {
    let len = deck.len();
    // https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle#The_modern_algorithm
    for i in 0..len.saturating_sub(1) {
        let swap_index = rng.range(i as i64, len as i64) as usize;
        deck.swap(i, swap_index);
    }
}

/// Uniform pick from a non-empty slice
///
/// # Errors
/// `InvalidArgument` if `choices` is empty
///
/// # Panics
/// Panics if `choices` holds more than 2^32 elements
pub fn pick_one<R: Prng, T: Clone>(rng: &mut R, choices: &[T]) -> Result<T, RandomError> {
    match choices {
        [] => Err(RandomError::InvalidArgument(
            "cannot pick from an empty collection".to_string(),
        )),
        [only] => Ok(only.clone()),
        _ => {
            let index = rng.range(0, choices.len() as i64) as usize;
            Ok(choices[index].clone())
        }
    }
}

/// Pick from `(weight, value)` pairs proportionally to weight
///
/// Draws one integer below the ceiling of the total weight and returns the
/// first choice whose running total exceeds it. Fractional weights skew
/// slightly toward earlier entries. When nothing matches (all weights zero)
/// the first choice is returned.
///
/// # Errors
/// `InvalidArgument` if `choices` is empty or any weight is negative or
/// non-finite
pub fn weighted_pick_one<R: Prng, T: Clone>(
    rng: &mut R,
    choices: &[(f64, T)],
) -> Result<T, RandomError> {
    let (first, rest) = choices.split_first().ok_or_else(|| {
        RandomError::InvalidArgument("cannot pick from an empty collection".to_string())
    })?;

    if let Some((weight, _)) = choices.iter().find(|(w, _)| !w.is_finite() || *w < 0.0) {
        return Err(RandomError::InvalidArgument(format!(
            "weight {} must be finite and non-negative",
            weight
        )));
    }
    if rest.is_empty() {
        return Ok(first.1.clone());
    }

    let total: f64 = choices.iter().map(|(w, _)| w).sum();
    let pick = random_int(rng, 0, total.ceil() as i64)? as f64;

    let mut cumulative = 0.0;
    for (weight, value) in choices {
        cumulative += weight;
        if cumulative > pick {
            return Ok(value.clone());
        }
    }

    Ok(first.1.clone())
}

/// `n` independent uniform picks (with replacement)
///
/// # Panics
/// Panics if `population` holds more than 2^32 elements
pub fn sample_non_uniquely<R: Prng, T: Clone>(rng: &mut R, population: &[T], n: usize) -> Vec<T> {
    if population.is_empty() || n == 0 {
        return Vec::new();
    }

    let len = population.len() as i64;
    (0..n)
        .map(|_| population[rng.range(0, len) as usize].clone())
        .collect()
}

/// Up to `n` distinct picks (without replacement)
///
/// Requests beyond the population size yield a full permutation.
///
/// # Panics
/// Panics if `population` holds more than 2^32 elements
///
/// # Example
/// ```
/// use seedstream_core::{sampling, Mwc32, Prng};
///
/// let mut rng = Mwc32::from_seed_str("test");
/// let samples = sampling::sample_uniquely(&mut rng, &[0, 1, 2, 3, 4], 10);
/// assert_eq!(samples, vec![2, 3, 0, 4, 1]);
/// ```
pub fn sample_uniquely<R: Prng, T: Clone>(rng: &mut R, population: &[T], n: usize) -> Vec<T> {
    let mut sampler = UniqueSampler::new(population);
    let mut samples = Vec::with_capacity(n.min(population.len()));
    while samples.len() < n {
        match sampler.next_with(rng) {
            Some(sample) => samples.push(sample.clone()),
            None => break,
        }
    }
    samples
}
