//! Stateful random stream
//!
//! [`RandomWrapper`] owns one generator state and threads it through every
//! call. Persist it with [`RandomWrapper::seed`] and resume it with
//! [`RandomWrapper::from_seed`]; given the round-trip law this is
//! indistinguishable from re-encoding after every draw.

use crate::error::RandomError;
use crate::rng::{Mwc32, Prng};
use crate::sampling::{self, UniqueSampler};
use crate::seed::{Seed, SeedKind};

/// Mutable random stream over generator `R`
///
/// # Example
/// ```
/// use seedstream_core::{RandomWrapper, Seed};
///
/// let seed = Seed::fixed::<seedstream_core::Mwc32>("test");
/// let mut stream: RandomWrapper = RandomWrapper::from_seed(&seed).unwrap();
///
/// assert_eq!(stream.random_int(100).unwrap(), 42);
///
/// // Save, then resume from the same point
/// let saved = stream.seed();
/// let mut resumed: RandomWrapper = RandomWrapper::from_seed(&saved).unwrap();
/// assert_eq!(resumed.random_int(100).unwrap(), stream.random_int(100).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWrapper<R: Prng = Mwc32> {
    rng: R,
}

impl<R: Prng> RandomWrapper<R> {
    /// Wrap an already decoded state
    pub fn from_state(rng: R) -> Self {
        Self { rng }
    }

    /// Resume a stream from a seed
    pub fn from_seed(seed: &Seed) -> Result<Self, RandomError> {
        Ok(Self::from_state(seed.decode()?))
    }

    /// Deterministic stream named by `name`
    pub fn fixed(name: &str) -> Self {
        Self::from_state(R::from_seed_str(name))
    }

    /// Stream seeded from fresh entropy
    pub fn entropy() -> Self {
        Self::from_state(R::from_entropy())
    }

    /// Current state as a seed token
    pub fn seed(&self) -> Seed {
        Seed::encode(SeedKind::Next, &self.rng)
    }

    /// Borrow the generator state
    pub fn state(&self) -> &R {
        &self.rng
    }

    /// Mutably borrow the generator state
    pub fn state_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_seed(self) -> Seed {
        self.seed()
    }

    pub fn into_state(self) -> R {
        self.rng
    }

    // ========================================================================
    // Raw outputs
    // ========================================================================

    pub fn uint32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    pub fn int32(&mut self) -> i32 {
        self.rng.next_i32()
    }

    /// Float in [0, 1) with 32 bits of precision
    pub fn random(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Float in [0, 1) with 53 bits of precision
    pub fn fract53(&mut self) -> f64 {
        self.rng.next_f53()
    }

    /// Skip `times` draws
    pub fn advance(&mut self, times: usize) {
        self.rng.advance(times);
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Uniform integer in [0, max)
    pub fn random_int(&mut self, max: i64) -> Result<i64, RandomError> {
        sampling::random_int(&mut self.rng, 0, max)
    }

    /// Uniform integer in [min, max)
    pub fn random_int_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        sampling::random_int(&mut self.rng, min, max)
    }

    /// Biased coin flip, `probability` in percent
    pub fn roll(&mut self, probability: f64) -> bool {
        sampling::roll(&mut self.rng, probability)
    }

    pub fn shuffle<T>(&mut self, deck: &mut [T]) {
        sampling::shuffle(&mut self.rng, deck);
    }

    pub fn pick_one<T: Clone>(&mut self, choices: &[T]) -> Result<T, RandomError> {
        sampling::pick_one(&mut self.rng, choices)
    }

    pub fn weighted_pick_one<T: Clone>(&mut self, choices: &[(f64, T)]) -> Result<T, RandomError> {
        sampling::weighted_pick_one(&mut self.rng, choices)
    }

    pub fn sample_non_uniquely<T: Clone>(&mut self, population: &[T], n: usize) -> Vec<T> {
        sampling::sample_non_uniquely(&mut self.rng, population, n)
    }

    pub fn sample_uniquely<T: Clone>(&mut self, population: &[T], n: usize) -> Vec<T> {
        sampling::sample_uniquely(&mut self.rng, population, n)
    }

    /// Lazily sample distinct members, advancing this stream per item
    ///
    /// Items not pulled from the iterator cost no draws.
    pub fn sample_uniquely_iter<'w, 'a, T>(
        &'w mut self,
        population: &'a [T],
    ) -> UniqueSamples<'w, 'a, R, T> {
        UniqueSamples {
            rng: &mut self.rng,
            sampler: UniqueSampler::new(population),
        }
    }

    // ========================================================================
    // Splitting
    // ========================================================================

    /// Split off an independent child stream as a seed
    ///
    /// This stream keeps the advanced parent state.
    pub fn split_seed(&mut self) -> Seed {
        let child = self.rng.split();
        tracing::debug!(algorithm = %R::ALGORITHM, "split stream");
        Seed::encode(SeedKind::Split, &child)
    }

    /// Split off an independent child stream, already wrapped
    pub fn split_wrapper(&mut self) -> Self {
        let child = self.rng.split();
        tracing::debug!(algorithm = %R::ALGORITHM, "split stream");
        Self::from_state(child)
    }
}

/// Iterator returned by [`RandomWrapper::sample_uniquely_iter`]
#[derive(Debug)]
pub struct UniqueSamples<'w, 'a, R: Prng, T> {
    rng: &'w mut R,
    sampler: UniqueSampler<'a, T>,
}

impl<'w, 'a, R: Prng, T> Iterator for UniqueSamples<'w, 'a, R, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sampler.next_with(&mut *self.rng)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sampler.remaining();
        (remaining, Some(remaining))
    }
}

impl<'w, 'a, R: Prng, T> ExactSizeIterator for UniqueSamples<'w, 'a, R, T> {}
