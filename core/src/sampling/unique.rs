//! Resumable sampling without replacement
//!
//! A partial Fisher–Yates shuffle over a sparse overlay: only positions
//! touched by a swap are recorded, so drawing k samples from a population of
//! n costs O(k) memory rather than O(n).

use crate::rng::Prng;
use std::collections::HashMap;

/// Cursor yielding distinct population members one at a time
///
/// The generator is passed into every [`UniqueSampler::next_with`] call, so
/// the state driving each step may come from anywhere: a wrapper, or a seed
/// the caller decoded and advanced on its own. The cursor only moves
/// forward; to start over build a new one.
///
/// # Example
/// ```
/// use seedstream_core::sampling::UniqueSampler;
/// use seedstream_core::{Mwc32, Prng};
///
/// let population = ["a", "b", "c"];
/// let mut sampler = UniqueSampler::new(&population);
/// let mut rng = Mwc32::from_seed_str("test");
///
/// let mut seen = Vec::new();
/// while let Some(item) = sampler.next_with(&mut rng) {
///     seen.push(*item);
/// }
/// seen.sort();
/// assert_eq!(seen, vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct UniqueSampler<'a, T> {
    population: &'a [T],
    /// Position -> population index, for swapped positions not yet emitted
    overlay: HashMap<usize, usize>,
    position: usize,
}

impl<'a, T> UniqueSampler<'a, T> {
    pub fn new(population: &'a [T]) -> Self {
        Self {
            population,
            overlay: HashMap::new(),
            position: 0,
        }
    }

    /// Number of samples emitted so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Samples left before the population is exhausted
    pub fn remaining(&self) -> usize {
        self.population.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn slot(&self, position: usize) -> usize {
        self.overlay.get(&position).copied().unwrap_or(position)
    }

    /// Emit the next distinct sample, drawing once from `rng`
    ///
    /// Returns `None` without drawing once every member has been emitted.
    ///
    /// # Panics
    /// Panics if the population holds more than 2^32 elements
    pub fn next_with<R: Prng>(&mut self, rng: &mut R) -> Option<&'a T> {
        let len = self.population.len();
        let i = self.position;
        if i >= len {
            return None;
        }

        let swap_index = rng.range(i as i64, len as i64) as usize;
        let at_i = self.slot(i);
        let at_swap = self.slot(swap_index);

        // Position i is never read again
        self.overlay.remove(&i);
        if swap_index != i {
            self.overlay.insert(swap_index, at_i);
        }
        self.position += 1;

        Some(&self.population[at_swap])
    }
}
