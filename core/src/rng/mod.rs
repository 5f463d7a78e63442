//! Deterministic random number generation
//!
//! Two interchangeable generators implement the [`Prng`] trait:
//!
//! - [`Mwc32`]: Alea, a multiply-with-carry generator over three 32-bit
//!   fractional words and a carry
//! - [`Lcg64`]: a 64-bit linear congruential generator with a xorshift/rotate
//!   output permutation (PCG32 family)
//!
//! CRITICAL: Everything above this module draws only through [`Prng`], so a
//! stream's output depends on nothing but its state.

mod lcg64;
mod mwc32;

pub use lcg64::Lcg64;
pub use mwc32::Mwc32;

use crate::codec::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;
pub(crate) const TWO_POW_NEG_32: f64 = 1.0 / TWO_POW_32;
pub(crate) const TWO_POW_NEG_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Widest `max - min` span [`Prng::range`] can sample without bias loss
pub const MAX_RANGE_WIDTH: i64 = 1 << 32;

/// Identifies a generator algorithm in configs and snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Mwc32,
    Lcg64,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Mwc32 => write!(f, "Mwc32"),
            Algorithm::Lcg64 => write!(f, "Lcg64"),
        }
    }
}

/// Capability set shared by every generator
///
/// Implementors supply seeding, the state transition, the current 32-bit
/// output, 53-bit floats, splitting and encoding. Everything else is derived
/// from [`Prng::next_u32`].
///
/// # Example
/// ```
/// use seedstream_core::{Mwc32, Prng};
///
/// let mut rng = Mwc32::from_seed_str("test");
/// let values: Vec<i64> = (0..5).map(|_| rng.range(0, 100)).collect();
/// assert_eq!(values, vec![42, 78, 60, 67, 51]);
/// ```
pub trait Prng: Clone + fmt::Debug + PartialEq {
    /// Algorithm tag recorded in configs and snapshots
    const ALGORITHM: Algorithm;

    /// Derive a state deterministically from an arbitrary string
    fn from_seed_str(seed: &str) -> Self;

    /// Derive a state from a fresh random UUID
    fn from_entropy() -> Self {
        let source = uuid::Uuid::new_v4().to_string();
        tracing::debug!(algorithm = %Self::ALGORITHM, source = %source, "seeding from entropy");
        Self::from_seed_str(&source)
    }

    /// Advance the state by one step without reading output
    fn step(&mut self);

    /// 32-bit output for the current state
    fn current_u32(&self) -> u32;

    /// 53-bit precision float in [0, 1) from two draws
    fn next_f53(&mut self) -> f64;

    /// Produce a child state, consuming draws from `self`
    ///
    /// The parent MUST keep using its advanced state afterwards; reusing a
    /// pre-split copy would replay the draws the child was built from.
    fn split(&mut self) -> Self;

    /// Lossless token for the current state
    fn encode(&self) -> String;

    /// Restore a state from [`Prng::encode`] output
    fn decode(token: &str) -> Result<Self, DecodeError>;

    /// Step and return the next 32-bit output
    fn next_u32(&mut self) -> u32 {
        self.step();
        self.current_u32()
    }

    /// Step and return the next output as a signed 32-bit value
    fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Step and return a float in [0, 1) with 32 bits of precision
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 * TWO_POW_NEG_32
    }

    /// Uniform integer in [min, max)
    ///
    /// Rejection sampling against the threshold `max % (max - min)`. When
    /// `max <= min` the call returns `max` without drawing.
    ///
    /// # Panics
    /// Panics if `max - min` exceeds [`MAX_RANGE_WIDTH`]
    fn range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return max;
        }
        assert!(
            matches!(max.checked_sub(min), Some(width) if width <= MAX_RANGE_WIDTH),
            "range width must not exceed 2^32"
        );
        let bound = max - min;

        // Based on https://www.pcg-random.org/posts/bounded-rands.html
        let threshold = max % bound;
        loop {
            let r = self.next_u32() as i64;
            if r >= threshold {
                return min + r % bound;
            }
        }
    }

    /// Skip `times` draws
    fn advance(&mut self, times: usize) {
        for _ in 0..times {
            self.step();
        }
    }
}
