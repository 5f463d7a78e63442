//! Permuted 64-bit linear congruential generator (PCG32 family)
//!
//! # Algorithm
//!
//! State transition is a plain LCG, `s' = s * 6364136223846793005 + inc`
//! modulo 2^64, with an odd increment. Output runs the new state through a
//! xorshift followed by a state-dependent rotation.
//!
//! The xorshifted value is kept 37 bits wide through the rotation and only
//! truncated to 32 bits at the end. This differs from the textbook PCG32
//! output and is required for token compatibility.

use super::{Algorithm, Prng, TWO_POW_32, TWO_POW_NEG_53};
use crate::codec::{self, DecodeError};
use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const SEED_HEX_LEN: usize = 32;
const WORDS: usize = 2;

/// PCG-style generator state
///
/// # Example
/// ```
/// use seedstream_core::{Lcg64, Prng};
///
/// let mut rng = Lcg64::from_seed_str("e7e3c27f-ccca-4830-b700-83ab59a7a6b8");
/// assert_eq!(rng.next_u32(), 1456695950);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg64 {
    state: u64,
    increment: u64,
}

impl Lcg64 {
    /// Build a state from raw words; the increment is forced odd
    pub fn new(state: u64, increment: u64) -> Self {
        Self {
            state,
            increment: increment | 1,
        }
    }

    /// Raw state word
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Stream increment (always odd)
    pub fn increment(&self) -> u64 {
        self.increment
    }
}

impl Prng for Lcg64 {
    const ALGORITHM: Algorithm = Algorithm::Lcg64;

    fn from_seed_str(seed: &str) -> Self {
        let hex = codec::sanitize_hex_seed(seed, SEED_HEX_LEN);
        // sanitize_hex_seed only emits hex digits
        let state = u64::from_str_radix(&hex[..16], 16).unwrap_or(u64::MAX);
        let increment = u64::from_str_radix(&hex[16..], 16).unwrap_or(u64::MAX);

        let mut rng = Self::new(state, increment);
        // One step up front hides weak, mostly-padding seeds
        rng.step();
        rng
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    fn current_u32(&self) -> u32 {
        let s = self.state;
        let xorshifted = ((s >> 18) ^ s) >> 27;
        let rot = (s >> 59) as u32;
        let value = (xorshifted >> rot) | (xorshifted << (32u32.wrapping_sub(rot) & 31));
        value as u32
    }

    fn next_f53(&mut self) -> f64 {
        let low = self.next_u32();
        let high = self.next_u32() >> 11;
        (low as f64 + high as f64 * TWO_POW_32) * TWO_POW_NEG_53
    }

    fn split(&mut self) -> Self {
        let inc_low = self.next_u32() as u64;
        let inc_high = (self.next_u32() as u64) << 32;
        let state_low = self.next_u32() as u64;
        let state_high = (self.next_u32() as u64) << 32;

        Self::new(state_low | state_high, inc_low | inc_high)
    }

    fn encode(&self) -> String {
        codec::encode_u64_words(&[self.state, self.increment])
    }

    fn decode(token: &str) -> Result<Self, DecodeError> {
        let words = codec::decode_u64_words(token, WORDS)?;
        if words[1] & 1 == 0 {
            return Err(DecodeError::InvalidState(format!(
                "increment {:#x} must be odd",
                words[1]
            )));
        }
        Ok(Self {
            state: words[0],
            increment: words[1],
        })
    }
}
