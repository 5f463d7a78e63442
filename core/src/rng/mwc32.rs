//! Alea multiply-with-carry generator
//!
//! # Algorithm
//!
//! Three 32-bit fractional words and a carry, advanced by
//!
//! ```text
//! t   = 2091639 * s0 + c * 2^-32
//! s0' = s1
//! s1' = s2
//! c'  = floor(t)
//! s2' = t - c'
//! ```
//!
//! Every fractional word is an exact multiple of 2^-32, so the state is held
//! as u32 numerators and the recurrence runs in integer arithmetic. This
//! reproduces the floating-point reference bit for bit. Period is about
//! 2^116.
//!
//! # Seeding
//!
//! Seeds are hashed with "mash", a floating-point character mixer. The mash
//! arithmetic must stay in f64 to keep seeds compatible.

use super::{Algorithm, Prng, TWO_POW_NEG_32, TWO_POW_NEG_53};
use crate::codec::{self, DecodeError};
use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 2_091_639;
const MASH_INIT: f64 = 4_022_871_197.0; // 0xefc8249d
const MASH_FACTOR: f64 = 0.02519603282416938;
const SPACE: u16 = 32;
const WORDS: usize = 4;

/// ToUint32 for the non-negative finite values mash produces
fn to_uint32(x: f64) -> u32 {
    x as u64 as u32
}

struct Mash {
    n: f64,
}

impl Mash {
    fn new() -> Self {
        Self { n: MASH_INIT }
    }

    fn mix(&mut self, code: u16) {
        let mut n = self.n + code as f64;
        let mut h = MASH_FACTOR * n;
        n = to_uint32(h) as f64;
        h -= n;
        h *= n;
        n = to_uint32(h) as f64;
        h -= n;
        self.n = n + h * super::TWO_POW_32;
    }

    fn mix_str(&mut self, seed: &str) {
        for unit in seed.encode_utf16() {
            self.mix(unit);
        }
    }

    fn value(&self) -> u32 {
        to_uint32(self.n)
    }
}

/// Alea generator state
///
/// # Example
/// ```
/// use seedstream_core::{Mwc32, Prng};
///
/// let mut rng = Mwc32::from_seed_str("ii");
/// assert_eq!(rng.next_f64(), 0.7371923720929772);
///
/// let token = rng.encode();
/// let mut restored = Mwc32::decode(&token).unwrap();
/// assert_eq!(restored.next_u32(), rng.next_u32());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mwc32 {
    s0: u32,
    s1: u32,
    s2: u32,
    carry: u32,
}

impl Mwc32 {
    /// Build a state from raw words `[s0, s1, s2, carry]`
    ///
    /// `s0..s2` are numerators over 2^32.
    pub fn from_words(words: [u32; 4]) -> Self {
        let [s0, s1, s2, carry] = words;
        Self { s0, s1, s2, carry }
    }

    /// Raw words `[s0, s1, s2, carry]`
    pub fn words(&self) -> [u32; 4] {
        [self.s0, self.s1, self.s2, self.carry]
    }
}

impl Prng for Mwc32 {
    const ALGORITHM: Algorithm = Algorithm::Mwc32;

    fn from_seed_str(seed: &str) -> Self {
        let mut mash = Mash::new();

        mash.mix(SPACE);
        let mut s0 = mash.value();
        mash.mix(SPACE);
        let mut s1 = mash.value();
        mash.mix(SPACE);
        let mut s2 = mash.value();

        mash.mix_str(seed);
        s0 = s0.wrapping_sub(mash.value());
        mash.mix_str(seed);
        s1 = s1.wrapping_sub(mash.value());
        mash.mix_str(seed);
        s2 = s2.wrapping_sub(mash.value());

        Self {
            s0,
            s1,
            s2,
            carry: 1,
        }
    }

    fn step(&mut self) {
        let t = MULTIPLIER * self.s0 as u64 + self.carry as u64;
        self.s0 = self.s1;
        self.s1 = self.s2;
        self.carry = (t >> 32) as u32;
        self.s2 = t as u32;
    }

    fn current_u32(&self) -> u32 {
        self.s2
    }

    fn next_f53(&mut self) -> f64 {
        let low = self.next_u32();
        let high = self.next_u32();
        low as f64 * TWO_POW_NEG_32 + (high >> 11) as f64 * TWO_POW_NEG_53
    }

    fn split(&mut self) -> Self {
        // Alea outputs its state words directly, so raw draws would leave the
        // child correlated with the parent. XOR pairs of draws instead.
        let mut pair = || self.next_u32() ^ self.next_u32();
        let carry = pair();
        let s2 = pair();
        let s1 = pair();
        let s0 = pair();

        Self { s0, s1, s2, carry }
    }

    fn encode(&self) -> String {
        codec::encode_u32_words(&self.words())
    }

    fn decode(token: &str) -> Result<Self, DecodeError> {
        let words = codec::decode_u32_words(token, WORDS)?;
        Ok(Self::from_words([words[0], words[1], words[2], words[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ii_words() {
        let rng = Mwc32::from_seed_str("ii");
        assert_eq!(rng.words(), [3659807640, 3962663784, 171828794, 1]);
    }

    #[test]
    fn test_seed_ii_floats() {
        let mut rng = Mwc32::from_seed_str("ii");
        let expected = [
            0.7371923720929772,
            0.9694351863581687,
            0.22013063845224679,
            0.31599166593514383,
            0.4441180245485157,
        ];
        for value in expected {
            assert_eq!(rng.next_f64(), value);
        }
    }

    #[test]
    fn test_empty_seed_is_valid() {
        let mut rng = Mwc32::from_seed_str("");
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_non_ascii_seed_uses_utf16_units() {
        let a = Mwc32::from_seed_str("é");
        let b = Mwc32::from_seed_str("e");
        assert_ne!(a, b);
    }

    #[test]
    fn test_step_carry_from_large_words() {
        let mut rng = Mwc32::from_words([u32::MAX, 0, 0, u32::MAX]);
        rng.step();
        let t = MULTIPLIER * u32::MAX as u64 + u32::MAX as u64;
        assert_eq!(rng.words(), [0, 0, t as u32, (t >> 32) as u32]);
    }

    #[test]
    fn test_int32_reinterprets_bits() {
        let mut rng = Mwc32::from_seed_str("test");
        assert_eq!(rng.next_i32(), -1957524454);
        assert_eq!(rng.next_i32(), -1257847118);
    }

    #[test]
    fn test_fract53_value() {
        let mut rng = Mwc32::from_seed_str("test");
        assert_eq!(rng.next_f53(), 0.5442283215716328);
    }

    #[test]
    fn test_split_vectors() {
        let mut parent = Mwc32::from_seed_str("test");
        let child = parent.split();

        assert_eq!(parent.words(), [2917767438, 1680916785, 1493440451, 844763]);
        assert_eq!(
            child.words(),
            [1026873074, 3398301273, 2535937311, 1045711528]
        );
    }

    #[test]
    fn test_split_consumes_eight_draws() {
        let mut split = Mwc32::from_seed_str("draws");
        let mut stepped = split.clone();

        split.split();
        stepped.advance(8);
        assert_eq!(split, stepped);
    }

    #[test]
    fn test_decode_rejects_short_token() {
        assert!(matches!(
            Mwc32::decode("ef51217d"),
            Err(DecodeError::InvalidLength {
                expected: 32,
                actual: 8
            })
        ));
    }
}
