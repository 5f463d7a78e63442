//! Fixed-width word codec
//!
//! Converts generator state words to and from opaque hex tokens. Every
//! encoded state passes through here, so the token format is defined in one
//! place for both algorithms.

mod hex;

pub use hex::{
    decode_u32_words, decode_u64_words, encode_u32_words, encode_u64_words,
    sanitize_hex_seed, DecodeError,
};
