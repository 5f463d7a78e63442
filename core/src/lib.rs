//! Seedstream Core - Deterministic, Serializable Random Streams
//!
//! Reproducible pseudo-random streams whose complete state fits in a short
//! token, so randomness can be saved, restored and split into independent
//! sub-streams.
//!
//! # Architecture
//!
//! - **codec**: Fixed-width word <-> hex token conversion
//! - **rng**: The `Prng` trait and its generators (`Mwc32`, `Lcg64`)
//! - **sampling**: Integers, rolls, shuffles, picks and samples over any `Prng`
//! - **seed**: Encoded state tokens
//! - **wrapper**: Stateful stream with automatic state threading
//! - **functional**: Explicit seed-in, seed-out API
//! - **config**: Declarative stream configuration
//! - **checkpoint**: Checksummed JSON snapshots
//!
//! # Critical Invariants
//!
//! 1. Same seed, same draws: output depends only on state
//! 2. `decode(encode(s)) == s` for every reachable state
//! 3. One state, one owner: split before handing a stream elsewhere
//!
//! Not suitable for cryptographic use.

// Module declarations
pub mod checkpoint;
pub mod codec;
pub mod config;
pub mod error;
pub mod functional;
pub mod rng;
pub mod sampling;
pub mod seed;
pub mod wrapper;

// Re-exports for convenience
pub use checkpoint::StreamSnapshot;
pub use codec::DecodeError;
pub use config::{SeedSource, StreamConfig};
pub use error::RandomError;
pub use rng::{Algorithm, Lcg64, Mwc32, Prng};
pub use sampling::UniqueSampler;
pub use seed::{Seed, SeedKind};
pub use wrapper::{RandomWrapper, UniqueSamples};
