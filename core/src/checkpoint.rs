//! Checkpoint - Save/Load Stream State
//!
//! Captures a stream as a small JSON document so it can be persisted and
//! resumed exactly where it left off.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored stream produces the same draws as the
//!   stream it was captured from
//! - **Integrity**: The checksum must match the recorded algorithm and seed
//! - **Algorithm Matching**: A snapshot only restores into its own algorithm

use crate::error::RandomError;
use crate::rng::{Algorithm, Prng};
use crate::seed::{Seed, SeedKind};
use crate::wrapper::RandomWrapper;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Serializable stream state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSnapshot {
    /// Generator the seed belongs to
    pub algorithm: Algorithm,

    /// Encoded generator state
    pub seed: String,

    /// SHA256 over algorithm and seed (for validation)
    pub checksum: String,
}

/// Compute the SHA256 checksum recorded in a snapshot
pub fn compute_checksum(algorithm: Algorithm, seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(algorithm.to_string().as_bytes());
    hasher.update(b":");
    hasher.update(seed.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl StreamSnapshot {
    /// Snapshot the current state of `stream`
    pub fn capture<R: Prng>(stream: &RandomWrapper<R>) -> Self {
        let seed = stream.seed().into_token();
        let checksum = compute_checksum(R::ALGORITHM, &seed);
        tracing::debug!(algorithm = %R::ALGORITHM, checksum = %checksum, "captured stream snapshot");

        Self {
            algorithm: R::ALGORITHM,
            seed,
            checksum,
        }
    }

    pub fn to_json(&self) -> Result<String, RandomError> {
        serde_json::to_string(self).map_err(|e| {
            RandomError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        serde_json::from_str(json).map_err(|e| {
            RandomError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }

    /// Check the checksum against the recorded algorithm and seed
    pub fn validate(&self) -> Result<(), RandomError> {
        let actual = compute_checksum(self.algorithm, &self.seed);
        if actual != self.checksum {
            tracing::warn!(
                algorithm = %self.algorithm,
                expected = %self.checksum,
                actual = %actual,
                "snapshot checksum mismatch"
            );
            return Err(RandomError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }

    /// Seed recorded in the snapshot, after validation
    pub fn seed<R: Prng>(&self) -> Result<Seed, RandomError> {
        self.validate()?;
        if self.algorithm != R::ALGORITHM {
            tracing::warn!(
                expected = %self.algorithm,
                found = %R::ALGORITHM,
                "snapshot restored into wrong algorithm"
            );
            return Err(RandomError::AlgorithmMismatch {
                expected: self.algorithm,
                found: R::ALGORITHM,
            });
        }
        Ok(Seed::new(SeedKind::Next, self.seed.as_str()))
    }

    /// Rebuild the stream
    pub fn restore<R: Prng>(&self) -> Result<RandomWrapper<R>, RandomError> {
        let stream = RandomWrapper::from_seed(&self.seed::<R>()?)?;
        tracing::debug!(algorithm = %R::ALGORITHM, "restored stream snapshot");
        Ok(stream)
    }
}
