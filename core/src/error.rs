//! Error types shared across the crate

use crate::codec::DecodeError;
use crate::rng::Algorithm;
use thiserror::Error;

/// Errors returned by seed handling, sampling, config and checkpoints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    #[error("Failed to decode seed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch {
        expected: Algorithm,
        found: Algorithm,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
