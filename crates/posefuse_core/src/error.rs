//! Error types for the fusion engine.

use thiserror::Error;

/// Errors surfaced by the fusion engine. Every failure here is a
/// deterministic function of the input data; retrying with the same
/// input reproduces the same failure.
#[derive(Debug, Error)]
pub enum FuseError {
    #[error("sequence has the wrong joint layout: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("pose sequence has zero frames")]
    EmptySequence,

    #[error("no blend stored for weight pair (wA={w_a}, wB={w_b})")]
    WeightPairNotFound { w_a: f64, w_b: f64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read .npy array: {0}")]
    NpyRead(#[from] ndarray_npy::ReadNpyError),

    #[error("failed to write .npy array: {0}")]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),

    #[error("failed to read .npz container: {0}")]
    NpzRead(#[from] ndarray_npy::ReadNpzError),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, FuseError>;
