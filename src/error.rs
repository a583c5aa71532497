//! Error types shared by the selection algorithms and the containers.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the public call boundary.
///
/// Every variant is a caller error: nothing is retried internally and no
/// partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Selection was attempted on a zero-length collection.
    #[error("cannot select from an empty collection")]
    EmptyInput,

    /// The 1-based rank lies outside `1..=len`.
    #[error("rank {k} is out of range 1..={len}")]
    InvalidRank { k: usize, len: usize },

    /// `pop`, `peek` or `dequeue` on an empty container.
    #[error("{0} is empty")]
    EmptyCollection(&'static str),
}

impl Error {
    /// Creates a new `InvalidRank` error
    pub fn invalid_rank(k: usize, len: usize) -> Self {
        Error::InvalidRank { k, len }
    }

    /// Creates a new `EmptyCollection` error naming the container
    pub fn empty_collection(name: &'static str) -> Self {
        Error::EmptyCollection(name)
    }
}
