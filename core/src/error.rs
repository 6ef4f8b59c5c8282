//! Errors raised by the vectorization and similarity pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Cosine similarity over vectors of different length.
    #[error("cannot compare vectors of length {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Cosine similarity over zero-length vectors.
    #[error("cannot compare empty vectors")]
    EmptyVector,

    #[error("corpus contains no documents")]
    EmptyCorpus,

    /// The corpus changed after the last IDF pass.
    #[error("corpus statistics are stale, recompute IDF before extracting vectors")]
    StaleStatistics,

    #[error("invalid punctuation marker set: {0}")]
    Pattern(#[from] regex::Error),
}
