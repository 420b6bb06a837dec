//! Error types for the embeddings system.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur in the embeddings system.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// No API key was supplied to the provider.
    #[error("embedding provider unavailable: API key not configured")]
    ProviderUnavailable,

    /// The request never produced an HTTP response.
    #[error("embedding request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("embedding API returned status {status}: {body}")]
    ResponseStatus { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("invalid embedding response: {0}")]
    ResponseInvalid(#[from] serde_json::Error),

    /// The response decoded but held no embedding entries.
    #[error("no embedding data returned")]
    NoData,

    /// Vectors of different dimensionality were compared.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A zero vector has no direction to compare.
    #[error("degenerate zero-magnitude vector")]
    DegenerateVector,
}

/// Errors raised when replacing the contents of a comparison set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("comparison batch is empty")]
    EmptyBatch,

    #[error("too many comparison entries: {count}, max {max}")]
    TooManyEntries { count: usize, max: usize },

    #[error("got {texts} texts but {vectors} vectors")]
    LengthMismatch { texts: usize, vectors: usize },
}
