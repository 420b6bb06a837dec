//! # Embeddings
//!
//! Embedding generation and cosine-similarity ranking for Ember.
//!
//! ## Features
//!
//! - **Embedding Generation**: Convert text to dense vectors through a remote API
//! - **Similarity Scoring**: Cosine similarity with safe fallbacks
//! - **Comparison Sets**: Rank a query against a small ordered set of texts
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Embeddings                                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  EmbeddingProvider ──► Embedding ──► ComparisonSet              │
//! │       │                                   │                     │
//! │       ▼                                   ▼                     │
//! │  OpenAIProvider                    SimilarityResult             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod comparison;
pub mod error;
pub mod provider;
pub mod similarity;

pub use comparison::{ComparisonEntry, ComparisonSet, MAX_COMPARISONS};
pub use error::{ComparisonError, EmbeddingError, Result};
pub use provider::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, OpenAIProvider};
pub use similarity::{SimilarityResult, best_match, cosine_similarity, try_cosine_similarity};

/// A dense vector embedding.
pub type Embedding = Vec<f64>;
