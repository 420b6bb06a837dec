//! The comparison set a query is ranked against.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Embedding;
use crate::error::ComparisonError;
use crate::similarity::{SimilarityResult, cosine_similarity};

/// Upper bound on the number of comparison texts.
pub const MAX_COMPARISONS: usize = 10;

/// A labelled, already-embedded comparison text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// The original text, shown next to its score.
    pub label: String,

    /// Embedding of `label`.
    pub vector: Embedding,
}

impl ComparisonEntry {
    /// Create a new comparison entry.
    pub fn new(label: impl Into<String>, vector: Embedding) -> Self {
        Self {
            label: label.into(),
            vector,
        }
    }
}

/// An ordered collection of comparison entries.
///
/// Entries are never edited in place. Every mutation builds the new list in
/// full and then swaps it in, so a [`snapshot`](Self::snapshot) taken before
/// the swap keeps seeing the old set.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    entries: Arc<[ComparisonEntry]>,
}

impl ComparisonSet {
    /// Create a set from the given entries, keeping their order.
    pub fn new(entries: Vec<ComparisonEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Create a set with no entries.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Score `query` against every entry.
    ///
    /// The results line up with [`entries`](Self::entries): same length, same
    /// order. They are deliberately left unsorted.
    pub fn rank(&self, query: &[f64]) -> Vec<SimilarityResult> {
        debug!("Ranking query against {} comparison entries", self.entries.len());

        self.entries
            .iter()
            .map(|entry| SimilarityResult::new(&entry.label, cosine_similarity(query, &entry.vector)))
            .collect()
    }

    /// Replace every entry at once.
    pub fn replace_all(&mut self, entries: Vec<ComparisonEntry>) {
        info!("Replacing comparison set with {} entries", entries.len());
        self.entries = entries.into();
    }

    /// Replace the set from a parallel list of texts and their embeddings.
    ///
    /// On error the current entries are left untouched.
    pub fn replace_from_batch(
        &mut self,
        texts: Vec<String>,
        vectors: Vec<Embedding>,
    ) -> Result<(), ComparisonError> {
        if texts.len() != vectors.len() {
            return Err(ComparisonError::LengthMismatch {
                texts: texts.len(),
                vectors: vectors.len(),
            });
        }
        if texts.is_empty() {
            return Err(ComparisonError::EmptyBatch);
        }
        if texts.len() > MAX_COMPARISONS {
            return Err(ComparisonError::TooManyEntries {
                count: texts.len(),
                max: MAX_COMPARISONS,
            });
        }

        let entries = texts
            .into_iter()
            .zip(vectors)
            .map(|(label, vector)| ComparisonEntry { label, vector })
            .collect();
        self.replace_all(entries);

        Ok(())
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// A cheap handle on the current entries that survives later replacement.
    pub fn snapshot(&self) -> Arc<[ComparisonEntry]> {
        Arc::clone(&self.entries)
    }

    /// Labels of all entries, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<ComparisonEntry>> for ComparisonSet {
    fn from(entries: Vec<ComparisonEntry>) -> Self {
        Self::new(entries)
    }
}
