//! One-off embedding of comparison texts for use as `--defaults`.

use anyhow::Context;
use ember_embeddings::{ComparisonEntry, EmbeddingProvider, EmbeddingRequest, MAX_COMPARISONS};
use tracing::info;

use crate::defaults;

/// Embed `texts` in order and pair each with its vector.
///
/// An empty list means the built-in default texts.
pub async fn seed_entries(
    provider: &dyn EmbeddingProvider,
    texts: Vec<String>,
) -> anyhow::Result<Vec<ComparisonEntry>> {
    let texts = if texts.is_empty() {
        defaults::default_texts()
    } else {
        texts
    };
    if texts.len() > MAX_COMPARISONS {
        anyhow::bail!(
            "{} texts given, at most {MAX_COMPARISONS} comparisons are supported",
            texts.len()
        );
    }

    let requests = texts.iter().cloned().map(EmbeddingRequest::new).collect();
    let responses = provider
        .embed_batch(requests)
        .await
        .context("cannot embed comparison texts")?;

    info!("Embedded {} comparison texts", responses.len());

    Ok(texts
        .into_iter()
        .zip(responses)
        .map(|(label, response)| ComparisonEntry::new(label, response.embedding))
        .collect())
}
