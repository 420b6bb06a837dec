//! Built-in comparison texts and the JSON file of their pre-computed vectors.

use std::path::Path;

use anyhow::Context;
use ember_embeddings::{ComparisonEntry, MAX_COMPARISONS};

/// Comparison texts used until the user configures their own.
pub const DEFAULT_COMPARISON_TEXTS: [&str; 2] = [
    "I hate the state of california.",
    "Washington is a really great place.",
];

/// Default texts as owned strings, ready for an embedding batch.
pub fn default_texts() -> Vec<String> {
    DEFAULT_COMPARISON_TEXTS.iter().map(ToString::to_string).collect()
}

/// Read pre-computed comparison entries, as printed by `ember seed`.
pub fn load_entries(path: &Path) -> anyhow::Result<Vec<ComparisonEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read defaults file {}", path.display()))?;
    parse_entries(&content)
        .with_context(|| format!("invalid defaults file {}", path.display()))
}

/// Parse and validate a JSON array of comparison entries.
pub fn parse_entries(content: &str) -> anyhow::Result<Vec<ComparisonEntry>> {
    let entries: Vec<ComparisonEntry> = serde_json::from_str(content)?;

    if entries.is_empty() {
        anyhow::bail!("no comparison entries");
    }
    if entries.len() > MAX_COMPARISONS {
        anyhow::bail!(
            "{} comparison entries, at most {MAX_COMPARISONS} allowed",
            entries.len()
        );
    }
    if let Some(entry) = entries.iter().find(|e| e.vector.is_empty()) {
        anyhow::bail!("entry {:?} has an empty vector", entry.label);
    }
    let dimension = entries[0].vector.len();
    if let Some(entry) = entries.iter().find(|e| e.vector.len() != dimension) {
        anyhow::bail!(
            "entry {:?} has {} dimensions, expected {dimension}",
            entry.label,
            entry.vector.len()
        );
    }

    Ok(entries)
}

/// Dimension of `entries` when it differs from `expected`.
///
/// Query vectors from a provider whose model disagrees with the file would
/// score 0.0 against every entry.
pub fn dimension_mismatch(entries: &[ComparisonEntry], expected: usize) -> Option<usize> {
    entries
        .first()
        .map(|entry| entry.vector.len())
        .filter(|&dimension| dimension != expected)
}

/// Render entries in the format [`parse_entries`] reads.
pub fn render_entries(entries: &[ComparisonEntry]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
