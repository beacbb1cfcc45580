//! Trending search records.

use super::movie::MovieId;
use serde::{Deserialize, Serialize};

/// Aggregated count of how often a search term produced results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRecord {
    /// Store-assigned identifier.
    pub id: String,
    /// Normalized search term (see [`normalize_term`]).
    pub search_term: String,
    /// Number of recorded searches.
    pub count: u64,
    /// Catalog id of the top result when the record was created.
    pub movie_id: MovieId,
    /// Poster URL of that movie, if it had one.
    pub poster_url: Option<String>,
}

/// Normalize a search term for exact matching.
///
/// Trims, collapses internal whitespace runs to a single space, and lowercases.
/// Returns `None` when nothing is left.
pub fn normalize_term(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}
