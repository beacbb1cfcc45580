//! Trending search storage.
//!
//! Trending data is best-effort: callers log failures and carry on.

mod appwrite;
mod local;

pub use appwrite::{AppwriteConfig, AppwriteStore};
pub use local::LocalStore;

use crate::model::{Movie, TrendingRecord, TrendingStoreError};
use async_trait::async_trait;

/// Default number of trending records shown.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Aggregated search-frequency storage.
#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Count one search for `term`, creating the record on first sight.
    ///
    /// `term` is matched after [`normalize_term`](crate::model::normalize_term);
    /// a term that normalizes to nothing is ignored.
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), TrendingStoreError>;

    /// Up to `limit` records, highest count first.
    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingStoreError>;
}

/// Store used when trending is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

#[async_trait]
impl TrendingStore for DisabledStore {
    async fn record_search(&self, _term: &str, _movie: &Movie) -> Result<(), TrendingStoreError> {
        Ok(())
    }

    async fn list_trending(&self, _limit: usize) -> Result<Vec<TrendingRecord>, TrendingStoreError> {
        Ok(Vec::new())
    }
}
