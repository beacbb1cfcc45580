//! Trending store backed by a local redb file.
//!
//! One table keyed by normalized search term; values are JSON-encoded
//! [`TrendingRecord`]s. Increments run inside a single write transaction, so
//! concurrent searches for the same term never lose a count.

use super::TrendingStore;
use crate::model::{normalize_term, Movie, TrendingRecord, TrendingStoreError};
use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("trending");

fn storage<E: std::fmt::Display>(e: E) -> TrendingStoreError {
    TrendingStoreError::Storage(e.to_string())
}

/// [`TrendingStore`] persisted in an embedded database file.
#[derive(Clone)]
pub struct LocalStore {
    db: Arc<Database>,
    image_base_url: String,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("image_base_url", &self.image_base_url)
            .finish_non_exhaustive()
    }
}

impl LocalStore {
    /// Open or create the database at `path`, creating parent directories.
    pub fn open(path: &Path, image_base_url: impl Into<String>) -> Result<Self, TrendingStoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(storage)?;
        }
        let db = Database::create(path).map_err(storage)?;

        // Ensure the table exists so read transactions can open it.
        let write_txn = db.begin_write().map_err(storage)?;
        {
            let _table = write_txn.open_table(TABLE).map_err(storage)?;
        }
        write_txn.commit().map_err(storage)?;

        Ok(Self {
            db: Arc::new(db),
            image_base_url: image_base_url.into(),
        })
    }

    fn record_blocking(
        db: &Database,
        term: &str,
        movie_id: u64,
        poster_url: Option<String>,
    ) -> Result<u64, TrendingStoreError> {
        let write_txn = db.begin_write().map_err(storage)?;
        let count = {
            let mut table = write_txn.open_table(TABLE).map_err(storage)?;
            let existing = table
                .get(term)
                .map_err(storage)?
                .map(|value| value.value().to_vec());

            let record = match existing {
                Some(bytes) => {
                    let mut record: TrendingRecord = serde_json::from_slice(&bytes)?;
                    record.count += 1;
                    record
                }
                None => TrendingRecord {
                    id: term.to_string(),
                    search_term: term.to_string(),
                    count: 1,
                    movie_id,
                    poster_url,
                },
            };
            let encoded = serde_json::to_vec(&record)?;
            table.insert(term, encoded.as_slice()).map_err(storage)?;
            record.count
        };
        write_txn.commit().map_err(storage)?;
        Ok(count)
    }

    fn list_blocking(db: &Database, limit: usize) -> Result<Vec<TrendingRecord>, TrendingStoreError> {
        let read_txn = db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(TABLE).map_err(storage)?;

        let mut records = Vec::new();
        for entry in table.iter().map_err(storage)? {
            let (_key, value) = entry.map_err(storage)?;
            records.push(serde_json::from_slice::<TrendingRecord>(value.value())?);
        }

        records.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.search_term.cmp(&b.search_term))
        });
        records.truncate(limit);
        Ok(records)
    }
}

#[async_trait]
impl TrendingStore for LocalStore {
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), TrendingStoreError> {
        let Some(term) = normalize_term(term) else {
            return Ok(());
        };
        let db = Arc::clone(&self.db);
        let movie_id = movie.id;
        let poster_url = movie.poster_url(&self.image_base_url);

        tokio::task::spawn_blocking(move || {
            let count = Self::record_blocking(&db, &term, movie_id, poster_url)?;
            debug!(term = %term, count, "Recorded trending search");
            Ok::<(), TrendingStoreError>(())
        })
        .await
        .map_err(storage)?
    }

    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingStoreError> {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || Self::list_blocking(&db, limit))
            .await
            .map_err(storage)?
    }
}
