//! Trending store backed by a hosted document database (Appwrite REST API).
//!
//! Each trending record is one document in a collection with the attributes
//! `searchTerm`, `count`, `movie_id` and `poster_url`.
//!
//! The REST API has no increment operation: a repeat search reads the
//! document and patches `count + 1`, so two clients recording the same term
//! at once can lose an increment. Use the local store where exact counts
//! matter.

use super::TrendingStore;
use crate::config::Secret;
use crate::model::{normalize_term, Movie, TrendingRecord, TrendingStoreError};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Connection settings for the document database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppwriteConfig {
    /// API root, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    /// Project id sent as `X-Appwrite-Project`.
    pub project_id: String,
    /// Database holding the trending collection.
    pub database_id: String,
    /// Trending collection id.
    pub collection_id: String,
    /// Server API key sent as `X-Appwrite-Key`, if any.
    pub api_key: Option<Secret>,
    /// Image root used to build poster URLs for new records.
    pub image_base_url: String,
}

/// Document as stored in the collection.
#[derive(Debug, Clone, Deserialize)]
struct TrendingDocument {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "searchTerm")]
    search_term: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    movie_id: u64,
    #[serde(default)]
    poster_url: Option<String>,
}

impl From<TrendingDocument> for TrendingRecord {
    fn from(doc: TrendingDocument) -> Self {
        TrendingRecord {
            id: doc.id,
            search_term: doc.search_term,
            count: doc.count,
            movie_id: doc.movie_id,
            poster_url: doc.poster_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingDocument>,
}

#[derive(Debug, Serialize)]
struct NewTrendingDocument<'a> {
    #[serde(rename = "searchTerm")]
    search_term: &'a str,
    count: u64,
    movie_id: u64,
    poster_url: Option<String>,
}

/// [`TrendingStore`] over the Appwrite databases REST API.
#[derive(Debug, Clone)]
pub struct AppwriteStore {
    http: reqwest::Client,
    config: AppwriteConfig,
}

impl AppwriteStore {
    /// Build a store client from explicit configuration.
    pub fn new(config: AppwriteConfig) -> Result<Self, TrendingStoreError> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            config,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            self.config.collection_id
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => builder.header("X-Appwrite-Key", key.expose()),
            None => builder,
        }
    }

    async fn list_documents(&self, queries: &[String]) -> Result<Vec<TrendingDocument>, TrendingStoreError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let request = self.authorized(self.http.get(self.documents_url()).query(&params));
        let response = ensure_success(request.send().await?).await?;
        let list: DocumentList = serde_json::from_str(&response.text().await?)?;
        Ok(list.documents)
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingDocument>, TrendingStoreError> {
        let equal = json!({"method": "equal", "attribute": "searchTerm", "values": [term]});
        let docs = self.list_documents(&[equal.to_string()]).await?;
        Ok(docs.into_iter().next())
    }

    /// Patch `count` to one more than the value read in `doc`. Not atomic.
    async fn update_count(&self, doc: &TrendingDocument) -> Result<(), TrendingStoreError> {
        let url = format!("{}/{}", self.documents_url(), doc.id);
        let body = json!({"data": {"count": doc.count + 1}});
        let request = self.authorized(self.http.patch(url).json(&body));
        ensure_success(request.send().await?).await?;
        debug!(term = %doc.search_term, count = doc.count + 1, "Incremented trending record");
        Ok(())
    }

    async fn create(&self, term: &str, movie: &Movie) -> Result<(), TrendingStoreError> {
        let data = NewTrendingDocument {
            search_term: term,
            count: 1,
            movie_id: movie.id,
            poster_url: movie.poster_url(&self.config.image_base_url),
        };
        let body = json!({"documentId": "unique()", "data": data});
        let request = self.authorized(self.http.post(self.documents_url()).json(&body));
        ensure_success(request.send().await?).await?;
        debug!(term, movie_id = movie.id, "Created trending record");
        Ok(())
    }
}

/// Map non-2xx responses to [`TrendingStoreError::Http`].
async fn ensure_success(response: Response) -> Result<Response, TrendingStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(TrendingStoreError::Http {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TrendingStore for AppwriteStore {
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), TrendingStoreError> {
        let Some(term) = normalize_term(term) else {
            return Ok(());
        };
        match self.find_by_term(&term).await? {
            Some(doc) => self.update_count(&doc).await,
            None => self.create(&term, movie).await,
        }
    }

    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingStoreError> {
        let queries = [
            json!({"method": "limit", "values": [limit]}).to_string(),
            json!({"method": "orderDesc", "attribute": "count"}).to_string(),
        ];
        let docs = self.list_documents(&queries).await?;
        Ok(docs.into_iter().take(limit).map(TrendingRecord::from).collect())
    }
}
