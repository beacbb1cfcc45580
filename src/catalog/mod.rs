//! Movie catalog client.
//!
//! [`MovieCatalog`] is the seam between the controller's effects and the
//! network. [`TmdbClient`] is the production implementation; URL construction
//! ([`endpoint`]) and body interpretation ([`response`]) are pure and tested
//! without I/O.

pub mod endpoint;
pub mod response;
mod tmdb;

pub use endpoint::CatalogRequest;
pub use tmdb::TmdbClient;

use crate::config::Secret;
use crate::model::{CatalogQuery, FetchError, MoviePage, PageNumber};
use async_trait::async_trait;
use std::time::Duration;

/// Default catalog API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default language for discover requests.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default poster image root (w500 renditions).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Highest page the catalog will serve.
pub const MAX_CATALOG_PAGE: u32 = 500;

/// A source of paginated movie results.
///
/// One call is one attempt: implementations never retry.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page for `query`.
    async fn fetch_movies(
        &self,
        query: &CatalogQuery,
        page: PageNumber,
    ) -> Result<MoviePage, FetchError>;
}

/// Connection settings for the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// API root, e.g. `https://api.themoviedb.org/3`.
    pub base_url: String,
    /// Bearer token. Requests go out unauthenticated when absent.
    pub api_token: Option<Secret>,
    /// Language tag sent with discover requests.
    pub language: String,
    /// Per-request timeout; transport default when `None`.
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: None,
        }
    }
}
