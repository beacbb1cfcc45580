//! HTTP implementation of [`MovieCatalog`] for TMDB-compatible APIs.

use super::{endpoint::CatalogRequest, response, CatalogConfig, MovieCatalog};
use crate::model::{CatalogQuery, FetchError, MoviePage, PageNumber};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use tracing::{debug, warn};

/// Catalog client over `reqwest`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl TmdbClient {
    /// Build a client from explicit configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.api_token.is_none() {
            warn!("No catalog API token configured; catalog requests will be unauthenticated");
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn fetch_movies(
        &self,
        query: &CatalogQuery,
        page: PageNumber,
    ) -> Result<MoviePage, FetchError> {
        let request = CatalogRequest::for_query(query, page, &self.config.language);
        let url = request
            .url(&self.config.base_url)
            .map_err(FetchError::network)?;

        debug!(path = request.path, page = page.get(), "Sending catalog request");

        let mut builder = self
            .http
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token.expose());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: Some(status.as_u16()),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            status: Some(status.as_u16()),
            reason: format!("failed to read body: {e}"),
        })?;

        response::interpret_body(status.as_u16(), &body)
    }
}
