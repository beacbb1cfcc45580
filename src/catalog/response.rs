//! Catalog response interpretation (pure).
//!
//! Turns a 2xx response body into a [`MoviePage`] or a [`FetchError`].
//! Transport status is checked by the caller before the body gets here.

use super::MAX_CATALOG_PAGE;
use crate::model::{FetchError, Movie, MoviePage, UPSTREAM_FALLBACK_MESSAGE};
use serde::Deserialize;

/// Wire shape of a catalog list response, including both failure dialects.
#[derive(Debug, Deserialize)]
struct RawCatalogResponse {
    #[serde(default)]
    results: Option<Vec<Movie>>,
    #[serde(default)]
    total_pages: Option<u32>,
    /// `"False"` signals failure; message in `Error`.
    #[serde(rename = "Response", default)]
    response: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    /// TMDB's own failure flag; message in `status_message`.
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status_message: Option<String>,
}

impl RawCatalogResponse {
    fn failure_message(&self) -> Option<String> {
        let flagged_false = self
            .response
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("false"));
        if flagged_false {
            return Some(non_empty_or_fallback(self.error.as_deref()));
        }
        if self.success == Some(false) {
            return Some(non_empty_or_fallback(self.status_message.as_deref()));
        }
        None
    }
}

fn non_empty_or_fallback(message: Option<&str>) -> String {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(UPSTREAM_FALLBACK_MESSAGE)
        .to_string()
}

/// Interpret a successful (2xx) response body.
///
/// - Undecodable JSON is a transport failure.
/// - A body flagged as failed is an upstream failure.
/// - Otherwise missing `results` means no results, and `total_pages`
///   defaults to 1, is raised to 1 when reported as 0, and is capped at
///   [`MAX_CATALOG_PAGE`].
pub fn interpret_body(status: u16, body: &str) -> Result<MoviePage, FetchError> {
    let raw: RawCatalogResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Transport {
            status: Some(status),
            reason: format!("undecodable catalog body: {e}"),
        })?;

    if let Some(message) = raw.failure_message() {
        return Err(FetchError::Upstream { message });
    }

    let total_pages = raw.total_pages.unwrap_or(1).clamp(1, MAX_CATALOG_PAGE);
    Ok(MoviePage::new(raw.results.unwrap_or_default(), total_pages))
}
