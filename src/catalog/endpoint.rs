//! Catalog endpoint construction (pure).

use crate::model::{CatalogQuery, PageNumber};
use reqwest::Url;

/// Path and query parameters for one catalog call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Path relative to the API root, starting with `/`.
    pub path: &'static str,
    /// Query parameters in wire order.
    pub params: Vec<(&'static str, String)>,
}

impl CatalogRequest {
    /// Build the request for `query` at `page`.
    ///
    /// Search mode sends only the text and page; discover mode ignores the
    /// query and asks for popularity-sorted results in `language`.
    pub fn for_query(query: &CatalogQuery, page: PageNumber, language: &str) -> Self {
        match query {
            CatalogQuery::Search(text) => Self {
                path: "/search/movie",
                params: vec![("query", text.clone()), ("page", page.to_string())],
            },
            CatalogQuery::Discover => Self {
                path: "/discover/movie",
                params: vec![
                    ("include_video", "false".to_string()),
                    ("language", language.to_string()),
                    ("page", page.to_string()),
                    ("sort_by", "popularity.desc".to_string()),
                ],
            },
        }
    }

    /// Absolute, URL-encoded request URL under `base_url`.
    pub fn url(&self, base_url: &str) -> Result<Url, String> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        Url::parse_with_params(&raw, self.params.iter().map(|(k, v)| (*k, v.as_str())))
            .map_err(|e| format!("invalid catalog URL {raw:?}: {e}"))
    }
}
