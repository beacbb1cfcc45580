//! Catalog domain types: queries, pages, and movies.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

// ===== CatalogQuery =====

/// What the catalog is asked for.
///
/// An empty (or whitespace-only) query means "discover popular movies";
/// anything else is a title search. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CatalogQuery {
    /// Popularity-sorted discovery, no search text.
    #[default]
    Discover,
    /// Title search with non-empty, trimmed text.
    Search(String),
}

impl CatalogQuery {
    /// Classify raw input text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Discover
        } else {
            Self::Search(trimmed.to_string())
        }
    }

    /// Search text, or `None` in discover mode.
    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::Discover => None,
            Self::Search(text) => Some(text),
        }
    }

    /// True for discover mode.
    pub fn is_discover(&self) -> bool {
        matches!(self, Self::Discover)
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discover => write!(f, "<discover>"),
            Self::Search(text) => write!(f, "{text}"),
        }
    }
}

// ===== PageNumber =====

/// 1-based page index. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Smart constructor: `None` for 0.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Raw page value (always >= 1).
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The following page, saturating at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding page, or `None` on page 1.
    pub fn prev(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Movie =====

/// Numeric catalog identifier of a movie.
pub type MovieId = u64;

/// A movie as reported by the catalog.
///
/// Only `id` is mandatory on the wire; everything else degrades gracefully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog identifier, unique per movie.
    pub id: MovieId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Relative poster path such as `/abc123.jpg`.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date in `YYYY-MM-DD` form (may be empty upstream).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average user rating on a 0-10 scale.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// ISO 639-1 language code.
    #[serde(default)]
    pub original_language: Option<String>,
    /// Plot summary.
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Minimal movie with only id and title, handy for fixtures.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
            vote_average: None,
            original_language: None,
            overview: None,
        }
    }

    /// Year component of `release_date`, if it parses.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Absolute poster URL under `image_base` (e.g. `https://image.tmdb.org/t/p/w500`).
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base.trim_end_matches('/'), p))
    }
}

// ===== MoviePage =====

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    /// Movies in relevance (or popularity) order.
    pub results: Arc<[Movie]>,
    /// Total pages the catalog reports for this query (>= 1).
    pub total_pages: u32,
}

impl MoviePage {
    /// Build a page; `total_pages` is clamped to at least 1.
    pub fn new(results: Vec<Movie>, total_pages: u32) -> Self {
        Self {
            results: results.into(),
            total_pages: total_pages.max(1),
        }
    }
}
