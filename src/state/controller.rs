//! Search and pagination controller (pure state machine).
//!
//! The controller owns the debounced query, the page number, the request state
//! and the current result set. It never performs I/O: transitions that need a
//! fetch or a datastore write return an [`Effect`], and the shell hands the
//! result back as an [`Outcome`] through [`SearchController::apply`].

use crate::model::{
    CatalogQuery, FetchError, Movie, MoviePage, PageNumber, TrendingRecord, TrendingStoreError,
};
use std::sync::Arc;
use tracing::{debug, warn};

// ===== RequestToken =====

/// Identifies one catalog fetch. Tokens increase monotonically, so only the
/// most recently issued one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw token value, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

// ===== RequestState =====

/// Lifecycle of the main result surface. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Success,
    /// The last fetch failed; carries the message to display.
    Error(String),
}

// ===== TrendingState =====

/// Lifecycle of the one-shot trending load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrendingState {
    /// Not requested.
    #[default]
    NotLoaded,
    /// Load in flight.
    Loading,
    /// Records ordered by descending count.
    Loaded(Arc<[TrendingRecord]>),
    /// Load failed; the trending strip stays hidden.
    Unavailable,
}

impl TrendingState {
    /// Records to display, empty unless loaded.
    pub fn records(&self) -> &[TrendingRecord] {
        match self {
            Self::Loaded(records) => records,
            _ => &[],
        }
    }
}

// ===== Effect / Outcome =====

/// I/O the controller wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch one page from the catalog.
    FetchMovies {
        /// Token the outcome must carry back.
        token: RequestToken,
        /// Debounced query.
        query: CatalogQuery,
        /// Page to fetch.
        page: PageNumber,
    },
    /// Record a search term with its top result. Fire-and-forget.
    RecordSearch {
        /// Search text as settled.
        term: String,
        /// First result of the successful fetch.
        movie: Movie,
    },
    /// Load the top trending records once.
    LoadTrending {
        /// Maximum records to list.
        limit: usize,
    },
}

/// Result of an executed [`Effect`], applied back on the UI thread.
#[derive(Debug)]
pub enum Outcome {
    /// A catalog fetch finished.
    MoviesFetched {
        /// Token of the fetch that produced this result.
        token: RequestToken,
        /// Page or failure.
        result: Result<MoviePage, FetchError>,
    },
    /// The trending load finished.
    TrendingLoaded(Result<Vec<TrendingRecord>, TrendingStoreError>),
}

// ===== SearchController =====

/// Owns query, page, request state and results; sequences catalog and
/// trending effects.
#[derive(Debug, Clone)]
pub struct SearchController {
    query: CatalogQuery,
    page: PageNumber,
    total_pages: u32,
    request: RequestState,
    results: Arc<[Movie]>,
    last_issued: u64,
    in_flight: Option<RequestToken>,
    trending: TrendingState,
    trending_limit: usize,
}

impl SearchController {
    /// Idle controller in discover mode on page 1.
    ///
    /// A `trending_limit` of 0 skips the trending load entirely.
    pub fn new(trending_limit: usize) -> Self {
        Self {
            query: CatalogQuery::Discover,
            page: PageNumber::FIRST,
            total_pages: 1,
            request: RequestState::Idle,
            results: Arc::from(Vec::new()),
            last_issued: 0,
            in_flight: None,
            trending: TrendingState::NotLoaded,
            trending_limit,
        }
    }

    // ----- accessors -----

    /// Debounced query.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Current page.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Total pages reported by the last successful fetch (at least 1).
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Request lifecycle.
    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Current result set.
    pub fn results(&self) -> &Arc<[Movie]> {
        &self.results
    }

    /// Trending lifecycle.
    pub fn trending(&self) -> &TrendingState {
        &self.trending
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Loading
    }

    /// Whether "previous page" would do anything.
    pub fn has_prev(&self) -> bool {
        self.page.get() > 1
    }

    /// Whether "next page" would do anything.
    pub fn has_next(&self) -> bool {
        self.page.get() < self.total_pages
    }

    /// Token of the fetch whose outcome is still awaited.
    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    // ----- transitions -----

    /// Initial load: fetch page 1 of `query` and, when enabled, the trending
    /// records. Both effects are independent and may run concurrently.
    pub fn start(&mut self, query: CatalogQuery) -> Vec<Effect> {
        self.query = query;
        self.page = PageNumber::FIRST;

        let mut effects = vec![self.issue_fetch()];
        if self.trending_limit > 0 {
            self.trending = TrendingState::Loading;
            effects.push(Effect::LoadTrending {
                limit: self.trending_limit,
            });
        }
        effects
    }

    /// A debounced query settled. Resets to page 1 of 1 and fetches, unless
    /// the settled query equals the current one.
    pub fn settle_query(&mut self, raw: &str) -> Option<Effect> {
        let query = CatalogQuery::from_raw(raw);
        if query == self.query {
            return None;
        }
        debug!(query = %query, "Query settled");
        self.query = query;
        self.page = PageNumber::FIRST;
        // The old page count does not bound the new query
        self.total_pages = 1;
        Some(self.issue_fetch())
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) -> Option<Effect> {
        if !self.has_next() {
            return None;
        }
        self.page = self.page.next();
        Some(self.issue_fetch())
    }

    /// Go back one page. No-op on page 1.
    pub fn prev_page(&mut self) -> Option<Effect> {
        self.page = self.page.prev()?;
        Some(self.issue_fetch())
    }

    /// Re-issue the fetch for the current query and page.
    pub fn retry(&mut self) -> Effect {
        self.issue_fetch()
    }

    /// Apply the outcome of an executed effect.
    ///
    /// Returns a follow-up effect when a successful search should be recorded.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Effect> {
        match outcome {
            Outcome::MoviesFetched { token, result } => self.apply_fetch(token, result),
            Outcome::TrendingLoaded(result) => {
                self.apply_trending(result);
                None
            }
        }
    }

    fn issue_fetch(&mut self) -> Effect {
        self.last_issued += 1;
        let token = RequestToken(self.last_issued);
        self.in_flight = Some(token);
        self.request = RequestState::Loading;
        Effect::FetchMovies {
            token,
            query: self.query.clone(),
            page: self.page,
        }
    }

    fn apply_fetch(
        &mut self,
        token: RequestToken,
        result: Result<MoviePage, FetchError>,
    ) -> Option<Effect> {
        if self.in_flight != Some(token) {
            debug!(token = token.get(), latest = self.last_issued, "Discarding stale catalog response");
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                self.total_pages = page.total_pages;
                self.results = page.results;
                self.request = RequestState::Success;

                let term = self.query.search_text()?;
                let first = self.results.first()?;
                Some(Effect::RecordSearch {
                    term: term.to_string(),
                    movie: first.clone(),
                })
            }
            Err(err) => {
                warn!(query = %self.query, page = self.page.get(), error = %err, "Catalog fetch failed");
                self.results = Arc::from(Vec::new());
                self.request = RequestState::Error(err.user_message());
                None
            }
        }
    }

    fn apply_trending(&mut self, result: Result<Vec<TrendingRecord>, TrendingStoreError>) {
        self.trending = match result {
            Ok(records) => {
                debug!(count = records.len(), "Trending records loaded");
                TrendingState::Loaded(records.into())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load trending searches");
                TrendingState::Unavailable
            }
        };
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
