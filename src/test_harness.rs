//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions,
//! plus in-memory catalog and trending fakes.
//!
//! Time is virtual: keystrokes and ticks carry an explicit `Instant` that only
//! moves when a test calls [`AcceptanceTestHarness::tick_after`]. Network work
//! still runs on a real tokio runtime so the effect plumbing is exercised end
//! to end.

#![allow(dead_code)] // Not every helper is used by every test module

use crate::catalog::MovieCatalog;
use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::effects::EffectRunner;
use crate::model::{
    CatalogQuery, FetchError, Movie, MoviePage, PageNumber, TrendingRecord, TrendingStoreError,
};
use crate::state::{AppState, TrendingState};
use crate::trending::{TrendingStore, DEFAULT_TRENDING_LIMIT};
use crate::view::{ColorConfig, TuiApp, ViewOptions};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// How long the harness waits for any single outcome.
const OUTCOME_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== FakeCatalog =====

type Responder = dyn Fn(&CatalogQuery, PageNumber) -> Result<MoviePage, FetchError> + Send + Sync;

/// In-memory catalog that records every call.
pub(crate) struct FakeCatalog {
    calls: Mutex<Vec<(CatalogQuery, PageNumber)>>,
    respond: Box<Responder>,
    slow_term: Option<(String, Duration)>,
}

impl FakeCatalog {
    /// Catalog answering with a custom function.
    pub(crate) fn new(
        respond: impl Fn(&CatalogQuery, PageNumber) -> Result<MoviePage, FetchError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
            slow_term: None,
        }
    }

    /// Three movies per page, `total_pages` pages for every query.
    ///
    /// Titles name the query and position: `"batman 2.1"` is the first movie
    /// on page 2 of a batman search, `"Popular 1.3"` the third discover movie.
    pub(crate) fn serving(total_pages: u32) -> Self {
        Self::new(move |query, page| Ok(MoviePage::new(page_of_movies(query, page), total_pages)))
    }

    /// Every call fails with `err`.
    pub(crate) fn failing(err: FetchError) -> Self {
        Self::new(move |_, _| Err(err.clone()))
    }

    /// Delay answers for searches of `term` by `delay`.
    pub(crate) fn slow_for(mut self, term: &str, delay: Duration) -> Self {
        self.slow_term = Some((term.to_string(), delay));
        self
    }

    /// Every `(query, page)` requested so far, in call order.
    pub(crate) fn calls(&self) -> Vec<(CatalogQuery, PageNumber)> {
        self.calls.lock().unwrap().clone()
    }
}

/// The movies [`FakeCatalog::serving`] returns for one page.
pub(crate) fn page_of_movies(query: &CatalogQuery, page: PageNumber) -> Vec<Movie> {
    let label = query.search_text().unwrap_or("Popular");
    (1..=3u64)
        .map(|i| {
            let id = u64::from(page.get() - 1) * 3 + i;
            let mut movie = Movie::new(id, format!("{label} {}.{i}", page.get()));
            movie.release_date = Some("2008-07-16".to_string());
            movie.vote_average = Some(8.5);
            movie.original_language = Some("en".to_string());
            movie.poster_path = Some(format!("/poster{id}.jpg"));
            movie
        })
        .collect()
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch_movies(
        &self,
        query: &CatalogQuery,
        page: PageNumber,
    ) -> Result<MoviePage, FetchError> {
        self.calls.lock().unwrap().push((query.clone(), page));
        if let Some((term, delay)) = &self.slow_term {
            if query.search_text() == Some(term.as_str()) {
                tokio::time::sleep(*delay).await;
            }
        }
        (self.respond)(query, page)
    }
}

// ===== RecordingStore =====

/// Trending store that remembers every record attempt.
#[derive(Default)]
pub(crate) struct RecordingStore {
    recorded: Mutex<Vec<(String, u64)>>,
    records: Vec<TrendingRecord>,
    fail: bool,
}

impl RecordingStore {
    /// Store whose operations all fail (attempts are still remembered).
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Store listing `records` as trending.
    pub(crate) fn with_records(records: Vec<TrendingRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Every `(term, movie_id)` passed to `record_search`, in call order.
    pub(crate) fn recorded(&self) -> Vec<(String, u64)> {
        self.recorded.lock().unwrap().clone()
    }

    /// Wait until at least `n` record attempts have happened.
    pub(crate) async fn wait_for_recorded(&self, n: usize) {
        let wait = async {
            while self.recorded.lock().unwrap().len() < n {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(OUTCOME_TIMEOUT, wait)
            .await
            .unwrap_or_else(|_| panic!("expected {n} recorded searches, got {:?}", self.recorded()));
    }

    fn unavailable() -> TrendingStoreError {
        TrendingStoreError::Storage("store unavailable".to_string())
    }
}

#[async_trait]
impl TrendingStore for RecordingStore {
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), TrendingStoreError> {
        self.recorded
            .lock()
            .unwrap()
            .push((term.to_string(), movie.id));
        if self.fail {
            Err(Self::unavailable())
        } else {
            Ok(())
        }
    }

    async fn list_trending(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingStoreError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}

/// A trending record fixture.
pub(crate) fn trending_record(term: &str, count: u64) -> TrendingRecord {
    TrendingRecord {
        id: format!("id-{term}"),
        search_term: term.to_string(),
        count,
        movie_id: 1,
        poster_url: None,
    }
}

// ===== AcceptanceTestHarness =====

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    catalog: Arc<FakeCatalog>,
    store: Arc<RecordingStore>,
    now: Instant,
    running: bool,
    // Declared last: drops after the app that holds its handle
    runtime: Runtime,
}

impl AcceptanceTestHarness {
    /// Three-page catalog, empty trending store, 80x24 terminal.
    pub(crate) fn new() -> Self {
        Self::with_parts(FakeCatalog::serving(3), RecordingStore::default(), 80, 24)
    }

    /// Custom fakes and terminal size.
    pub(crate) fn with_parts(
        catalog: FakeCatalog,
        store: RecordingStore,
        width: u16,
        height: u16,
    ) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("test runtime");
        let catalog = Arc::new(catalog);
        let store = Arc::new(store);
        let (runner, outcomes) =
            EffectRunner::new(runtime.handle().clone(), catalog.clone(), store.clone());

        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let app_state = AppState::new(
            Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            DEFAULT_TRENDING_LIMIT,
        );
        let options = ViewOptions {
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            colors: ColorConfig::new(false),
        };
        let app = TuiApp::new_for_test(terminal, app_state, runner, outcomes, options);

        Self {
            app,
            catalog,
            store,
            now: Instant::now(),
            running: true,
            runtime,
        }
    }

    /// Run the startup effects with `initial_query` prefilled.
    pub(crate) fn start(&mut self, initial_query: &str) {
        self.app.start_test(initial_query);
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub(crate) fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send `Ctrl+<ch>`.
    pub(crate) fn send_ctrl(&mut self, ch: char) -> bool {
        self.send_key_with_mods(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub(crate) fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events at the current instant)
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Move the virtual clock forward by `elapsed` and tick once.
    ///
    /// Returns whether the tick changed anything visible.
    pub(crate) fn tick_after(&mut self, elapsed: Duration) -> bool {
        self.now += elapsed;
        self.app.tick_test(self.now)
    }

    /// Apply outcomes until no catalog fetch or trending load is outstanding.
    ///
    /// # Panics
    /// Panics if an outstanding request never answers.
    pub(crate) fn settle(&mut self) {
        loop {
            self.app.drain_outcomes_test();
            let controller = &self.app.app_state().controller;
            let waiting = controller.in_flight().is_some()
                || matches!(controller.trending(), TrendingState::Loading);
            if !waiting {
                return;
            }
            assert!(
                self.app.wait_for_outcome_test(OUTCOME_TIMEOUT),
                "timed out waiting for an outcome"
            );
        }
    }

    /// Wait up to `timeout` for one more outcome (e.g. a superseded response).
    pub(crate) fn wait_for_outcome(&mut self, timeout: Duration) -> bool {
        self.app.wait_for_outcome_test(timeout)
    }

    /// Block until the store has seen `n` record attempts.
    pub(crate) fn wait_for_recorded(&self, n: usize) {
        self.runtime.block_on(self.store.wait_for_recorded(n));
    }

    /// Give detached tasks a moment, then return what the store has seen.
    pub(crate) fn recorded_after_quiet(&self) -> Vec<(String, u64)> {
        std::thread::sleep(Duration::from_millis(50));
        self.store.recorded()
    }

    /// Access app state for assertions
    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// The fake catalog behind the app.
    pub(crate) fn catalog(&self) -> &FakeCatalog {
        &self.catalog
    }

    /// The fake trending store behind the app.
    pub(crate) fn store(&self) -> &RecordingStore {
        &self.store
    }

    /// Check if app is still running (didn't quit)
    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub(crate) fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
