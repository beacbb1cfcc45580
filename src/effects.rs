//! Effect execution (impure shell).
//!
//! The UI thread never awaits. Each [`Effect`] becomes a task on the tokio
//! runtime; fetch and trending-load results come back as [`Outcome`]s over an
//! unbounded channel that the event loop drains between terminal events.
//! Trending writes are detached: their failures are logged and go nowhere else.

use crate::catalog::MovieCatalog;
use crate::state::{Effect, Outcome};
use crate::trending::TrendingStore;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Runs controller effects against the catalog and trending store.
#[derive(Clone)]
pub struct EffectRunner {
    handle: Handle,
    catalog: Arc<dyn MovieCatalog>,
    trending: Arc<dyn TrendingStore>,
    outcomes: UnboundedSender<Outcome>,
}

impl std::fmt::Debug for EffectRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRunner").finish_non_exhaustive()
    }
}

impl EffectRunner {
    /// Create a runner spawning onto `handle`, plus the receiving end of its
    /// outcome channel.
    pub fn new(
        handle: Handle,
        catalog: Arc<dyn MovieCatalog>,
        trending: Arc<dyn TrendingStore>,
    ) -> (Self, UnboundedReceiver<Outcome>) {
        let (outcomes, receiver) = mpsc::unbounded_channel();
        (
            Self {
                handle,
                catalog,
                trending,
                outcomes,
            },
            receiver,
        )
    }

    /// Runtime handle the runner spawns onto.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Execute every effect in order of submission (completion order is not
    /// guaranteed).
    pub fn run_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    /// Spawn the task for one effect and return immediately.
    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchMovies { token, query, page } => {
                let catalog = Arc::clone(&self.catalog);
                let outcomes = self.outcomes.clone();
                info!(token = token.get(), query = %query, page = page.get(), "Fetching movies");
                self.handle.spawn(async move {
                    let result = catalog.fetch_movies(&query, page).await;
                    send(&outcomes, Outcome::MoviesFetched { token, result });
                });
            }
            Effect::RecordSearch { term, movie } => {
                let trending = Arc::clone(&self.trending);
                self.handle.spawn(async move {
                    match trending.record_search(&term, &movie).await {
                        Ok(()) => debug!(term = %term, movie_id = movie.id, "Recorded search"),
                        Err(err) => {
                            warn!(term = %term, error = %err, "Failed to record trending search")
                        }
                    }
                });
            }
            Effect::LoadTrending { limit } => {
                let trending = Arc::clone(&self.trending);
                let outcomes = self.outcomes.clone();
                self.handle.spawn(async move {
                    let result = trending.list_trending(limit).await;
                    send(&outcomes, Outcome::TrendingLoaded(result));
                });
            }
        }
    }
}

fn send(outcomes: &UnboundedSender<Outcome>, outcome: Outcome) {
    // The receiver only goes away during shutdown.
    if outcomes.send(outcome).is_err() {
        debug!("Outcome dropped: UI loop has exited");
    }
}
