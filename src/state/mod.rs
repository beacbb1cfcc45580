//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI or network.

pub mod app_state;
pub mod controller;
pub mod debounce;
pub mod query_input;

// Re-export for convenience
pub use app_state::AppState;
pub use controller::{
    Effect, Outcome, RequestState, RequestToken, SearchController, TrendingState,
};
pub use debounce::Debouncer;
pub use query_input::QueryInput;
