//! Error types for reelseek.
//!
//! Errors are split by concern and composed with `thiserror`:
//!
//! - [`FetchError`] - catalog request failures, shown to the user as one message
//! - [`TrendingStoreError`] - trending datastore failures, logged and never shown
//! - [`AppError`] - startup and terminal failures that end the process
//!
//! Catalog and trending failures are non-fatal: the UI stays interactive and the
//! user can retry by editing the query or paging.

use thiserror::Error;

/// Message shown for every transport-level catalog failure.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching movies. Please try again later.";

/// Message shown when the upstream reports failure without saying why.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Error fetching movies";

/// A failed catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx response, network failure, or a body that could not be decoded.
    #[error("catalog transport failure{}: {reason}", status_suffix(.status))]
    Transport {
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Underlying cause.
        reason: String,
    },

    /// 2xx response whose body reports a logical failure.
    #[error("catalog reported failure: {message}")]
    Upstream {
        /// Upstream message, or [`UPSTREAM_FALLBACK_MESSAGE`].
        message: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl FetchError {
    /// Transport failure without an HTTP status.
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            reason: reason.into(),
        }
    }

    /// The single string the result area displays for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => FETCH_FAILED_MESSAGE.to_string(),
            Self::Upstream { message } => message.clone(),
        }
    }
}

/// A failed trending datastore operation.
#[derive(Debug, Error)]
pub enum TrendingStoreError {
    /// The datastore answered with a non-2xx status.
    #[error("trending store HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// Request never completed.
    #[error("trending store network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local storage engine failure.
    #[error("trending store storage error: {0}")]
    Storage(String),

    /// Record could not be encoded or decoded.
    #[error("trending store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Top-level application error.
///
/// Everything here is fatal and propagates to `main`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Async runtime could not be started.
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}
