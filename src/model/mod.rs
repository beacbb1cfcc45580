//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod movie;
pub mod trending;

// Re-export for convenience
pub use error::{
    AppError, FetchError, TrendingStoreError, FETCH_FAILED_MESSAGE, UPSTREAM_FALLBACK_MESSAGE,
};
pub use key_action::KeyAction;
pub use movie::{CatalogQuery, Movie, MovieId, MoviePage, PageNumber};
pub use trending::{normalize_term, TrendingRecord};
