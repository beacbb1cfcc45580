//! reelseek
//!
//! Terminal movie search: a debounced query box over a paginated movie
//! catalog, with a strip of the searches other people run most.
//!
//! Pure core / impure shell: [`state`] holds every transition as a pure
//! function of input and time and describes side effects as data;
//! [`effects`] runs them on a tokio runtime against [`catalog`] and
//! [`trending`]; [`view`] owns the terminal.

pub mod catalog;
pub mod config;
pub mod effects;
pub mod logging;
pub mod model;
pub mod state;
pub mod trending;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
