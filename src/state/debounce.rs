//! Input debouncing (pure).
//!
//! Time is passed in explicitly so the debouncer never reads a clock and can be
//! driven deterministically from tests.

use std::time::{Duration, Instant};

/// Holds back a rapidly changing value until it has been stable for a quiet
/// period, then emits it exactly once.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    last_push: Instant,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// The configured quiet period.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Record a new source value, superseding any pending one and restarting
    /// the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            last_push: now,
        });
    }

    /// Emit the pending value if it has been stable for the quiet period.
    ///
    /// Returns `Some` at most once per pushed value.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.last_push) >= self.quiet_period);
        if ready {
            self.flush()
        } else {
            None
        }
    }

    /// Emit the pending value immediately, skipping the rest of the wait.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before [`poll`](Self::poll) would emit, or `None` when idle.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| {
            let elapsed = now.saturating_duration_since(p.last_push);
            self.quiet_period.saturating_sub(elapsed)
        })
    }
}
