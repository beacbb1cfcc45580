//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It is pure: every
//! method takes the current time as an argument and returns the effects the
//! shell should run instead of running them.

use super::controller::{Effect, Outcome, SearchController};
use super::debounce::Debouncer;
use super::query_input::{self, QueryInput};
use crate::model::{CatalogQuery, KeyAction, Movie};
use std::sync::Arc;
use std::time::{Duration, Instant};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Input**: raw query text, edited by keystrokes
/// - **Debouncer**: turns raw edits into settled queries after a quiet period
/// - **Controller**: debounced query, page, request state and results
/// - **Selection**: highlighted row in the result list
/// - **Help**: whether the key reference overlay is shown
///
/// # Transitions
///
/// - keystroke → input edit → debouncer push
/// - tick → debouncer poll → controller settle → fetch effect
/// - Enter → debouncer flush → controller settle
/// - outcome → controller apply → selection reset on new results
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw query text with cursor.
    pub input: QueryInput,

    /// Pending raw text waiting for its quiet period.
    debouncer: Debouncer<String>,

    /// Search and pagination state machine.
    pub controller: SearchController,

    /// Highlighted row, `0..results.len()` when results exist.
    selected: usize,

    /// Whether the help overlay is currently visible.
    /// While shown it swallows everything except toggling it off and quitting.
    pub help_visible: bool,

    /// Animation frame for the loading indicator.
    spinner_frame: usize,
}

impl AppState {
    /// Fresh state with the given quiet period and trending limit.
    pub fn new(debounce: Duration, trending_limit: usize) -> Self {
        Self {
            input: QueryInput::default(),
            debouncer: Debouncer::new(debounce),
            controller: SearchController::new(trending_limit),
            selected: 0,
            help_visible: false,
            spinner_frame: 0,
        }
    }

    /// Initial load with `initial_query` prefilled (empty means discover).
    pub fn start(&mut self, initial_query: &str) -> Vec<Effect> {
        self.input = QueryInput::with_text(initial_query);
        self.controller.start(CatalogQuery::from_raw(initial_query))
    }

    // ----- accessors -----

    /// Index of the highlighted row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The highlighted movie, if any.
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.controller.results().get(self.selected)
    }

    /// Current loading indicator frame.
    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Whether typed text is still waiting to settle.
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// How long until the pending text settles, if any.
    pub fn time_until_settled(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    // ----- input -----

    /// Insert a printable character into the query.
    pub fn handle_char(&mut self, ch: char, now: Instant) {
        if self.help_visible {
            return;
        }
        self.edit(|input| query_input::handle_char_input(input, ch), now);
    }

    /// Apply a bound key action. Returns a fetch effect when one is due now.
    ///
    /// `Quit` is the shell's concern and is ignored here.
    pub fn handle_action(&mut self, action: KeyAction, now: Instant) -> Option<Effect> {
        if self.help_visible {
            if matches!(action, KeyAction::Help | KeyAction::ClearQuery) {
                self.help_visible = false;
            }
            return None;
        }

        match action {
            KeyAction::DeleteBackward => self.edit(query_input::handle_backspace, now),
            KeyAction::DeleteForward => self.edit(query_input::handle_delete, now),
            KeyAction::CursorLeft => self.edit(query_input::handle_cursor_left, now),
            KeyAction::CursorRight => self.edit(query_input::handle_cursor_right, now),
            KeyAction::CursorHome => self.edit(query_input::handle_cursor_home, now),
            KeyAction::CursorEnd => self.edit(query_input::handle_cursor_end, now),
            KeyAction::ClearQuery => self.edit(query_input::clear_input, now),
            KeyAction::SubmitQuery => return self.submit(),
            KeyAction::NextPage => return self.controller.next_page(),
            KeyAction::PrevPage => return self.controller.prev_page(),
            KeyAction::SelectNext => self.select_next(),
            KeyAction::SelectPrev => self.selected = self.selected.saturating_sub(1),
            KeyAction::Retry => return Some(self.controller.retry()),
            KeyAction::Help => self.help_visible = true,
            KeyAction::Quit => {}
        }
        None
    }

    /// Advance time: settle debounced input and animate the loading indicator.
    pub fn tick(&mut self, now: Instant) -> Option<Effect> {
        if self.controller.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        let settled = self.debouncer.poll(now)?;
        self.controller.settle_query(&settled)
    }

    /// Apply an executed effect's outcome.
    ///
    /// Selection returns to the top whenever the result set is replaced.
    pub fn apply_outcome(&mut self, outcome: Outcome) -> Option<Effect> {
        let before = Arc::clone(self.controller.results());
        let follow_up = self.controller.apply(outcome);
        if !Arc::ptr_eq(&before, self.controller.results()) {
            self.selected = 0;
        }
        follow_up
    }

    // ----- helpers -----

    fn edit(&mut self, f: impl FnOnce(QueryInput) -> QueryInput, now: Instant) {
        let before = std::mem::take(&mut self.input);
        let changed_from = before.text().to_string();
        self.input = f(before);
        if self.input.text() != changed_from {
            self.debouncer.push(self.input.text().to_string(), now);
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        self.debouncer.cancel();
        self.controller.settle_query(self.input.text())
    }

    fn select_next(&mut self) {
        let len = self.controller.results().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
