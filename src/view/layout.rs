//! Screen layout.
//!
//! Pure layout logic: splits the frame into search input, trending strip,
//! result list, details and status bar, then delegates to each widget.

use super::constants::{DETAILS_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TRENDING_STRIP_HEIGHT};
use super::styles::Palette;
use super::search_input::SearchInput;
use super::{help, results, status_bar, trending};
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Query input box.
    pub search: Rect,
    /// Trending strip (zero height when hidden).
    pub trending: Rect,
    /// Result list box.
    pub results: Rect,
    /// Selected-movie details.
    pub details: Rect,
    /// Bottom status line.
    pub status: Rect,
}

/// Split `area`, giving the trending strip a row only when it has records.
pub fn calculate_areas(area: Rect, show_trending: bool) -> ScreenAreas {
    let trending_height = if show_trending { TRENDING_STRIP_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(trending_height),
            Constraint::Min(0),
            Constraint::Length(DETAILS_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        search: chunks[0],
        trending: chunks[1],
        results: chunks[2],
        details: chunks[3],
        status: chunks[4],
    }
}

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette, image_base_url: &str) {
    let records = state.controller.trending().records();
    let areas = calculate_areas(frame.area(), !records.is_empty());

    frame.render_widget(
        SearchInput::new(&state.input, state.is_debouncing(), palette),
        areas.search,
    );
    trending::render_trending(frame, areas.trending, records, palette);
    results::render_results(frame, areas.results, state, palette);
    results::render_details(frame, areas.details, state, image_base_url, palette);
    status_bar::render_status_bar(frame, areas.status, state, palette);

    if state.help_visible {
        help::render_help_overlay(frame, palette);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
