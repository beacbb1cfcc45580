//! Result list and selected-movie details.

use super::helpers::{spinner_glyph, truncate_to_width};
use super::styles::Palette;
use crate::model::{CatalogQuery, Movie};
use crate::state::{AppState, RequestState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shown when a successful fetch returned nothing.
pub const NO_RESULTS_MESSAGE: &str = "No movies found.";

/// Block title describing what the list shows.
pub fn results_title(query: &CatalogQuery) -> String {
    match query {
        CatalogQuery::Discover => " Popular movies ".to_string(),
        CatalogQuery::Search(text) => format!(" Results for \"{text}\" "),
    }
}

/// One result row: title, year, rating and language.
///
/// The title is truncated so the metadata always fits in `width` columns.
pub fn movie_row<'a>(movie: &Movie, width: usize, palette: &Palette) -> Line<'a> {
    let year = movie
        .release_year()
        .map(|y| format!(" ({y})"))
        .unwrap_or_default();
    let rating = movie
        .vote_average
        .map(|v| format!("  ★ {v:.1}"))
        .unwrap_or_else(|| "  ★ N/A".to_string());
    let language = movie
        .original_language
        .as_deref()
        .map(|l| format!("  {l}"))
        .unwrap_or_default();

    let meta_width = year.width() + rating.width() + language.width();
    let title = if movie.title.is_empty() {
        "Untitled"
    } else {
        movie.title.as_str()
    };
    let title = truncate_to_width(title, width.saturating_sub(meta_width).max(1));

    Line::from(vec![
        Span::raw(title),
        Span::styled(year, palette.muted),
        Span::styled(rating, palette.rating),
        Span::styled(language, palette.muted),
    ])
}

/// Render the main result surface: list, loading indicator or error.
pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let controller = &state.controller;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(results_title(controller.query()))
        .border_style(palette.accent);

    let message = match controller.request() {
        RequestState::Idle => Some(Line::from("")),
        RequestState::Loading => Some(Line::from(vec![
            Span::styled(spinner_glyph(state.spinner_frame()), palette.accent),
            Span::raw(" Loading…"),
        ])),
        RequestState::Error(message) => {
            Some(Line::from(Span::styled(message.clone(), palette.error)))
        }
        RequestState::Success if controller.results().is_empty() => {
            Some(Line::from(Span::styled(NO_RESULTS_MESSAGE, palette.muted)))
        }
        RequestState::Success => None,
    };

    if let Some(line) = message {
        let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    // Leave room for borders and the highlight symbol.
    let row_width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = controller
        .results()
        .iter()
        .map(|movie| ListItem::new(movie_row(movie, row_width, palette)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(palette.selected)
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the overview and poster URL of the highlighted movie.
pub fn render_details(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    image_base_url: &str,
    palette: &Palette,
) {
    if !matches!(state.controller.request(), RequestState::Success) {
        return;
    }
    let Some(movie) = state.selected_movie() else {
        return;
    };

    let width = usize::from(area.width);
    let overview = movie
        .overview
        .as_deref()
        .filter(|o| !o.trim().is_empty())
        .unwrap_or("No overview available.");
    let poster = movie
        .poster_url(image_base_url)
        .map(|url| format!("Poster: {url}"))
        .unwrap_or_else(|| "Poster: none".to_string());

    let lines = vec![
        Line::from(truncate_to_width(overview, width)),
        Line::from(Span::styled(truncate_to_width(&poster, width), palette.muted)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
