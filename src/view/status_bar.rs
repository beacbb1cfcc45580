//! Status bar: request status, pagination hints and key hints.

use super::helpers::spinner_glyph;
use super::styles::Palette;
use crate::state::{AppState, RequestState};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Label for the previous-page hint.
pub const PREV_HINT: &str = "◀ PgUp";

/// Label for the next-page hint.
pub const NEXT_HINT: &str = "PgDn ▶";

/// Pagination segment. A hint that would be a no-op uses the disabled style.
pub fn pagination_spans<'a>(state: &AppState, palette: &Palette) -> Vec<Span<'a>> {
    let controller = &state.controller;
    let hint_style = |enabled: bool| if enabled { palette.key } else { palette.disabled };

    vec![
        Span::styled(PREV_HINT, hint_style(controller.has_prev())),
        Span::raw(format!(
            " Page {} of {} ",
            controller.page(),
            controller.total_pages()
        )),
        Span::styled(NEXT_HINT, hint_style(controller.has_next())),
    ]
}

fn request_spans<'a>(state: &AppState, palette: &Palette) -> Vec<Span<'a>> {
    match state.controller.request() {
        RequestState::Idle => vec![Span::raw("Ready")],
        RequestState::Loading => vec![
            Span::styled(spinner_glyph(state.spinner_frame()), palette.accent),
            Span::raw(" Loading"),
        ],
        RequestState::Error(_) => vec![Span::styled("Error", palette.error)],
        RequestState::Success => {
            let n = state.controller.results().len();
            let noun = if n == 1 { "movie" } else { "movies" };
            vec![Span::styled(format!("{n} {noun}"), palette.muted)]
        }
    }
}

/// The full status line.
pub fn status_line<'a>(state: &AppState, palette: &Palette) -> Line<'a> {
    let mut spans = request_spans(state, palette);
    spans.push(Span::raw(" │ "));
    spans.extend(pagination_spans(state, palette));
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("F1", palette.key));
    spans.push(Span::styled(" help ", palette.muted));
    spans.push(Span::styled("Ctrl+Q", palette.key));
    spans.push(Span::styled(" quit", palette.muted));
    Line::from(spans)
}

/// Render the status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    frame.render_widget(Paragraph::new(status_line(state, palette)), area);
}
