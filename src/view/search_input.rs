//! Search input widget for rendering the query bar.

use super::styles::Palette;
use crate::state::QueryInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the query is empty.
pub const PLACEHOLDER: &str = "Search through thousands of movies";

/// Search input widget.
///
/// Always visible; the cursor cell is drawn in reverse video. An empty query
/// shows a placeholder after the cursor.
pub struct SearchInput<'a> {
    input: &'a QueryInput,
    debouncing: bool,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(input: &'a QueryInput, debouncing: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            debouncing,
            palette,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.input.text();
        let cursor = self.input.cursor();

        // Split query into before/after cursor for rendering cursor
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        let mut spans = vec![
            Span::styled("> ", self.palette.muted),
            Span::raw(before),
            Span::styled(cursor_char, self.palette.cursor),
            Span::raw(after),
        ];
        if text.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, self.palette.muted));
        }

        let title = if self.debouncing { " Search … " } else { " Search " };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.palette.accent),
        );

        paragraph.render(area, buf);
    }
}
