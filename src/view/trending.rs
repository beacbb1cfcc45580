//! Trending searches strip.

use super::helpers::truncate_to_width;
use super::styles::Palette;
use crate::model::TrendingRecord;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the one-line strip: `Trending: 1. batman ×4  2. heat ×2`.
pub fn trending_line<'a>(records: &[TrendingRecord], palette: &Palette) -> Line<'a> {
    let mut spans = vec![Span::styled("Trending: ", palette.accent)];
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{}. ", i + 1), palette.key));
        spans.push(Span::raw(truncate_to_width(&record.search_term, 24)));
        spans.push(Span::styled(format!(" ×{}", record.count), palette.muted));
    }
    Line::from(spans)
}

/// Render the strip; nothing is drawn when there are no records.
pub fn render_trending(frame: &mut Frame, area: Rect, records: &[TrendingRecord], palette: &Palette) {
    if records.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(trending_line(records, palette)), area);
}
