//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Toggled by F1, dismissed by Esc or F1.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: category, then (keys, description) rows.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            ("Type", "Edit the query (searches after a short pause)"),
            ("Enter", "Search now"),
            ("Esc", "Clear the query (back to popular movies)"),
            ("←/→", "Move the cursor"),
            ("Home/Ctrl+a", "Cursor to start"),
            ("End/Ctrl+e", "Cursor to end"),
            ("Backspace/Del", "Delete a character"),
        ],
    ),
    (
        "Results",
        &[
            ("↑/↓", "Select a movie"),
            ("PgDn/Ctrl+n", "Next page"),
            ("PgUp/Ctrl+p", "Previous page"),
            ("Ctrl+r", "Retry the last request"),
        ],
    ),
    (
        "Application",
        &[("F1", "Toggle this help"), ("Ctrl+q/Ctrl+c", "Quit")],
    ),
];

/// Width of the key column, including indentation.
const KEY_COLUMN_WIDTH: usize = 17;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or F1 to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.accent.add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for (i, (category, rows)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in rows.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<width$}", width = KEY_COLUMN_WIDTH - 2),
                    palette.key,
                ),
                Span::raw(*description),
            ]));
        }
    }

    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
