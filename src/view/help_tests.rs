//! Tests for help overlay widget

use super::*;
use crate::test_harness::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_overlay(frame, &Palette::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn overlay_has_title_and_dismiss_hint() {
    let text = render(100, 40);
    assert!(text.contains("Keyboard Shortcuts"), "got:\n{text}");
    assert!(text.contains("Press Esc or F1 to close"));
}

#[test]
fn overlay_lists_every_category() {
    let text = render(100, 40);
    for category in ["Search", "Results", "Application"] {
        assert!(text.contains(category), "missing {category}:\n{text}");
    }
}

#[test]
fn overlay_lists_pagination_and_quit_keys() {
    let text = render(100, 40);
    assert!(text.contains("PgDn/Ctrl+n"));
    assert!(text.contains("Next page"));
    assert!(text.contains("Ctrl+q/Ctrl+c"));
}

#[test]
fn help_content_matches_shortcut_table() {
    let lines = build_help_content(&Palette::default());
    let rows: usize = SHORTCUTS.iter().map(|(_, rows)| rows.len()).sum();
    let headers = SHORTCUTS.len();
    let separators = SHORTCUTS.len() - 1;
    assert_eq!(lines.len(), rows + headers + separators);
}

#[test]
fn centered_rect_is_centered() {
    let rect = centered_rect(50, 50, Rect::new(0, 0, 80, 20));
    assert_eq!(rect, Rect::new(20, 5, 40, 10));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let _ = render(10, 4);
}
