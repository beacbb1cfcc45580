//! Rendered-output tests over the full screen.

use crate::model::MoviePage;
use crate::test_harness::{trending_record, AcceptanceTestHarness, FakeCatalog, RecordingStore};
use insta::assert_snapshot;

fn line_starting_with(screen: &str, prefix: &str) -> String {
    screen
        .lines()
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {prefix:?} in:\n{screen}"))
        .to_string()
}

#[test]
fn status_line_after_discover() {
    let mut harness = AcceptanceTestHarness::new();
    harness.start("");
    harness.settle();

    let screen = harness.render_to_string();
    let status = screen.lines().last().unwrap_or_default().to_string();
    assert_snapshot!(status, @"3 movies │ ◀ PgUp Page 1 of 3 PgDn ▶ │ F1 help Ctrl+Q quit");
}

#[test]
fn trending_strip_lists_records_in_order() {
    let store = RecordingStore::with_records(vec![
        trending_record("batman", 4),
        trending_record("heat", 2),
    ]);
    let mut harness = AcceptanceTestHarness::with_parts(FakeCatalog::serving(1), store, 80, 24);
    harness.start("");
    harness.settle();

    let screen = harness.render_to_string();
    assert_snapshot!(line_starting_with(&screen, "Trending:"), @"Trending: 1. batman ×4  2. heat ×2");
}

#[test]
fn empty_trending_draws_no_strip() {
    let mut harness = AcceptanceTestHarness::new();
    harness.start("");
    harness.settle();

    assert!(!harness.render_to_string().contains("Trending:"));
}

#[test]
fn loading_indicator_before_results_arrive() {
    let mut harness = AcceptanceTestHarness::new();
    harness.start("");

    // Outcomes are only applied when drained, so this frame is still loading
    let screen = harness.render_to_string();
    assert!(screen.contains("Loading…"), "got:\n{screen}");
    harness.settle();
}

#[test]
fn empty_result_set_shows_no_results_message() {
    let catalog = FakeCatalog::new(|_, _| Ok(MoviePage::new(Vec::new(), 1)));
    let mut harness = AcceptanceTestHarness::with_parts(catalog, RecordingStore::default(), 80, 24);
    harness.start("zzzzqqq");
    harness.settle();

    let screen = harness.render_to_string();
    assert!(screen.contains("No movies found."), "got:\n{screen}");
    assert!(harness.recorded_after_quiet().is_empty());
}

#[test]
fn typed_text_and_debounce_marker_show_in_search_box() {
    let mut harness = AcceptanceTestHarness::new();
    harness.start("");
    harness.settle();

    harness.type_text("alien");
    let screen = harness.render_to_string();
    assert!(screen.contains("Search …"), "got:\n{screen}");
    assert!(screen.contains("> alien"), "got:\n{screen}");
}

#[test]
fn small_terminal_renders_without_panic() {
    let mut harness =
        AcceptanceTestHarness::with_parts(FakeCatalog::serving(2), RecordingStore::default(), 20, 6);
    harness.start("batman");
    harness.settle();
    let _ = harness.render_to_string();
}
