//! Tests for the search/pagination controller.

use super::*;
use crate::model::FETCH_FAILED_MESSAGE;

fn movies(ids: &[u64]) -> Vec<Movie> {
    ids.iter()
        .map(|id| Movie::new(*id, format!("Movie {id}")))
        .collect()
}

fn page_of(ids: &[u64], total_pages: u32) -> Result<MoviePage, FetchError> {
    Ok(MoviePage::new(movies(ids), total_pages))
}

/// Pull the token out of a fetch effect, panicking on anything else.
fn fetch_token(effect: &Effect) -> RequestToken {
    match effect {
        Effect::FetchMovies { token, .. } => *token,
        other => panic!("Expected FetchMovies, got {other:?}"),
    }
}

fn fetch_target(effect: &Effect) -> (CatalogQuery, u32) {
    match effect {
        Effect::FetchMovies { query, page, .. } => (query.clone(), page.get()),
        other => panic!("Expected FetchMovies, got {other:?}"),
    }
}

/// Controller that has settled `raw` and received a page with `total_pages`.
fn loaded(raw: &str, total_pages: u32) -> SearchController {
    let mut controller = SearchController::new(0);
    let effect = controller
        .settle_query(raw)
        .or_else(|| Some(controller.retry()))
        .unwrap();
    let token = fetch_token(&effect);
    controller.apply(Outcome::MoviesFetched {
        token,
        result: page_of(&[1, 2], total_pages),
    });
    controller
}

// ===== start =====

#[test]
fn new_controller_is_idle_on_first_page() {
    let controller = SearchController::new(5);
    assert_eq!(controller.request(), &RequestState::Idle);
    assert_eq!(controller.page(), PageNumber::FIRST);
    assert!(controller.results().is_empty());
    assert_eq!(controller.trending(), &TrendingState::NotLoaded);
}

#[test]
fn start_fetches_discover_and_trending() {
    let mut controller = SearchController::new(5);
    let effects = controller.start(CatalogQuery::Discover);

    assert_eq!(effects.len(), 2);
    assert_eq!(fetch_target(&effects[0]), (CatalogQuery::Discover, 1));
    assert_eq!(effects[1], Effect::LoadTrending { limit: 5 });
    assert!(controller.is_loading());
    assert_eq!(controller.trending(), &TrendingState::Loading);
}

#[test]
fn start_without_trending_limit_skips_trending() {
    let mut controller = SearchController::new(0);
    let effects = controller.start(CatalogQuery::from_raw("alien"));

    assert_eq!(effects.len(), 1);
    assert_eq!(
        fetch_target(&effects[0]),
        (CatalogQuery::Search("alien".to_string()), 1)
    );
    assert_eq!(controller.trending(), &TrendingState::NotLoaded);
}

// ===== query settling =====

#[test]
fn settling_new_query_resets_page_and_fetches_once() {
    let mut controller = loaded("", 10);
    controller.next_page();
    controller.next_page();
    assert_eq!(controller.page().get(), 3);

    let effect = controller.settle_query("batman").unwrap();
    assert_eq!(
        fetch_target(&effect),
        (CatalogQuery::Search("batman".to_string()), 1)
    );
    assert_eq!(controller.page(), PageNumber::FIRST);
    assert!(controller.is_loading());
}

#[test]
fn new_query_drops_previous_page_count() {
    let mut controller = loaded("batman", 500);
    assert!(controller.has_next());

    let effect = controller.settle_query("zzzqqq").unwrap();
    assert_eq!(controller.total_pages(), 1);
    assert!(!controller.has_next());
    assert_eq!(controller.next_page(), None);

    // The new query turns out to have a single empty page
    controller.apply(Outcome::MoviesFetched {
        token: fetch_token(&effect),
        result: page_of(&[], 1),
    });
    assert_eq!(controller.page(), PageNumber::FIRST);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(controller.next_page(), None);
}

#[test]
fn new_query_pages_within_its_own_count() {
    let mut controller = loaded("batman", 500);
    let effect = controller.settle_query("heat").unwrap();
    controller.apply(Outcome::MoviesFetched {
        token: fetch_token(&effect),
        result: page_of(&[7], 2),
    });

    let next = controller.next_page().unwrap();
    assert_eq!(fetch_target(&next), (CatalogQuery::Search("heat".to_string()), 2));
    controller.apply(Outcome::MoviesFetched {
        token: fetch_token(&next),
        result: page_of(&[8], 2),
    });
    assert_eq!(controller.next_page(), None);
    assert_eq!(controller.page().get(), 2);
}

#[test]
fn settling_same_query_is_not_a_change() {
    let mut controller = loaded("batman", 3);
    assert_eq!(controller.settle_query("batman"), None);
    assert_eq!(controller.settle_query("  batman "), None);
    assert_eq!(controller.request(), &RequestState::Success);
}

#[test]
fn whitespace_query_is_discover() {
    let mut controller = loaded("heat", 3);
    let effect = controller.settle_query("   ").unwrap();
    assert_eq!(fetch_target(&effect), (CatalogQuery::Discover, 1));
}

// ===== fetch outcomes =====

#[test]
fn successful_search_records_first_result() {
    let mut controller = SearchController::new(0);
    let token = fetch_token(&controller.settle_query("batman").unwrap());

    let follow_up = controller.apply(Outcome::MoviesFetched {
        token,
        result: page_of(&[268, 272, 414], 4),
    });

    assert_eq!(controller.request(), &RequestState::Success);
    assert_eq!(controller.results().len(), 3);
    assert_eq!(controller.total_pages(), 4);
    assert_eq!(
        follow_up,
        Some(Effect::RecordSearch {
            term: "batman".to_string(),
            movie: Movie::new(268, "Movie 268"),
        })
    );
}

#[test]
fn discover_success_records_nothing() {
    let mut controller = SearchController::new(0);
    let effects = controller.start(CatalogQuery::Discover);
    let token = fetch_token(&effects[0]);

    let follow_up = controller.apply(Outcome::MoviesFetched {
        token,
        result: page_of(&[1, 2, 3], 500),
    });

    assert_eq!(follow_up, None);
    assert_eq!(controller.results().len(), 3);
}

#[test]
fn empty_search_result_records_nothing() {
    let mut controller = SearchController::new(0);
    let token = fetch_token(&controller.settle_query("zzzzqx").unwrap());

    let follow_up = controller.apply(Outcome::MoviesFetched {
        token,
        result: page_of(&[], 1),
    });

    assert_eq!(follow_up, None);
    assert_eq!(controller.request(), &RequestState::Success);
    assert!(controller.results().is_empty());
}

#[test]
fn transport_error_shows_generic_message_and_clears_results() {
    let mut controller = loaded("batman", 7);
    let token = fetch_token(&controller.next_page().unwrap());

    controller.apply(Outcome::MoviesFetched {
        token,
        result: Err(FetchError::Transport {
            status: Some(500),
            reason: "Internal Server Error".to_string(),
        }),
    });

    assert_eq!(
        controller.request(),
        &RequestState::Error(FETCH_FAILED_MESSAGE.to_string())
    );
    assert!(controller.results().is_empty());
    assert_eq!(controller.total_pages(), 7, "error keeps pagination usable");
}

#[test]
fn upstream_error_shows_upstream_message() {
    let mut controller = SearchController::new(0);
    let token = fetch_token(&controller.settle_query("batman").unwrap());

    controller.apply(Outcome::MoviesFetched {
        token,
        result: Err(FetchError::Upstream {
            message: "Invalid key".to_string(),
        }),
    });

    assert_eq!(
        controller.request(),
        &RequestState::Error("Invalid key".to_string())
    );
}

#[test]
fn stale_response_is_discarded() {
    let mut controller = SearchController::new(0);
    let first = fetch_token(&controller.settle_query("bat").unwrap());
    let second = fetch_token(&controller.settle_query("batman").unwrap());
    assert!(second > first);

    let follow_up = controller.apply(Outcome::MoviesFetched {
        token: first,
        result: page_of(&[1], 1),
    });
    assert_eq!(follow_up, None);
    assert!(controller.is_loading());
    assert!(controller.results().is_empty());

    controller.apply(Outcome::MoviesFetched {
        token: second,
        result: page_of(&[2, 3], 2),
    });
    assert_eq!(controller.results().len(), 2);
}

#[test]
fn late_response_after_completion_is_discarded() {
    let mut controller = SearchController::new(0);
    let first = fetch_token(&controller.settle_query("bat").unwrap());
    let second = fetch_token(&controller.settle_query("batman").unwrap());

    controller.apply(Outcome::MoviesFetched {
        token: second,
        result: page_of(&[2, 3], 2),
    });
    controller.apply(Outcome::MoviesFetched {
        token: first,
        result: Err(FetchError::network("connection reset")),
    });

    assert_eq!(controller.request(), &RequestState::Success);
    assert_eq!(controller.results().len(), 2);
}

// ===== pagination =====

#[test]
fn prev_on_first_page_is_noop() {
    let mut controller = loaded("heat", 5);
    assert!(!controller.has_prev());
    assert_eq!(controller.prev_page(), None);
    assert_eq!(controller.request(), &RequestState::Success);
}

#[test]
fn next_on_last_page_is_noop() {
    let mut controller = loaded("heat", 1);
    assert!(!controller.has_next());
    assert_eq!(controller.next_page(), None);
}

#[test]
fn next_then_prev_round_trips() {
    let mut controller = loaded("heat", 3);
    let next = controller.next_page().unwrap();
    assert_eq!(fetch_target(&next).1, 2);
    let prev = controller.prev_page().unwrap();
    assert_eq!(fetch_target(&prev).1, 1);
}

#[test]
fn retry_refetches_same_query_and_page_with_new_token() {
    let mut controller = loaded("heat", 3);
    let first = controller.next_page().unwrap();
    let retry = controller.retry();

    assert_eq!(fetch_target(&first), fetch_target(&retry));
    assert!(fetch_token(&retry) > fetch_token(&first));
}

// ===== trending =====

#[test]
fn trending_loaded_records_are_kept() {
    let mut controller = SearchController::new(5);
    controller.start(CatalogQuery::Discover);

    let record = TrendingRecord {
        id: "abc".to_string(),
        search_term: "batman".to_string(),
        count: 4,
        movie_id: 268,
        poster_url: None,
    };
    controller.apply(Outcome::TrendingLoaded(Ok(vec![record.clone()])));

    assert_eq!(controller.trending().records(), &[record]);
}

#[test]
fn trending_failure_hides_strip() {
    let mut controller = SearchController::new(5);
    controller.start(CatalogQuery::Discover);

    controller.apply(Outcome::TrendingLoaded(Err(TrendingStoreError::Storage(
        "disk full".to_string(),
    ))));

    assert_eq!(controller.trending(), &TrendingState::Unavailable);
    assert!(controller.trending().records().is_empty());
}

#[test]
fn trending_outcome_does_not_touch_request_state() {
    let mut controller = SearchController::new(5);
    controller.start(CatalogQuery::Discover);
    controller.apply(Outcome::TrendingLoaded(Ok(Vec::new())));
    assert!(controller.is_loading());
}
