use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use httpmock::Method::GET;
use istocks_core::view::{
    EMPTY_QUERY_MESSAGE, LoadOutcome, LoadPhase, SearchController, UNEXPECTED_ERROR_MESSAGE,
};

use crate::common::{TEST_KEY, client_for, fixture, setup_server};
use crate::fakes::{Failing, Panicking, Stalled};

#[tokio::test]
async fn search_success_stores_results() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search-name")
            .query_param("query", "AAPL")
            .query_param("apikey", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search-name", "AAPL", "json"));
    });
    let ctrl = SearchController::new(Arc::new(client_for(&server)));

    let outcome = ctrl.search("AAPL").await;

    mock.assert();
    assert_eq!(outcome, LoadOutcome::Loaded);
    let state = ctrl.state();
    assert_eq!(state.phase, LoadPhase::Success);
    assert!(!state.is_loading());
    assert_eq!(state.error, None);
    assert_eq!(state.data.len(), 1);
    assert_eq!(state.data[0].symbol, "AAPL");
    assert_eq!(state.data[0].name, "Apple Inc.");
    assert_eq!(state.data[0].exchange_full_name, "NASDAQ Global Select");
}

#[tokio::test]
async fn blank_query_fails_fast_without_network() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("[]");
    });
    let ctrl = SearchController::new(Arc::new(client_for(&server)));

    for query in ["", "   ", "\n\t "] {
        assert_eq!(ctrl.search(query).await, LoadOutcome::Failed);
        let state = ctrl.state();
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        assert!(state.data.is_empty());
        assert!(!ctrl.is_loading());
    }

    mock.assert_calls(0);
}

#[tokio::test]
async fn query_is_trimmed_before_sending() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search-name")
            .query_param("query", "AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search-name", "AAPL", "json"));
    });
    let ctrl = SearchController::new(Arc::new(client_for(&server)));

    assert_eq!(ctrl.search("  AAPL \n").await, LoadOutcome::Loaded);
    mock.assert();
}

#[tokio::test]
async fn new_search_clears_previous_results() {
    let server = setup_server();
    let hit = server.mock(|when, then| {
        when.method(GET)
            .path("/search-name")
            .query_param("query", "AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search-name", "AAPL", "json"));
    });
    let miss = server.mock(|when, then| {
        when.method(GET)
            .path("/search-name")
            .query_param("query", "qwxz");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let ctrl = SearchController::new(Arc::new(client_for(&server)));

    assert_eq!(ctrl.search("AAPL").await, LoadOutcome::Loaded);
    assert_eq!(ctrl.results().len(), 1);

    assert_eq!(ctrl.search("qwxz").await, LoadOutcome::Failed);

    hit.assert();
    miss.assert();
    assert!(ctrl.results().is_empty());
    assert_eq!(
        ctrl.error_message().as_deref(),
        Some("No matching results were found.")
    );
}

#[tokio::test]
async fn error_message_is_replaced_not_appended() {
    let service = Arc::new(Failing::default());
    let ctrl = SearchController::new(service.clone());

    assert_eq!(ctrl.search("AAPL").await, LoadOutcome::Failed);
    assert_eq!(
        ctrl.error_message().as_deref(),
        Some("API Error: failure #1. Please check your API key or try again later.")
    );

    assert_eq!(ctrl.search("MSFT").await, LoadOutcome::Failed);
    assert_eq!(
        ctrl.error_message().as_deref(),
        Some("API Error: failure #2. Please check your API key or try again later.")
    );
    assert_eq!(service.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn search_while_loading_is_rejected() {
    let service = Arc::new(Stalled::default());
    let ctrl = SearchController::new(service.clone());
    let mut rx = ctrl.subscribe();

    let (first, ()) = tokio::join!(ctrl.search("AAPL"), async {
        rx.wait_for(|s| s.is_loading()).await.unwrap();
        assert_eq!(ctrl.search("MSFT").await, LoadOutcome::Rejected);
        assert_eq!(ctrl.search("   ").await, LoadOutcome::Rejected);
        assert!(ctrl.is_loading());
        ctrl.cancel();
    });

    assert_eq!(first, LoadOutcome::Cancelled);
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelled_search_leaves_no_error() {
    let ctrl = SearchController::new(Arc::new(Stalled::default()));
    let mut rx = ctrl.subscribe();
    let (outcome, ()) = tokio::join!(ctrl.search("AAPL"), async {
        rx.wait_for(|s| s.is_loading()).await.unwrap();
        ctrl.cancel();
    });

    assert_eq!(outcome, LoadOutcome::Cancelled);
    let state = ctrl.state();
    assert_eq!(state.phase, LoadPhase::Idle);
    assert_eq!(state.error, None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn dropping_the_search_counts_as_cancellation() {
    let ctrl = SearchController::new(Arc::new(Stalled::default()));

    let timed_out = tokio::time::timeout(Duration::from_millis(20), ctrl.search("AAPL")).await;

    assert!(timed_out.is_err());
    let state = ctrl.state();
    assert_eq!(state.phase, LoadPhase::Idle);
    assert_eq!(state.error, None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn panic_during_search_is_stored_as_failure() {
    let ctrl = SearchController::new(Arc::new(Panicking));

    assert_eq!(ctrl.search("AAPL").await, LoadOutcome::Failed);

    let state = ctrl.state();
    assert_eq!(state.phase, LoadPhase::Failed);
    assert_eq!(state.error.as_deref(), Some(UNEXPECTED_ERROR_MESSAGE));
    assert!(!state.is_loading());

    // still usable
    assert_eq!(ctrl.search("").await, LoadOutcome::Failed);
}

#[tokio::test]
async fn subscribers_see_each_transition() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/search-name");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search-name", "Apple", "json"));
    });
    let ctrl = SearchController::new(Arc::new(client_for(&server)));
    let mut rx = ctrl.subscribe();
    assert_eq!(rx.borrow().phase, LoadPhase::Idle);

    // the search is parked on network I/O by the time the second branch runs
    let (outcome, saw_loading) = tokio::join!(ctrl.search("Apple"), async {
        ctrl.is_loading()
    });

    assert_eq!(outcome, LoadOutcome::Loaded);
    assert!(saw_loading);
    assert!(rx.has_changed().unwrap());
    let latest = rx.borrow_and_update().clone();
    assert_eq!(latest.phase, LoadPhase::Success);
    assert_eq!(latest.data.len(), 3);
}
