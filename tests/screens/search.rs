//! Search tab: debounced, de-duplicated, latest-wins provider calls.

use std::time::Duration;

use tokio::time::sleep;

use funapp::logic::SearchEvent;

use crate::common::{fixture, fixture_with, ids, test_settings};

#[tokio::test(start_paused = true)]
/// What: A typing burst inside the debounce window costs one provider call.
///
/// - Input: "c", "co", "com" 100 ms apart
/// - Output: One call; results for "com"
async fn burst_calls_provider_once() {
    let fx = fixture();
    let screen = fx.ctx.search_screen();
    for q in ["c", "co", "com"] {
        screen.send(SearchEvent::QueryChanged(q.into()));
        sleep(Duration::from_millis(100)).await;
    }
    let state = screen
        .wait_for(|s| s.active_search > 0 && !s.is_loading)
        .await
        .expect("search screen running");
    assert_eq!(ids(&state.results), ["2"]);
    assert!(state.error.is_none());

    sleep(Duration::from_secs(2)).await;
    assert_eq!(fx.search.count(), 1);
}

#[tokio::test(start_paused = true)]
/// What: Blank queries clear results without touching the provider.
async fn blank_query_skips_provider() {
    let fx = fixture();
    let screen = fx.ctx.search_screen();
    screen.send(SearchEvent::QueryChanged("compose".into()));
    screen
        .wait_for(|s| !s.results.is_empty())
        .await
        .expect("running");
    assert_eq!(fx.search.count(), 1);

    screen.send(SearchEvent::ClearQuery);
    let state = screen
        .wait_for(|s| s.results.is_empty())
        .await
        .expect("running");
    assert!(!state.is_loading);
    assert!(state.query.is_empty());

    screen.send(SearchEvent::QueryChanged("   ".into()));
    sleep(Duration::from_secs(1)).await;
    assert_eq!(fx.search.count(), 1);
    assert!(screen.state().results.is_empty());
}

#[tokio::test(start_paused = true)]
/// What: Re-typing the same query after a detour inside the window is dropped.
async fn unchanged_query_is_not_searched_again() {
    let fx = fixture();
    let screen = fx.ctx.search_screen();
    screen.send(SearchEvent::QueryChanged("com".into()));
    screen
        .wait_for(|s| s.active_search == 1 && !s.is_loading)
        .await
        .expect("running");

    screen.send(SearchEvent::QueryChanged("co".into()));
    sleep(Duration::from_millis(50)).await;
    screen.send(SearchEvent::QueryChanged("com".into()));
    sleep(Duration::from_secs(1)).await;

    let state = screen.state();
    assert_eq!(fx.search.count(), 1);
    assert_eq!(state.active_search, 1);
    assert_eq!(ids(&state.results), ["2"]);
}

#[tokio::test(start_paused = true)]
/// What: A newer query aborts the slower in-flight one.
///
/// - Input: "compose", then "navigation" while the first call is still running
/// - Output: Two calls; only navigation results ever applied
async fn newer_query_wins() {
    let fx = fixture_with(test_settings(), Duration::from_millis(500), false);
    let screen = fx.ctx.search_screen();
    let mut rx = screen.subscribe();

    screen.send(SearchEvent::QueryChanged("compose".into()));
    sleep(Duration::from_millis(400)).await;
    screen.send(SearchEvent::QueryChanged("navigation".into()));

    let mut seen_results = Vec::new();
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        if !state.results.is_empty() {
            seen_results.push(ids(&state.results));
        }
        if state.active_search == 2 && !state.is_loading {
            break;
        }
    }
    assert_eq!(seen_results, [["3"]]);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(fx.search.count(), 2);
    assert_eq!(ids(&screen.state().results), ["3"]);
}

#[tokio::test(start_paused = true)]
/// What: A provider failure surfaces its message and clears results.
async fn provider_failure_sets_error() {
    let fx = fixture_with(test_settings(), Duration::from_millis(100), true);
    let screen = fx.ctx.search_screen();
    screen.send(SearchEvent::QueryChanged("compose".into()));
    let state = screen
        .wait_for(|s| s.error.is_some())
        .await
        .expect("running");
    assert_eq!(state.error.as_deref(), Some("search backend down"));
    assert!(state.results.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test(start_paused = true)]
/// What: Search results follow the favorites store.
async fn results_follow_favorites() {
    let fx = fixture();
    let screen = fx.ctx.search_screen();
    screen.send(SearchEvent::QueryChanged("ui".into()));
    let state = screen
        .wait_for(|s| !s.results.is_empty())
        .await
        .expect("running");
    assert_eq!(ids(&state.results), ["2", "3"]);

    screen.send(SearchEvent::FavoriteToggled("3".into()));
    let state = screen
        .wait_for(|s| s.results.iter().any(|i| i.is_favorite))
        .await
        .expect("running");
    assert!(fx.ctx.favorites.is_favorite("3"));
    assert!(!state.results[0].is_favorite);
    assert!(state.results[1].is_favorite);
}
