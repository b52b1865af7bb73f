//! Items screen: category chips, debounced filter, favorites projection, recovery.

use std::time::Duration;

use tokio::time::sleep;

use funapp::app::context::ItemsScreen;
use funapp::logic::ItemsEvent;
use funapp::settings::FeatureFlag;
use funapp::state::ItemsState;

use crate::common::{fixture, fixture_with, ids, test_settings};

/// Wait for the initial catalog load.
async fn loaded(screen: &ItemsScreen) -> ItemsState {
    screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("items screen running")
}

#[tokio::test(start_paused = true)]
/// What: Loading yields every item and the sorted category chips.
async fn initial_load_lists_everything() {
    let fx = fixture();
    let screen = fx.ctx.items_screen();
    let state = loaded(&screen).await;
    assert_eq!(ids(&state.filtered_items), ["1", "2", "3"]);
    assert_eq!(state.all_categories, ["Concurrency", "UI"]);
    assert!(state.error.is_none());
}

#[tokio::test(start_paused = true)]
/// What: Tapping a chip filters by category and tapping it again clears it.
///
/// - Input: Select "UI" twice with an empty query
/// - Output: `[2, 3]`, then all three items
async fn category_chip_toggles() {
    let fx = fixture();
    let screen = fx.ctx.items_screen();
    loaded(&screen).await;

    screen.send(ItemsEvent::CategorySelected(Some("UI".into())));
    let state = screen
        .wait_for(|s| s.selected_category.is_some())
        .await
        .expect("running");
    assert_eq!(ids(&state.filtered_items), ["2", "3"]);

    screen.send(ItemsEvent::CategorySelected(Some("UI".into())));
    let state = screen
        .wait_for(|s| s.selected_category.is_none())
        .await
        .expect("running");
    assert_eq!(ids(&state.filtered_items), ["1", "2", "3"]);
}

#[tokio::test(start_paused = true)]
/// What: A full query settles to the matching item after debounce plus latency.
async fn query_settles_to_matches() {
    let fx = fixture();
    let screen = fx.ctx.items_screen();
    loaded(&screen).await;

    screen.send(ItemsEvent::QueryChanged("Compose".into()));
    let state = screen
        .wait_for(|s| s.query == "Compose")
        .await
        .expect("running");
    assert!(state.is_searching);

    let state = screen
        .wait_for(|s| s.query == "Compose" && !s.is_searching)
        .await
        .expect("running");
    assert_eq!(ids(&state.filtered_items), ["2"]);
}

#[tokio::test(start_paused = true)]
/// What: Rapid typing only settles the last query.
///
/// - Input: "c", "co", "com" 100 ms apart; 400 ms debounce plus 300 ms latency
/// - Output: Still searching when "co" would have settled; `[2]` once "com" settles
async fn rapid_typing_settles_once() {
    let fx = fixture();
    let screen = fx.ctx.items_screen();
    loaded(&screen).await;

    screen.send(ItemsEvent::QueryChanged("c".into()));
    sleep(Duration::from_millis(100)).await;
    screen.send(ItemsEvent::QueryChanged("co".into()));
    sleep(Duration::from_millis(100)).await;
    screen.send(ItemsEvent::QueryChanged("com".into()));

    // "co" would have settled at 800 ms, "com" settles at 900 ms.
    sleep(Duration::from_millis(650)).await;
    let state = screen.state();
    assert_eq!(state.query, "com");
    assert!(state.is_searching);
    assert!(state.filtered_items.is_empty());

    sleep(Duration::from_millis(100)).await;
    let state = screen.state();
    assert!(!state.is_searching);
    assert_eq!(ids(&state.filtered_items), ["2"]);
}

#[tokio::test(start_paused = true)]
/// What: A one-character query asks for more input and never searches.
async fn short_query_needs_more_characters() {
    let fx = fixture();
    let screen = fx.ctx.items_screen();
    loaded(&screen).await;

    screen.send(ItemsEvent::QueryChanged("C".into()));
    let state = screen
        .wait_for(|s| s.query == "C")
        .await
        .expect("running");
    assert!(state.needs_more_characters);
    assert!(!state.is_searching);
    assert!(state.filtered_items.is_empty());

    sleep(Duration::from_secs(2)).await;
    let state = screen.state();
    assert!(state.filtered_items.is_empty());
    assert!(!state.is_searching);

    screen.send(ItemsEvent::QueryChanged(String::new()));
    let state = screen
        .wait_for(|s| s.query.is_empty())
        .await
        .expect("running");
    assert!(!state.needs_more_characters);
    assert_eq!(ids(&state.filtered_items), ["1", "2", "3"]);
}

#[tokio::test(start_paused = true)]
/// What: Favorites changes re-stamp rows without re-filtering.
///
/// - Input: Store toggles "2", then the row's toggle intent flips it back
/// - Output: Only item 2 flagged, then nothing flagged
async fn favorites_project_onto_rows() {
    let fx = fixture();
    let screen = fx.ctx.items_screen();
    loaded(&screen).await;

    assert!(fx.ctx.favorites.toggle_favorite("2"));
    let state = screen
        .wait_for(|s| s.favorites.contains("2"))
        .await
        .expect("running");
    let flagged: Vec<&str> = state
        .filtered_items
        .iter()
        .filter(|i| i.is_favorite)
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(flagged, ["2"]);
    assert_eq!(ids(&state.filtered_items), ["1", "2", "3"]);

    screen.send(ItemsEvent::FavoriteToggled("2".into()));
    let state = screen
        .wait_for(|s| s.favorites.is_empty())
        .await
        .expect("running");
    assert!(state.all_items.iter().all(|i| !i.is_favorite));
    assert!(!fx.ctx.favorites.is_favorite("2"));
}

#[tokio::test(start_paused = true)]
/// What: A failed load clears the list and a refresh recovers once errors stop.
async fn failed_load_recovers_on_refresh() {
    let mut settings = test_settings();
    settings.simulate_errors = true;
    let fx = fixture_with(settings, Duration::from_millis(100), false);
    let screen = fx.ctx.items_screen();

    let state = loaded(&screen).await;
    assert_eq!(state.error.as_deref(), Some("Simulated network error"));
    assert!(state.all_items.is_empty());
    assert!(state.filtered_items.is_empty());

    fx.ctx.settings.set_flag(FeatureFlag::SimulateErrors, false);
    screen.send(ItemsEvent::RefreshRequested);
    let state = screen
        .wait_for(|s| !s.is_loading && s.error.is_none())
        .await
        .expect("running");
    assert_eq!(ids(&state.filtered_items), ["1", "2", "3"]);
}
