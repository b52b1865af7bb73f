//! Home feed, item detail, and profile screens.

use std::time::Duration;

use funapp::app::AppContext;
use funapp::favorites::FavoritesStore;
use funapp::logic::{DetailEvent, HomeEvent, ProfileEvent};
use funapp::settings::{FeatureFlag, LatencyTuning, SettingsStore};
use funapp::sources::descriptions::long_description;
use funapp::sources::{ExtractiveSummarizer, Summarizer};

use crate::common::{fixture, fixture_with, ids, test_settings};

#[tokio::test(start_paused = true)]
/// What: Home loads every item and pages the carousel in pairs.
async fn home_loads_catalog_and_carousel() {
    let fx = fixture();
    let screen = fx.ctx.home_screen();
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("home screen running");
    assert!(state.carousel_enabled);
    assert_eq!(ids(&state.all_items), ["1", "2", "3"]);
    let sizes: Vec<usize> = state.carousel_pages.iter().map(Vec::len).collect();
    assert_eq!(sizes, [2, 1]);
}

#[tokio::test(start_paused = true)]
/// What: The carousel follows the settings toggle while the screen is open.
async fn home_follows_carousel_setting() {
    let fx = fixture();
    let screen = fx.ctx.home_screen();
    screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("running");

    fx.ctx.settings.set_flag(FeatureFlag::FeaturedCarousel, false);
    screen
        .wait_for(|s| !s.carousel_enabled)
        .await
        .expect("running");

    fx.ctx.settings.reset_feature_toggles();
    screen
        .wait_for(|s| s.carousel_enabled)
        .await
        .expect("running");
}

#[tokio::test(start_paused = true)]
/// What: Home favorites toggles reach the store and both projections.
async fn home_favorite_toggle() {
    let fx = fixture();
    let screen = fx.ctx.home_screen();
    screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("running");

    screen.send(HomeEvent::FavoriteToggled("1".into()));
    let state = screen
        .wait_for(|s| s.favorites.contains("1"))
        .await
        .expect("running");
    assert!(state.all_items[0].is_favorite);
    let in_carousel = state
        .carousel_pages
        .iter()
        .flatten()
        .find(|i| i.id == "1")
        .expect("item 1 in carousel");
    assert!(in_carousel.is_favorite);
}

#[tokio::test(start_paused = true)]
/// What: Detail loads the item, its long description, and offers a summary.
async fn detail_loads_and_summarizes() {
    let fx = fixture();
    let screen = fx.ctx.detail_screen("2");
    let state = screen
        .wait_for(|s| !s.is_loading && s.show_ai_summary)
        .await
        .expect("detail screen running");
    let item = state.item.expect("item loaded");
    assert_eq!(item.title, "Compose");
    assert!(state.detailed_description.is_some());

    screen.send(DetailEvent::GenerateSummary);
    let state = screen
        .wait_for(|s| s.ai_summary.is_some())
        .await
        .expect("running");
    assert!(!state.is_ai_summarizing);
    assert!(state.ai_summary_error.is_none());
    assert!(!state.ai_summary.unwrap_or_default().is_empty());
}

#[tokio::test(start_paused = true)]
/// What: Unknown ids render a placeholder item instead of an error.
async fn detail_unknown_id_placeholder() {
    let fx = fixture();
    let screen = fx.ctx.detail_screen("99");
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("running");
    assert!(state.error.is_none());
    assert_eq!(state.item.expect("placeholder").title, "Item 99");
    assert!(state.detailed_description.is_none());
}

#[tokio::test(start_paused = true)]
/// What: With AI summaries switched off the action is never offered.
async fn detail_hides_summary_when_disabled() {
    let mut settings = test_settings();
    settings.ai_summary_enabled = false;
    let fx = fixture_with(settings, Duration::from_millis(100), false);
    let screen = fx.ctx.detail_screen("1");
    screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("running");
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(!screen.state().show_ai_summary);
}

#[tokio::test(start_paused = true)]
/// What: The detail favorite button flips the shown item in the store.
async fn detail_favorite_toggle() {
    let fx = fixture();
    let screen = fx.ctx.detail_screen("3");
    screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("running");

    screen.send(DetailEvent::FavoriteToggled);
    let state = screen
        .wait_for(|s| s.item.as_ref().is_some_and(|i| i.is_favorite))
        .await
        .expect("running");
    assert!(state.favorites.contains("3"));
    assert!(fx.ctx.favorites.is_favorite("3"));
}

#[tokio::test(start_paused = true)]
/// What: Profile loads, fails under simulated errors, and recovers on refresh.
async fn profile_load_and_recovery() {
    let mut settings = test_settings();
    settings.simulate_errors = true;
    let fx = fixture_with(settings, Duration::from_millis(100), false);
    let screen = fx.ctx.profile_screen();
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("profile screen running");
    assert!(state.profile.is_none());
    assert_eq!(state.error.as_deref(), Some("Simulated network error"));

    fx.ctx.settings.set_flag(FeatureFlag::SimulateErrors, false);
    screen.send(ProfileEvent::RefreshRequested);
    let state = screen
        .wait_for(|s| s.profile.is_some())
        .await
        .expect("running");
    assert!(state.error.is_none());
    assert_eq!(state.profile.expect("profile").name, "Alex Developer");
}

#[tokio::test(start_paused = true)]
/// What: A profile screen opened for another user loads that user's id.
async fn profile_detail_loads_requested_user() {
    let fx = fixture();
    let screen = fx.ctx.profile_detail_screen("user_42");
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .expect("profile screen running");
    assert!(state.error.is_none());
    assert_eq!(state.profile.expect("profile").id, "user_42");

    let own = fx.ctx.profile_screen();
    let state = own
        .wait_for(|s| !s.is_loading)
        .await
        .expect("running");
    assert_eq!(state.profile.expect("profile").id, "current_user");
}

#[tokio::test(start_paused = true)]
/// What: The configured summary length reaches the detail screen's summarizer.
///
/// - Input: `[summary] max_sentences = 1` on a context built from settings
/// - Output: The screen's summary equals a one-sentence summary of the long description
async fn detail_summary_follows_configured_length() {
    let mut settings = test_settings();
    settings.latency = LatencyTuning::zero();
    settings.summary.max_sentences = 1;
    let ctx = AppContext::new(
        SettingsStore::new(settings),
        FavoritesStore::in_memory(Default::default()),
    );
    let screen = ctx.detail_screen("2");
    screen
        .wait_for(|s| !s.is_loading && s.show_ai_summary)
        .await
        .expect("detail screen running");

    screen.send(DetailEvent::GenerateSummary);
    let state = screen
        .wait_for(|s| s.ai_summary.is_some())
        .await
        .expect("running");

    let text = long_description("2").expect("long description for item 2");
    let expected = ExtractiveSummarizer::default()
        .with_max_sentences(1)
        .summarize(text)
        .await
        .expect("summary");
    assert_eq!(state.ai_summary.as_deref(), Some(expected.as_str()));
}
