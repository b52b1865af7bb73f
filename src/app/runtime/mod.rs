//! Headless driver for the screen machines plus the runtime primitives.

use std::path::Path;

use crate::app::context::AppContext;
use crate::args::Args;
use crate::favorites::FavoritesStore;
use crate::logic::profile::CURRENT_USER_ID;
use crate::logic::{DetailEvent, ItemsEvent, SearchEvent};
use crate::settings::{self, FeatureFlag, SettingsStore, paths};
use crate::state::Item;

pub mod screen;
pub mod workers;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Error returned when a screen stops before reaching the awaited state.
const SCREEN_STOPPED: &str = "screen stopped unexpectedly";

/// What: Load settings for a run, applying command-line overrides.
///
/// Inputs:
/// - `config_dir`: Resolved configuration directory
/// - `args`: Parsed arguments
///
/// Output:
/// - Store seeded from `funapp.toml` with the overrides applied.
///
/// Details:
/// - Order: `--reset-settings`, `--appearance`, each `--set-flag`, then `--simulate-errors`.
/// - Overrides last for this run only; the file is left untouched.
pub fn load_run_settings(config_dir: &Path, args: &Args) -> SettingsStore {
    let store = SettingsStore::new(settings::load_settings(&paths::settings_path(config_dir)));
    if args.reset_settings {
        store.reset_appearance();
        store.reset_feature_toggles();
    }
    if let Some(mode) = args.appearance {
        store.set_appearance_mode(mode);
    }
    for &(flag, enabled) in &args.set_flag {
        store.set_flag(flag, enabled);
    }
    if args.simulate_errors {
        store.set_flag(FeatureFlag::SimulateErrors, true);
    }
    store
}

/// What: Render one list row.
///
/// Output:
/// - `"* <id>  <title> [<category>]"` with `*` only for favorites.
pub fn format_item(item: &Item) -> String {
    let star = if item.is_favorite { '*' } else { ' ' };
    format!("{star} {:>3}  {} [{}]", item.id, item.title, item.category)
}

/// Print a list of items, or a placeholder line when empty.
fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("  (no items)");
    }
    for item in items {
        println!("{}", format_item(item));
    }
}

/// What: Run funapp headlessly for one command line.
///
/// Inputs:
/// - `args`: Parsed arguments selecting the screen to drive
///
/// Output:
/// - `Ok(())` after printing the screen's settled state; `Err` if a screen stops early.
///
/// Details:
/// - `--toggle-favorite` is applied first and persisted to the preference file.
/// - Screen priority: `--search`, `--detail`, `--profile [ID]`, Items (`--query`/`--category`), Home.
pub async fn run(args: &Args) -> Result<()> {
    let config_dir = paths::config_dir(args.config_dir.as_deref());
    let store = load_run_settings(&config_dir, args);
    let settings = store.current();
    tracing::info!(
        config = %config_dir.display(),
        appearance = ?settings.appearance_mode,
        featured_carousel = settings.featured_carousel_enabled,
        ai_summary = settings.ai_summary_enabled,
        simulate_errors = settings.simulate_errors,
        "[Runtime] Starting"
    );
    let ctx = AppContext::new(store, FavoritesStore::open(paths::prefs_path(&config_dir)));

    if let Some(id) = args.toggle_favorite.as_deref() {
        let now = ctx.favorites.toggle_favorite(id);
        println!("{} {id}", if now { "Favorited" } else { "Unfavorited" });
    }

    if let Some(query) = args.search.as_deref() {
        run_search(&ctx, query).await
    } else if let Some(id) = args.detail.as_deref() {
        run_detail(&ctx, id, args.summarize).await
    } else if let Some(user) = args.profile.as_ref() {
        run_profile(&ctx, user.as_deref().unwrap_or(CURRENT_USER_ID)).await
    } else if args.query.is_some() || args.category.is_some() {
        run_items(&ctx, args.query.as_deref(), args.category.as_deref()).await
    } else {
        run_home(&ctx).await
    }
}

/// Drive the Items screen with an optional category and query.
async fn run_items(ctx: &AppContext, query: Option<&str>, category: Option<&str>) -> Result<()> {
    let screen = ctx.items_screen();
    let loaded = screen
        .wait_for(|s| !s.is_loading)
        .await
        .ok_or(SCREEN_STOPPED)?;
    if let Some(err) = loaded.error {
        println!("Error: {err}");
        return Ok(());
    }
    if let Some(cat) = category {
        screen.send(ItemsEvent::CategorySelected(Some(cat.to_string())));
    }
    let query = query.unwrap_or_default().to_string();
    screen.send(ItemsEvent::QueryChanged(query.clone()));
    let wanted = category.map(ToString::to_string);
    let state = screen
        .wait_for(|s| s.query == query && s.selected_category == wanted && !s.is_searching)
        .await
        .ok_or(SCREEN_STOPPED)?;
    println!("Categories: {}", state.all_categories.join(", "));
    if state.needs_more_characters {
        println!("Type at least 2 characters to search.");
    }
    print_items(&state.filtered_items);
    screen.shutdown().await;
    Ok(())
}

/// Drive the Search tab for one query.
async fn run_search(ctx: &AppContext, query: &str) -> Result<()> {
    let screen = ctx.search_screen();
    screen.send(SearchEvent::QueryChanged(query.to_string()));
    let state = screen
        .wait_for(|s| s.active_search > 0 && !s.is_loading)
        .await
        .ok_or(SCREEN_STOPPED)?;
    if let Some(err) = state.error {
        println!("Error: {err}");
    }
    println!("Results for {query:?}: {}", state.results.len());
    print_items(&state.results);
    screen.shutdown().await;
    Ok(())
}

/// Drive a detail screen, optionally generating a summary.
async fn run_detail(ctx: &AppContext, id: &str, summarize: bool) -> Result<()> {
    let screen = ctx.detail_screen(id);
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .ok_or(SCREEN_STOPPED)?;
    let Some(item) = state.item else {
        println!("Error: {}", state.error.unwrap_or_default());
        return Ok(());
    };
    println!("{}", format_item(&item));
    println!("{}", item.subtitle);
    println!();
    println!("{}", state.detailed_description.as_deref().unwrap_or(&item.description));
    if summarize {
        screen.send(DetailEvent::GenerateSummary);
        let state = screen
            .wait_for(|s| s.ai_summary.is_some() || s.ai_summary_error.is_some())
            .await
            .ok_or(SCREEN_STOPPED)?;
        println!();
        match (state.ai_summary, state.ai_summary_error) {
            (_, Some(err)) => println!("Summary failed: {err}"),
            (Some(summary), None) => println!("Summary: {summary}"),
            (None, None) => {}
        }
    }
    screen.shutdown().await;
    Ok(())
}

/// Drive the profile screen for `user_id`.
async fn run_profile(ctx: &AppContext, user_id: &str) -> Result<()> {
    let screen = ctx.profile_detail_screen(user_id);
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .ok_or(SCREEN_STOPPED)?;
    match (state.profile, state.error) {
        (Some(p), _) => {
            println!("{} <{}> [{}]", p.name, p.email, p.id);
            if let Some(bio) = p.bio {
                println!("{bio}");
            }
            println!(
                "views: {}  favorites: {}  days: {}",
                p.views_count, p.favorites_count, p.days_count
            );
        }
        (None, err) => println!("Error: {}", err.unwrap_or_default()),
    }
    screen.shutdown().await;
    Ok(())
}

/// Drive the Home feed.
async fn run_home(ctx: &AppContext) -> Result<()> {
    let screen = ctx.home_screen();
    let state = screen
        .wait_for(|s| !s.is_loading)
        .await
        .ok_or(SCREEN_STOPPED)?;
    if let Some(err) = state.error {
        println!("Error: {err}");
        return Ok(());
    }
    if state.carousel_enabled {
        println!("Featured:");
        for (n, page) in state.carousel_pages.iter().enumerate() {
            let titles: Vec<&str> = page.iter().map(|i| i.title.as_str()).collect();
            println!("  [{}] {}", n + 1, titles.join(" | "));
        }
        println!();
    }
    println!("All items:");
    print_items(&state.all_items);
    screen.shutdown().await;
    Ok(())
}
