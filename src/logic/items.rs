//! Items screen reducer: category chips plus a debounced live text filter.
//!
//! The reducer is pure. Timing lives in the runtime, which turns
//! [`ItemsEffect::ScheduleSearch`] into a cancellable sleep and feeds back
//! [`ItemsEvent::SearchSettled`] carrying the token it was scheduled with.

use super::favorites::restamp;
use super::filter::{distinct_categories, filter_items, shuffle_with_seed};
use crate::settings::SearchTuning;
use crate::sources::ProviderResult;
use crate::state::{FavoritesSet, Item, ItemsState};

/// Inputs accepted by the Items screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsEvent {
    /// Query text edited.
    QueryChanged(String),
    /// Category chip tapped; selecting the active chip (or `None`) clears it.
    CategorySelected(Option<String>),
    /// Reload the catalog.
    RefreshRequested,
    /// Catalog fetch finished.
    CatalogLoaded(ProviderResult<Vec<Item>>),
    /// Debounce plus simulated latency elapsed for `token`.
    SearchSettled {
        /// Token the search was scheduled with.
        token: u64,
        /// Seed for reordering results, `None` keeps catalog order.
        order_seed: Option<u64>,
    },
    /// Favorites store emitted a new set.
    FavoritesChanged(FavoritesSet),
    /// Favorite button tapped on a row.
    FavoriteToggled(String),
}

/// Side effects requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsEffect {
    /// Fetch the catalog and deliver [`ItemsEvent::CatalogLoaded`].
    FetchCatalog,
    /// Replace any pending search with one for `token`.
    ScheduleSearch {
        /// Token to echo back in [`ItemsEvent::SearchSettled`].
        token: u64,
    },
    /// Drop the pending search, if any.
    CancelSearch,
    /// Flip the item in the favorites store.
    ToggleFavorite(String),
}

/// What: Recompute `filtered_items` from the full list, query, and category.
///
/// Details:
/// - Short queries keep the list empty until more characters arrive.
fn apply_filters(state: &mut ItemsState) {
    state.filtered_items = if state.needs_more_characters {
        Vec::new()
    } else {
        filter_items(
            &state.all_items,
            &state.query,
            state.selected_category.as_deref(),
        )
    };
}

/// What: Handle a query edit.
///
/// Inputs:
/// - `state`: Current state (token already advanced)
/// - `tuning`: Minimum query length
///
/// Output:
/// - Effects cancelling or scheduling the debounced search.
fn on_query_changed(state: &mut ItemsState, tuning: &SearchTuning) -> Vec<ItemsEffect> {
    let len = state.query.trim().chars().count();
    if len == 0 {
        state.needs_more_characters = false;
        state.is_searching = false;
        apply_filters(state);
        vec![ItemsEffect::CancelSearch]
    } else if len < tuning.min_query_chars {
        state.needs_more_characters = true;
        state.is_searching = false;
        state.filtered_items.clear();
        vec![ItemsEffect::CancelSearch]
    } else {
        state.needs_more_characters = false;
        state.is_searching = true;
        vec![ItemsEffect::ScheduleSearch {
            token: state.search_token,
        }]
    }
}

/// What: Advance the Items screen by one event.
///
/// Inputs:
/// - `state`: Previous snapshot
/// - `event`: Input to apply
/// - `tuning`: Search thresholds
///
/// Output:
/// - Next snapshot and the effects the runtime must perform, in order.
///
/// Details:
/// - Every query edit bumps `search_token`; settled searches with an older token are dropped.
/// - Favorites updates only re-stamp flags and never re-filter.
pub fn reduce(
    mut state: ItemsState,
    event: ItemsEvent,
    tuning: &SearchTuning,
) -> (ItemsState, Vec<ItemsEffect>) {
    let effects = match event {
        ItemsEvent::QueryChanged(query) => {
            state.query = query;
            state.search_token = state.search_token.wrapping_add(1);
            on_query_changed(&mut state, tuning)
        }
        ItemsEvent::CategorySelected(category) => {
            state.selected_category = if state.selected_category == category {
                None
            } else {
                category
            };
            apply_filters(&mut state);
            Vec::new()
        }
        ItemsEvent::RefreshRequested => {
            state.is_loading = true;
            state.error = None;
            vec![ItemsEffect::FetchCatalog]
        }
        ItemsEvent::CatalogLoaded(Ok(items)) => {
            state.is_loading = false;
            state.error = None;
            state.all_items = restamp(&items, &state.favorites);
            state.all_categories = distinct_categories(&state.all_items);
            apply_filters(&mut state);
            tracing::debug!(
                count = state.all_items.len(),
                categories = state.all_categories.len(),
                "[Items] Catalog loaded"
            );
            Vec::new()
        }
        ItemsEvent::CatalogLoaded(Err(e)) => {
            tracing::warn!(error = %e, "[Items] Catalog load failed");
            state.is_loading = false;
            state.error = Some(e.message().to_string());
            state.all_items.clear();
            state.filtered_items.clear();
            state.all_categories.clear();
            Vec::new()
        }
        ItemsEvent::SearchSettled { token, order_seed } => {
            if token == state.search_token {
                apply_filters(&mut state);
                if let Some(seed) = order_seed {
                    shuffle_with_seed(&mut state.filtered_items, seed);
                }
                state.is_searching = false;
            } else {
                tracing::debug!(token, current = state.search_token, "[Items] Dropping stale search");
            }
            Vec::new()
        }
        ItemsEvent::FavoritesChanged(favorites) => {
            state.all_items = restamp(&state.all_items, &favorites);
            state.filtered_items = restamp(&state.filtered_items, &favorites);
            state.favorites = favorites;
            Vec::new()
        }
        ItemsEvent::FavoriteToggled(id) => vec![ItemsEffect::ToggleFavorite(id)],
    };
    (state, effects)
}
