//! State held by the Items screen (category chips + live text filter).

use super::types::{FavoritesSet, Item};

/// Snapshot of the Items screen.
///
/// Produced by [`crate::logic::items::reduce`]; consumers only ever observe
/// whole snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemsState {
    /// Catalog load in progress.
    pub is_loading: bool,
    /// A debounced search is pending or running.
    pub is_searching: bool,
    /// Query is non-empty but shorter than the minimum search length.
    pub needs_more_characters: bool,
    /// Full, unfiltered catalog as last fetched.
    pub all_items: Vec<Item>,
    /// Items matching the current query and category.
    pub filtered_items: Vec<Item>,
    /// Query text exactly as typed.
    pub query: String,
    /// Currently selected category chip, if any.
    pub selected_category: Option<String>,
    /// Distinct categories of `all_items`, sorted.
    pub all_categories: Vec<String>,
    /// Message of the last failed load.
    pub error: Option<String>,
    /// Latest favorites snapshot seen by this screen.
    pub favorites: FavoritesSet,
    /// Identifies the most recent query change; older search results are stale.
    pub search_token: u64,
}

impl ItemsState {
    /// What: Initial state for a freshly spawned Items screen.
    ///
    /// Inputs:
    /// - `favorites`: Favorites snapshot at construction time
    ///
    /// Output:
    /// - State with `is_loading = true` and no items.
    pub fn loading(favorites: FavoritesSet) -> Self {
        Self {
            is_loading: true,
            favorites,
            ..Default::default()
        }
    }
}
