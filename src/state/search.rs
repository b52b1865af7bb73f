//! State held by the Search tab.

use super::types::{FavoritesSet, Item};

/// Snapshot of the Search tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Query text exactly as typed.
    pub query: String,
    /// A provider search is in flight.
    pub is_loading: bool,
    /// Results of the latest resolved search.
    pub results: Vec<Item>,
    /// Message of the last failed search.
    pub error: Option<String>,
    /// Id of the search whose result may still be applied.
    pub active_search: u64,
    /// Latest favorites snapshot seen by this screen.
    pub favorites: FavoritesSet,
}

impl SearchState {
    /// Empty search state carrying the favorites snapshot at construction.
    pub fn new(favorites: FavoritesSet) -> Self {
        Self {
            favorites,
            ..Default::default()
        }
    }
}
