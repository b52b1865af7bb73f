//! Search tab reducer.
//!
//! Debounce, de-duplication, and latest-wins cancellation happen in the query
//! worker; this reducer only decides which worker reports may touch state.

use super::favorites::restamp;
use crate::sources::ProviderResult;
use crate::state::{FavoritesSet, SearchResult, SearchState};

/// Inputs accepted by the Search tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// Query text edited.
    QueryChanged(String),
    /// Clear button tapped; same as an empty query.
    ClearQuery,
    /// The worker started a provider call for search `id`.
    SearchStarted {
        /// Search id assigned by the worker.
        id: u64,
    },
    /// Search `id` finished; `None` means a blank query resolved without a provider call.
    SearchResolved {
        /// Search id assigned by the worker.
        id: u64,
        /// Provider outcome, if the provider was called.
        outcome: Option<ProviderResult<SearchResult>>,
    },
    /// Favorites store emitted a new set.
    FavoritesChanged(FavoritesSet),
    /// Favorite button tapped on a result.
    FavoriteToggled(String),
}

/// Side effects requested by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEffect {
    /// Feed raw query text to the query worker.
    PushQuery(String),
    /// Flip the item in the favorites store.
    ToggleFavorite(String),
}

/// What: Advance the Search tab by one event.
///
/// Inputs:
/// - `state`: Previous snapshot
/// - `event`: Input to apply
///
/// Output:
/// - Next snapshot and effects.
///
/// Details:
/// - Worker ids only grow, so any report older than `active_search` is stale and dropped.
/// - Blank resolutions carry a fresh id without a preceding start, hence `>=`.
pub fn reduce(mut state: SearchState, event: SearchEvent) -> (SearchState, Vec<SearchEffect>) {
    let effects = match event {
        SearchEvent::QueryChanged(query) => {
            state.query.clone_from(&query);
            vec![SearchEffect::PushQuery(query)]
        }
        SearchEvent::ClearQuery => return reduce(state, SearchEvent::QueryChanged(String::new())),
        SearchEvent::SearchStarted { id } => {
            if id >= state.active_search {
                state.active_search = id;
                state.is_loading = true;
            }
            Vec::new()
        }
        SearchEvent::SearchResolved { id, outcome } => {
            if id < state.active_search {
                tracing::debug!(id, active = state.active_search, "[Search] Dropping stale result");
                return (state, Vec::new());
            }
            state.active_search = id;
            state.is_loading = false;
            match outcome {
                None => {
                    state.results.clear();
                    state.error = None;
                }
                Some(Ok(res)) => {
                    tracing::debug!(id, query = %res.query, count = res.results.len(), "[Search] Results applied");
                    state.results = restamp(&res.results, &state.favorites);
                    state.error = None;
                }
                Some(Err(e)) => {
                    tracing::warn!(id, error = %e, "[Search] Search failed");
                    state.results.clear();
                    state.error = Some(e.message().to_string());
                }
            }
            Vec::new()
        }
        SearchEvent::FavoritesChanged(favorites) => {
            state.results = restamp(&state.results, &favorites);
            state.favorites = favorites;
            Vec::new()
        }
        SearchEvent::FavoriteToggled(id) => vec![SearchEffect::ToggleFavorite(id)],
    };
    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ProviderError;
    use crate::state::Item;

    fn result(query: &str, ids: &[&str]) -> SearchResult {
        let results: Vec<Item> = ids.iter().map(|id| Item::new(*id, format!("T{id}"), "C")).collect();
        SearchResult {
            query: query.to_string(),
            total_count: results.len(),
            results,
        }
    }

    #[test]
    /// What: Query edits are stored verbatim and forwarded to the worker.
    fn query_is_pushed() {
        let (s, fx) = reduce(SearchState::default(), SearchEvent::QueryChanged(" co ".into()));
        assert_eq!(s.query, " co ");
        assert_eq!(fx, vec![SearchEffect::PushQuery(" co ".into())]);
        let (s, fx) = reduce(s, SearchEvent::ClearQuery);
        assert_eq!(s.query, "");
        assert_eq!(fx, vec![SearchEffect::PushQuery(String::new())]);
    }

    #[test]
    /// What: Start then resolve applies results with current favorite flags.
    fn start_and_resolve() {
        let favs: FavoritesSet = ["b".to_string()].into_iter().collect();
        let (s, _) = reduce(SearchState::new(favs), SearchEvent::SearchStarted { id: 1 });
        assert!(s.is_loading);
        let (s, _) = reduce(
            s,
            SearchEvent::SearchResolved { id: 1, outcome: Some(Ok(result("x", &["a", "b"]))) },
        );
        assert!(!s.is_loading);
        let flags: Vec<bool> = s.results.iter().map(|i| i.is_favorite).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    /// What: Reports for superseded searches never touch state.
    ///
    /// - Input: Search 2 started, late resolution for search 1
    /// - Output: State unchanged, still loading
    fn stale_resolution_dropped() {
        let (s, _) = reduce(SearchState::default(), SearchEvent::SearchStarted { id: 2 });
        let (after, fx) = reduce(
            s.clone(),
            SearchEvent::SearchResolved { id: 1, outcome: Some(Ok(result("o", &["a"]))) },
        );
        assert_eq!(after, s);
        assert!(fx.is_empty());
    }

    #[test]
    /// What: Blank resolutions clear results without an error.
    fn blank_resolution_clears() {
        let mut s = SearchState::default();
        s.results = result("x", &["a"]).results;
        s.error = Some("old".into());
        let (s, _) = reduce(s, SearchEvent::SearchResolved { id: 3, outcome: None });
        assert!(s.results.is_empty());
        assert!(s.error.is_none());
        assert_eq!(s.active_search, 3);
    }

    #[test]
    /// What: Failures stop loading, empty the list, and expose the message.
    fn failure_sets_error() {
        let (s, _) = reduce(SearchState::default(), SearchEvent::SearchStarted { id: 1 });
        let (s, _) = reduce(
            s,
            SearchEvent::SearchResolved { id: 1, outcome: Some(Err(ProviderError::unknown())) },
        );
        assert!(!s.is_loading);
        assert!(s.results.is_empty());
        assert_eq!(s.error.as_deref(), Some("Unknown error"));
    }

    #[test]
    /// What: Favorites only re-stamp results.
    fn favorites_restamp_results() {
        let (s, _) = reduce(
            SearchState::default(),
            SearchEvent::SearchResolved { id: 1, outcome: Some(Ok(result("x", &["a", "b"]))) },
        );
        let favs: FavoritesSet = ["a".to_string()].into_iter().collect();
        let (s, _) = reduce(s, SearchEvent::FavoritesChanged(favs));
        assert!(s.results[0].is_favorite);
        assert!(!s.results[1].is_favorite);
        assert!(!s.is_loading);
    }
}
