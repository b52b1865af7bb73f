//! Search tab driver: forwards query edits to the query worker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::app::runtime::screen::{ScreenDriver, TaskScope};
use crate::app::runtime::workers::search::run_query_worker;
use crate::favorites::FavoritesStore;
use crate::logic::search::{self, SearchEffect, SearchEvent};
use crate::sources::SearchProvider;
use crate::state::{FavoritesSet, SearchState};

/// Effect executor for the Search tab.
pub struct SearchDriver {
    /// Search backend handed to the worker.
    provider: Arc<dyn SearchProvider>,
    /// Favorites store for toggles.
    favorites: FavoritesStore,
    /// Query debounce window.
    debounce: Duration,
    /// Optional provider timeout.
    timeout: Option<Duration>,
    /// Input of the query worker once started.
    query_tx: Option<mpsc::UnboundedSender<String>>,
}

impl SearchDriver {
    /// Driver whose worker is spawned when the screen starts.
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        favorites: FavoritesStore,
        debounce: Duration,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            provider,
            favorites,
            debounce,
            timeout,
            query_tx: None,
        }
    }
}

impl ScreenDriver for SearchDriver {
    type State = SearchState;
    type Event = SearchEvent;
    type Effect = SearchEffect;

    const NAME: &'static str = "search";

    fn reduce(&self, state: SearchState, event: SearchEvent) -> (SearchState, Vec<SearchEffect>) {
        search::reduce(state, event)
    }

    fn execute(&mut self, effect: SearchEffect, _scope: &mut TaskScope<SearchEvent>) {
        match effect {
            SearchEffect::PushQuery(query) => {
                if let Some(tx) = self.query_tx.as_ref()
                    && tx.send(query).is_err()
                {
                    tracing::warn!("[Search] Query worker is gone");
                }
            }
            SearchEffect::ToggleFavorite(id) => {
                self.favorites.toggle_favorite(&id);
            }
        }
    }

    fn start(&mut self, scope: &mut TaskScope<SearchEvent>) -> Vec<SearchEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let provider = Arc::clone(&self.provider);
        let (debounce, timeout) = (self.debounce, self.timeout);
        scope.spawn_worker(move |events| run_query_worker(rx, events, provider, debounce, timeout));
        self.query_tx = Some(tx);
        Vec::new()
    }

    fn favorites_event(&self, favorites: FavoritesSet) -> Option<SearchEvent> {
        Some(SearchEvent::FavoritesChanged(favorites))
    }
}
