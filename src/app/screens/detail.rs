//! Item detail driver.

use std::sync::Arc;
use std::time::Duration;

use crate::app::runtime::screen::{ScreenDriver, TaskScope};
use crate::favorites::FavoritesStore;
use crate::logic::detail::{self, DetailEffect, DetailEvent};
use crate::sources::{CatalogProvider, Summarizer, with_timeout};
use crate::state::{DetailState, FavoritesSet};

/// Effect executor for one item's detail screen.
pub struct DetailDriver {
    /// Item shown by this screen.
    pub item_id: String,
    /// Catalog source.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Summary backend.
    pub summarizer: Arc<dyn Summarizer>,
    /// Favorites store for toggles.
    pub favorites: FavoritesStore,
    /// Optional provider timeout.
    pub timeout: Option<Duration>,
}

impl ScreenDriver for DetailDriver {
    type State = DetailState;
    type Event = DetailEvent;
    type Effect = DetailEffect;

    const NAME: &'static str = "detail";

    fn reduce(&self, state: DetailState, event: DetailEvent) -> (DetailState, Vec<DetailEffect>) {
        detail::reduce(state, event)
    }

    fn execute(&mut self, effect: DetailEffect, scope: &mut TaskScope<DetailEvent>) {
        match effect {
            DetailEffect::FetchDetail => {
                let catalog = Arc::clone(&self.catalog);
                let id = self.item_id.clone();
                let timeout = self.timeout;
                scope.spawn_latest("detail", async move {
                    DetailEvent::DetailLoaded(
                        with_timeout("Detail", timeout, catalog.fetch_item_detail(&id)).await,
                    )
                });
            }
            DetailEffect::CheckAiAvailability => {
                let summarizer = Arc::clone(&self.summarizer);
                scope.spawn(async move { DetailEvent::AiAvailability(summarizer.is_available().await) });
            }
            DetailEffect::Summarize(text) => {
                let summarizer = Arc::clone(&self.summarizer);
                tracing::debug!(id = %self.item_id, chars = text.len(), "[Detail] Summarizing");
                scope.spawn_latest("summary", async move {
                    DetailEvent::SummaryFinished(summarizer.summarize(&text).await)
                });
            }
            DetailEffect::ToggleFavorite(id) => {
                self.favorites.toggle_favorite(&id);
            }
        }
    }

    fn start(&mut self, _scope: &mut TaskScope<DetailEvent>) -> Vec<DetailEvent> {
        vec![DetailEvent::RefreshRequested, DetailEvent::AiProbeRequested]
    }

    fn favorites_event(&self, favorites: FavoritesSet) -> Option<DetailEvent> {
        Some(DetailEvent::FavoritesChanged(favorites))
    }
}
