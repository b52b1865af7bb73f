//! Items screen driver.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::app::runtime::screen::{ScreenDriver, TaskScope};
use crate::favorites::FavoritesStore;
use crate::logic::items::{self, ItemsEffect, ItemsEvent};
use crate::settings::SearchTuning;
use crate::sources::{CatalogProvider, with_timeout};
use crate::state::{FavoritesSet, ItemsState};

/// Slot holding the catalog fetch.
const CATALOG_SLOT: &str = "catalog";
/// Slot holding the pending debounced search.
const SEARCH_SLOT: &str = "search";

/// What: Delay before a scheduled search settles.
///
/// Inputs:
/// - `tuning`: Debounce and simulated latency bounds
///
/// Output:
/// - Debounce plus a uniformly random latency within the configured bounds.
pub fn settle_delay(tuning: &SearchTuning) -> Duration {
    let lo = tuning.latency_min_ms.min(tuning.latency_max_ms);
    let hi = tuning.latency_min_ms.max(tuning.latency_max_ms);
    let latency = rand::random_range(lo..=hi);
    Duration::from_millis(tuning.items_debounce_ms.saturating_add(latency))
}

/// Effect executor for the Items screen.
pub struct ItemsDriver {
    /// Catalog source.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Favorites store for toggles.
    pub favorites: FavoritesStore,
    /// Search thresholds and timing.
    pub tuning: SearchTuning,
    /// Optional provider timeout.
    pub timeout: Option<Duration>,
}

impl ScreenDriver for ItemsDriver {
    type State = ItemsState;
    type Event = ItemsEvent;
    type Effect = ItemsEffect;

    const NAME: &'static str = "items";

    fn reduce(&self, state: ItemsState, event: ItemsEvent) -> (ItemsState, Vec<ItemsEffect>) {
        items::reduce(state, event, &self.tuning)
    }

    fn execute(&mut self, effect: ItemsEffect, scope: &mut TaskScope<ItemsEvent>) {
        match effect {
            ItemsEffect::FetchCatalog => {
                let catalog = Arc::clone(&self.catalog);
                let timeout = self.timeout;
                scope.spawn_latest(CATALOG_SLOT, async move {
                    ItemsEvent::CatalogLoaded(
                        with_timeout("Items", timeout, catalog.fetch_catalog()).await,
                    )
                });
            }
            ItemsEffect::ScheduleSearch { token } => {
                let delay = settle_delay(&self.tuning);
                let order_seed = self
                    .tuning
                    .randomize_search_order
                    .then(rand::random::<u64>);
                tracing::trace!(token, delay_ms = delay.as_millis(), "[Items] Search scheduled");
                scope.spawn_latest(SEARCH_SLOT, async move {
                    sleep(delay).await;
                    ItemsEvent::SearchSettled { token, order_seed }
                });
            }
            ItemsEffect::CancelSearch => {
                if scope.cancel(SEARCH_SLOT) {
                    tracing::trace!("[Items] Pending search cancelled");
                }
            }
            ItemsEffect::ToggleFavorite(id) => {
                self.favorites.toggle_favorite(&id);
            }
        }
    }

    fn start(&mut self, _scope: &mut TaskScope<ItemsEvent>) -> Vec<ItemsEvent> {
        vec![ItemsEvent::RefreshRequested]
    }

    fn favorites_event(&self, favorites: FavoritesSet) -> Option<ItemsEvent> {
        Some(ItemsEvent::FavoritesChanged(favorites))
    }
}
