//! Home feed driver.

use std::sync::Arc;
use std::time::Duration;

use crate::app::runtime::screen::{ScreenDriver, TaskScope};
use crate::favorites::FavoritesStore;
use crate::logic::home::{self, HomeEffect, HomeEvent};
use crate::settings::AppSettings;
use crate::sources::{CatalogProvider, with_timeout};
use crate::state::{FavoritesSet, HomeState};

/// Effect executor for the Home feed.
pub struct HomeDriver {
    /// Catalog source.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Favorites store for toggles.
    pub favorites: FavoritesStore,
    /// Optional provider timeout.
    pub timeout: Option<Duration>,
}

impl ScreenDriver for HomeDriver {
    type State = HomeState;
    type Event = HomeEvent;
    type Effect = HomeEffect;

    const NAME: &'static str = "home";

    fn reduce(&self, state: HomeState, event: HomeEvent) -> (HomeState, Vec<HomeEffect>) {
        home::reduce(state, event)
    }

    fn execute(&mut self, effect: HomeEffect, scope: &mut TaskScope<HomeEvent>) {
        match effect {
            HomeEffect::FetchCatalog => {
                let catalog = Arc::clone(&self.catalog);
                let timeout = self.timeout;
                scope.spawn_latest("catalog", async move {
                    let outcome = with_timeout("Home", timeout, catalog.fetch_catalog()).await;
                    HomeEvent::CatalogLoaded {
                        outcome,
                        order_seed: rand::random(),
                    }
                });
            }
            HomeEffect::ToggleFavorite(id) => {
                self.favorites.toggle_favorite(&id);
            }
        }
    }

    fn start(&mut self, _scope: &mut TaskScope<HomeEvent>) -> Vec<HomeEvent> {
        vec![HomeEvent::RefreshRequested]
    }

    fn favorites_event(&self, favorites: FavoritesSet) -> Option<HomeEvent> {
        Some(HomeEvent::FavoritesChanged(favorites))
    }

    fn settings_event(&self, settings: &AppSettings) -> Option<HomeEvent> {
        Some(HomeEvent::CarouselToggled(settings.featured_carousel_enabled))
    }
}
