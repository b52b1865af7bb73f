//! Services shared by every screen and the factories that spawn screens.

use std::sync::Arc;

use crate::app::runtime::screen::{Feeds, Screen, spawn_screen};
use crate::app::screens::{DetailDriver, HomeDriver, ItemsDriver, ProfileDriver, SearchDriver};
use crate::favorites::FavoritesStore;
use crate::logic::profile::CURRENT_USER_ID;
use crate::logic::{DetailEvent, HomeEvent, ItemsEvent, ProfileEvent, SearchEvent};
use crate::settings::SettingsStore;
use crate::sources::{
    CatalogProvider, DefaultCatalog, DefaultSearchService, ExtractiveSummarizer, SearchProvider,
    Summarizer,
};
use crate::state::{DetailState, HomeState, ItemsState, ProfileState, SearchState};

/// Items screen handle.
pub type ItemsScreen = Screen<ItemsState, ItemsEvent>;
/// Search tab handle.
pub type SearchScreen = Screen<SearchState, SearchEvent>;
/// Home feed handle.
pub type HomeScreen = Screen<HomeState, HomeEvent>;
/// Detail screen handle.
pub type DetailScreen = Screen<DetailState, DetailEvent>;
/// Profile screen handle.
pub type ProfileScreen = Screen<ProfileState, ProfileEvent>;

/// Explicitly passed application services.
#[derive(Clone)]
pub struct AppContext {
    /// Live settings.
    pub settings: SettingsStore,
    /// Favorites store.
    pub favorites: FavoritesStore,
    /// Catalog provider.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Search tab provider.
    pub search: Arc<dyn SearchProvider>,
    /// Summary backend.
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppContext {
    /// What: Context wired to the built-in providers.
    ///
    /// Inputs:
    /// - `settings`: Settings store; its current latency tuning configures the catalog
    /// - `favorites`: Favorites store
    ///
    /// Output:
    /// - Context whose catalog reads `simulate_errors` live from `settings`.
    /// - The summarizer keeps `[summary] max_sentences` sentences.
    pub fn new(settings: SettingsStore, favorites: FavoritesStore) -> Self {
        let current = settings.current();
        let latency = current.latency;
        let summarizer =
            ExtractiveSummarizer::default().with_max_sentences(current.summary.max_sentences);
        let catalog: Arc<dyn CatalogProvider> =
            Arc::new(DefaultCatalog::new(latency, Some(settings.subscribe())));
        let search = Arc::new(DefaultSearchService::new(Arc::clone(&catalog)));
        Self {
            settings,
            favorites,
            catalog,
            search,
            summarizer: Arc::new(summarizer),
        }
    }

    /// Context with caller-supplied providers.
    pub fn with_providers(
        settings: SettingsStore,
        favorites: FavoritesStore,
        catalog: Arc<dyn CatalogProvider>,
        search: Arc<dyn SearchProvider>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            settings,
            favorites,
            catalog,
            search,
            summarizer,
        }
    }

    /// Favorites feed plus the snapshot it starts from.
    fn favorites_feed(&self) -> (Feeds, crate::state::FavoritesSet) {
        let rx = self.favorites.get_favorites();
        let initial = rx.borrow().clone();
        (
            Feeds {
                favorites: Some(rx),
                settings: None,
            },
            initial,
        )
    }

    /// Spawn the Items screen; it starts loading immediately.
    pub fn items_screen(&self) -> ItemsScreen {
        let settings = self.settings.current();
        let (feeds, favs) = self.favorites_feed();
        let driver = ItemsDriver {
            catalog: Arc::clone(&self.catalog),
            favorites: self.favorites.clone(),
            tuning: settings.search,
            timeout: settings.network.timeout(),
        };
        spawn_screen(driver, ItemsState::loading(favs), feeds)
    }

    /// Spawn the Search tab with its query worker.
    pub fn search_screen(&self) -> SearchScreen {
        let settings = self.settings.current();
        let (feeds, favs) = self.favorites_feed();
        let driver = SearchDriver::new(
            Arc::clone(&self.search),
            self.favorites.clone(),
            settings.search.search_debounce(),
            settings.network.timeout(),
        );
        spawn_screen(driver, SearchState::new(favs), feeds)
    }

    /// Spawn the Home feed; it follows the carousel setting live.
    pub fn home_screen(&self) -> HomeScreen {
        let settings = self.settings.current();
        let (mut feeds, favs) = self.favorites_feed();
        feeds.settings = Some(self.settings.subscribe());
        let driver = HomeDriver {
            catalog: Arc::clone(&self.catalog),
            favorites: self.favorites.clone(),
            timeout: settings.network.timeout(),
        };
        spawn_screen(
            driver,
            HomeState::loading(favs, settings.featured_carousel_enabled),
            feeds,
        )
    }

    /// Spawn a detail screen for `item_id`; the AI setting is read once here.
    pub fn detail_screen(&self, item_id: &str) -> DetailScreen {
        let settings = self.settings.current();
        let (feeds, favs) = self.favorites_feed();
        let driver = DetailDriver {
            item_id: item_id.to_string(),
            catalog: Arc::clone(&self.catalog),
            summarizer: Arc::clone(&self.summarizer),
            favorites: self.favorites.clone(),
            timeout: settings.network.timeout(),
        };
        spawn_screen(
            driver,
            DetailState::loading(favs, settings.ai_summary_enabled),
            feeds,
        )
    }

    /// Spawn the signed-in user's profile screen.
    pub fn profile_screen(&self) -> ProfileScreen {
        self.profile_detail_screen(CURRENT_USER_ID)
    }

    /// What: Spawn a profile screen for any user.
    ///
    /// Inputs:
    /// - `user_id`: User whose profile is loaded on start and on refresh
    pub fn profile_detail_screen(&self, user_id: &str) -> ProfileScreen {
        let driver = ProfileDriver {
            user_id: user_id.to_string(),
            catalog: Arc::clone(&self.catalog),
            timeout: self.settings.current().network.timeout(),
        };
        spawn_screen(
            driver,
            ProfileState {
                is_loading: true,
                ..ProfileState::default()
            },
            Feeds::default(),
        )
    }
}
