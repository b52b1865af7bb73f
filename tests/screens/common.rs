//! Shared fixtures: a three-item catalog and a context wired to it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use funapp::app::AppContext;
use funapp::favorites::FavoritesStore;
use funapp::settings::{AppSettings, LatencyTuning, SettingsStore};
use funapp::sources::{
    CatalogProvider, DefaultCatalog, ExtractiveSummarizer, ProviderError, ProviderResult,
    SearchProvider,
};
use funapp::state::{FavoritesSet, Item, SearchResult};

/// Catalog used by the scenarios: Coroutines, Compose, Navigation.
pub fn fixture_items() -> Vec<Item> {
    vec![
        Item::new("1", "Coroutines", "Concurrency"),
        Item::new("2", "Compose", "UI"),
        Item::new("3", "Navigation", "UI"),
    ]
}

/// Ids of a list, in order.
pub fn ids(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

/// Settings with a fixed 300 ms simulated search latency and no reordering.
pub fn test_settings() -> AppSettings {
    let mut settings = AppSettings::default();
    settings.search.latency_min_ms = 300;
    settings.search.latency_max_ms = 300;
    settings.search.randomize_search_order = false;
    settings
}

/// Search provider that counts calls, waits, then delegates to the catalog.
pub struct CountingSearch {
    /// Catalog answering the query.
    pub catalog: Arc<dyn CatalogProvider>,
    /// Calls observed so far.
    pub calls: AtomicUsize,
    /// Simulated round trip.
    pub delay: Duration,
    /// Fail every call instead of answering.
    pub fail: bool,
}

#[async_trait]
impl SearchProvider for CountingSearch {
    async fn search(&self, query: &str) -> ProviderResult<SearchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(ProviderError::new("search backend down"));
        }
        self.catalog.search_items(query).await
    }
}

impl CountingSearch {
    /// Number of provider calls so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Context plus handles the tests poke at.
pub struct Fixture {
    /// Context spawning screens.
    pub ctx: AppContext,
    /// Search provider behind the Search tab.
    pub search: Arc<CountingSearch>,
}

/// What: Build a fixture over the three-item catalog.
///
/// Inputs:
/// - `settings`: Initial settings
/// - `search_delay`: Round trip of the counting search provider
/// - `search_fails`: Make the counting search provider fail
pub fn fixture_with(settings: AppSettings, search_delay: Duration, search_fails: bool) -> Fixture {
    let store = SettingsStore::new(settings);
    let catalog: Arc<dyn CatalogProvider> = Arc::new(DefaultCatalog::with_items(
        fixture_items(),
        LatencyTuning::zero(),
        Some(store.subscribe()),
    ));
    let search = Arc::new(CountingSearch {
        catalog: Arc::clone(&catalog),
        calls: AtomicUsize::new(0),
        delay: search_delay,
        fail: search_fails,
    });
    let ctx = AppContext::with_providers(
        store,
        FavoritesStore::in_memory(FavoritesSet::new()),
        catalog,
        search.clone(),
        Arc::new(ExtractiveSummarizer::default()),
    );
    Fixture { ctx, search }
}

/// Fixture with [`test_settings`] and a 100 ms search provider.
pub fn fixture() -> Fixture {
    fixture_with(test_settings(), Duration::from_millis(100), false)
}
