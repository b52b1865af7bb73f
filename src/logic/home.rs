//! Home feed reducer: full catalog plus a shuffled featured carousel.

use super::favorites::{restamp, restamp_pages};
use super::filter::shuffle_with_seed;
use crate::sources::ProviderResult;
use crate::state::{FavoritesSet, HomeState, Item};

/// Items shown per carousel page.
pub const CAROUSEL_PAGE_SIZE: usize = 2;

/// Inputs accepted by the Home feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeEvent {
    /// Reload the catalog.
    RefreshRequested,
    /// Catalog fetch finished.
    CatalogLoaded {
        /// Provider outcome.
        outcome: ProviderResult<Vec<Item>>,
        /// Seed for the carousel order.
        order_seed: u64,
    },
    /// `featured_carousel` setting changed.
    CarouselToggled(bool),
    /// Favorites store emitted a new set.
    FavoritesChanged(FavoritesSet),
    /// Favorite button tapped.
    FavoriteToggled(String),
}

/// Side effects requested by the Home reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeEffect {
    /// Fetch the catalog and deliver [`HomeEvent::CatalogLoaded`].
    FetchCatalog,
    /// Flip the item in the favorites store.
    ToggleFavorite(String),
}

/// What: Build carousel pages from the catalog.
///
/// Inputs:
/// - `items`: Catalog in provider order
/// - `seed`: Shuffle seed
///
/// Output:
/// - Shuffled items chunked into pages of [`CAROUSEL_PAGE_SIZE`]; the last page may be shorter.
pub fn carousel_pages(items: &[Item], seed: u64) -> Vec<Vec<Item>> {
    let mut shuffled = items.to_vec();
    shuffle_with_seed(&mut shuffled, seed);
    shuffled
        .chunks(CAROUSEL_PAGE_SIZE)
        .map(<[Item]>::to_vec)
        .collect()
}

/// Advance the Home feed by one event.
pub fn reduce(mut state: HomeState, event: HomeEvent) -> (HomeState, Vec<HomeEffect>) {
    let effects = match event {
        HomeEvent::RefreshRequested => {
            state.is_loading = true;
            state.error = None;
            vec![HomeEffect::FetchCatalog]
        }
        HomeEvent::CatalogLoaded {
            outcome: Ok(items),
            order_seed,
        } => {
            state.is_loading = false;
            state.all_items = restamp(&items, &state.favorites);
            state.carousel_pages = carousel_pages(&state.all_items, order_seed);
            Vec::new()
        }
        HomeEvent::CatalogLoaded {
            outcome: Err(e), ..
        } => {
            tracing::warn!(error = %e, "[Home] Catalog load failed");
            state.is_loading = false;
            state.error = Some(e.message().to_string());
            state.all_items.clear();
            state.carousel_pages.clear();
            Vec::new()
        }
        HomeEvent::CarouselToggled(enabled) => {
            state.carousel_enabled = enabled;
            Vec::new()
        }
        HomeEvent::FavoritesChanged(favorites) => {
            state.all_items = restamp(&state.all_items, &favorites);
            state.carousel_pages = restamp_pages(&state.carousel_pages, &favorites);
            state.favorites = favorites;
            Vec::new()
        }
        HomeEvent::FavoriteToggled(id) => vec![HomeEffect::ToggleFavorite(id)],
    };
    (state, effects)
}
