use crate::state::{FavoritesSet, Item};

/// What: Re-stamp `is_favorite` on a list from the authoritative favorites set.
///
/// Inputs:
/// - `items`: Items whose favorite flags may be stale
/// - `favorites`: Current favorites set
///
/// Output:
/// - New list with the same items in the same order; only `is_favorite` may differ.
///
/// Details:
/// - Never filters or reorders. Items already carrying the right flag are cloned as-is.
pub fn restamp(items: &[Item], favorites: &FavoritesSet) -> Vec<Item> {
    items
        .iter()
        .map(|it| it.with_favorite(favorites.contains(&it.id)))
        .collect()
}

/// Re-stamp every page of a paged list.
pub fn restamp_pages(pages: &[Vec<Item>], favorites: &FavoritesSet) -> Vec<Vec<Item>> {
    pages.iter().map(|page| restamp(page, favorites)).collect()
}
