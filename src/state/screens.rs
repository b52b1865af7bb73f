//! State for the Home, Detail, and Profile screens.

use super::types::{FavoritesSet, Item, UserProfile};

/// Snapshot of the Home feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Catalog load in progress.
    pub is_loading: bool,
    /// Featured carousel, pages of up to two items.
    pub carousel_pages: Vec<Vec<Item>>,
    /// Full catalog in provider order.
    pub all_items: Vec<Item>,
    /// Mirrors the `featured_carousel` setting.
    pub carousel_enabled: bool,
    /// Message of the last failed load.
    pub error: Option<String>,
    /// Latest favorites snapshot seen by this screen.
    pub favorites: FavoritesSet,
}

impl HomeState {
    /// Initial loading state.
    pub fn loading(favorites: FavoritesSet, carousel_enabled: bool) -> Self {
        Self {
            is_loading: true,
            carousel_enabled,
            favorites,
            ..Default::default()
        }
    }
}

/// Snapshot of an item detail screen.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Detail load in progress.
    pub is_loading: bool,
    /// Loaded item, if any.
    pub item: Option<Item>,
    /// Long-form write-up for the item, when one exists.
    pub detailed_description: Option<String>,
    /// Message of the last failed load.
    pub error: Option<String>,
    /// `ai_summary` setting captured at construction.
    pub ai_enabled: bool,
    /// Summary action is offered (setting on and summarizer available).
    pub show_ai_summary: bool,
    /// Summarization in progress.
    pub is_ai_summarizing: bool,
    /// Last produced summary.
    pub ai_summary: Option<String>,
    /// Message of the last failed summarization.
    pub ai_summary_error: Option<String>,
    /// Latest favorites snapshot seen by this screen.
    pub favorites: FavoritesSet,
}

impl DetailState {
    /// Initial loading state.
    pub fn loading(favorites: FavoritesSet, ai_enabled: bool) -> Self {
        Self {
            is_loading: true,
            ai_enabled,
            favorites,
            ..Default::default()
        }
    }
}

/// Snapshot of the profile screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    /// Profile load in progress.
    pub is_loading: bool,
    /// Loaded profile.
    pub profile: Option<UserProfile>,
    /// Message of the last failed load.
    pub error: Option<String>,
}
