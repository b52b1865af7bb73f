//! Core value types shared by every screen.

use std::collections::BTreeSet;

/// Authoritative set of favorited item identifiers.
///
/// Ordered so the persisted blob and debug output stay stable.
pub type FavoritesSet = BTreeSet<String>;

/// A browsable catalog entry.
///
/// Items are immutable values: screens derive new instances (e.g. with a
/// re-stamped favorite flag) instead of mutating shared ones.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Long description shown in lists and detail.
    #[serde(default)]
    pub description: String,
    /// One-line tagline.
    #[serde(default)]
    pub subtitle: String,
    /// Free-text category label used for chip filtering.
    #[serde(default)]
    pub category: String,
    /// Icon identifier for the row glyph.
    #[serde(default)]
    pub icon_name: String,
    /// Tint tag paired with `icon_name`.
    #[serde(default)]
    pub icon_color: String,
    /// Optional note pointing at an equivalent technology elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Projection of the favorites set; stale until re-stamped.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Item {
    /// What: Build an item with only the fields the filter predicate needs.
    ///
    /// Inputs:
    /// - `id`, `title`, `category`: Core identity and grouping
    ///
    /// Output:
    /// - `Item` with empty description/subtitle/icon fields and `is_favorite = false`.
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            subtitle: String::new(),
            category: category.into(),
            icon_name: String::new(),
            icon_color: String::new(),
            external_reference: None,
            is_favorite: false,
        }
    }

    /// Return a copy carrying the given favorite flag.
    #[must_use]
    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }
}

/// Result of a text search against the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult {
    /// Query the results were produced for.
    pub query: String,
    /// Matching items in provider order.
    pub results: Vec<Item>,
    /// Number of matches reported by the provider.
    pub total_count: usize,
}

impl SearchResult {
    /// Empty result echoing `query`.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            total_count: 0,
        }
    }
}

/// The signed-in user's profile.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Optional avatar location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Optional free-text biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Profile view counter.
    #[serde(default)]
    pub views_count: u32,
    /// Number of favorited items.
    #[serde(default)]
    pub favorites_count: u32,
    /// Days since joining.
    #[serde(default)]
    pub days_count: u32,
}
