//! Per-screen state snapshots and the value types they carry.

pub mod items;
pub mod screens;
pub mod search;
pub mod types;

pub use items::ItemsState;
pub use screens::{DetailState, HomeState, ProfileState};
pub use search::SearchState;
pub use types::{FavoritesSet, Item, SearchResult, UserProfile};
