//! Pure screen logic: filtering helpers and one reducer per screen.
//!
//! Reducers take the previous snapshot and an event and return the next
//! snapshot plus effects; they never sleep, spawn, or touch stores.

pub mod detail;
pub mod favorites;
pub mod filter;
pub mod home;
pub mod items;
pub mod profile;
pub mod search;

pub use detail::{DetailEffect, DetailEvent};
pub use filter::{filter_items, matches_query};
pub use home::{HomeEffect, HomeEvent};
pub use items::{ItemsEffect, ItemsEvent};
pub use profile::{ProfileEffect, ProfileEvent};
pub use search::{SearchEffect, SearchEvent};
