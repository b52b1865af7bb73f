//! Item detail reducer: detail load, favorite toggle, and AI summary.

use crate::sources::ProviderResult;
use crate::sources::descriptions::long_description;
use crate::state::{DetailState, FavoritesSet, Item};

/// Fallback shown when summarization fails without a message.
pub const SUMMARY_FAILED: &str = "Summarisation failed";

/// Inputs accepted by a detail screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailEvent {
    /// (Re)load the item.
    RefreshRequested,
    /// Item detail fetch finished.
    DetailLoaded(ProviderResult<Item>),
    /// Decide whether the summary action is offered.
    AiProbeRequested,
    /// Summarizer availability check finished.
    AiAvailability(bool),
    /// Summary button tapped.
    GenerateSummary,
    /// Summarization finished.
    SummaryFinished(ProviderResult<String>),
    /// Favorites store emitted a new set.
    FavoritesChanged(FavoritesSet),
    /// Favorite button tapped for the loaded item.
    FavoriteToggled,
}

/// Side effects requested by the detail reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailEffect {
    /// Fetch the item and deliver [`DetailEvent::DetailLoaded`].
    FetchDetail,
    /// Probe the summarizer and deliver [`DetailEvent::AiAvailability`].
    CheckAiAvailability,
    /// Summarize this text and deliver [`DetailEvent::SummaryFinished`].
    Summarize(String),
    /// Flip the item in the favorites store.
    ToggleFavorite(String),
}

/// What: Advance a detail screen by one event.
///
/// Inputs:
/// - `state`: Previous snapshot
/// - `event`: Input to apply
///
/// Output:
/// - Next snapshot and effects.
///
/// Details:
/// - The summary source is the long-form description, else the item description.
/// - Without a loaded item, summary and favorite requests are ignored.
pub fn reduce(mut state: DetailState, event: DetailEvent) -> (DetailState, Vec<DetailEffect>) {
    let effects = match event {
        DetailEvent::RefreshRequested => {
            state.is_loading = true;
            state.error = None;
            vec![DetailEffect::FetchDetail]
        }
        DetailEvent::DetailLoaded(Ok(item)) => {
            state.is_loading = false;
            state.error = None;
            state.detailed_description = long_description(&item.id).map(ToString::to_string);
            let fav = state.favorites.contains(&item.id);
            state.item = Some(item.with_favorite(fav));
            Vec::new()
        }
        DetailEvent::DetailLoaded(Err(e)) => {
            tracing::warn!(error = %e, "[Detail] Item load failed");
            state.is_loading = false;
            state.error = Some(e.message().to_string());
            Vec::new()
        }
        DetailEvent::AiProbeRequested => {
            if state.ai_enabled {
                vec![DetailEffect::CheckAiAvailability]
            } else {
                state.show_ai_summary = false;
                Vec::new()
            }
        }
        DetailEvent::AiAvailability(available) => {
            state.show_ai_summary = state.ai_enabled && available;
            Vec::new()
        }
        DetailEvent::GenerateSummary => {
            let source = state
                .detailed_description
                .clone()
                .or_else(|| state.item.as_ref().map(|i| i.description.clone()));
            match source {
                Some(text) => {
                    state.is_ai_summarizing = true;
                    state.ai_summary_error = None;
                    vec![DetailEffect::Summarize(text)]
                }
                None => Vec::new(),
            }
        }
        DetailEvent::SummaryFinished(Ok(summary)) => {
            state.is_ai_summarizing = false;
            state.ai_summary = Some(summary);
            Vec::new()
        }
        DetailEvent::SummaryFinished(Err(e)) => {
            state.is_ai_summarizing = false;
            state.ai_summary_error = Some(e.message_or(SUMMARY_FAILED).to_string());
            Vec::new()
        }
        DetailEvent::FavoritesChanged(favorites) => {
            if let Some(item) = state.item.as_mut() {
                item.is_favorite = favorites.contains(&item.id);
            }
            state.favorites = favorites;
            Vec::new()
        }
        DetailEvent::FavoriteToggled => state
            .item
            .as_ref()
            .map(|i| vec![DetailEffect::ToggleFavorite(i.id.clone())])
            .unwrap_or_default(),
    };
    (state, effects)
}
