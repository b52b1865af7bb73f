//! Profile screen reducer.

use crate::sources::ProviderResult;
use crate::state::{ProfileState, UserProfile};

/// Signed-in user, shown by the profile tab.
pub const CURRENT_USER_ID: &str = "current_user";

/// Inputs accepted by the profile screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileEvent {
    /// (Re)load the profile.
    RefreshRequested,
    /// Profile fetch finished.
    ProfileLoaded(ProviderResult<UserProfile>),
}

/// Side effects requested by the profile reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileEffect {
    /// Fetch the screen's user and deliver [`ProfileEvent::ProfileLoaded`].
    FetchProfile,
}

/// Advance the profile screen by one event.
pub fn reduce(state: ProfileState, event: ProfileEvent) -> (ProfileState, Vec<ProfileEffect>) {
    match event {
        ProfileEvent::RefreshRequested => (
            ProfileState {
                is_loading: true,
                error: None,
                ..state
            },
            vec![ProfileEffect::FetchProfile],
        ),
        ProfileEvent::ProfileLoaded(Ok(profile)) => (
            ProfileState {
                is_loading: false,
                profile: Some(profile),
                error: None,
            },
            Vec::new(),
        ),
        ProfileEvent::ProfileLoaded(Err(e)) => {
            tracing::warn!(error = %e, "[Profile] Profile load failed");
            (
                ProfileState {
                    is_loading: false,
                    profile: None,
                    error: Some(e.message().to_string()),
                },
                Vec::new(),
            )
        }
    }
}
