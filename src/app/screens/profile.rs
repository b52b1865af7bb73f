//! Profile screen driver.

use std::sync::Arc;
use std::time::Duration;

use crate::app::runtime::screen::{ScreenDriver, TaskScope};
use crate::logic::profile::{self, ProfileEffect, ProfileEvent};
use crate::sources::{CatalogProvider, with_timeout};
use crate::state::ProfileState;

/// Effect executor for a profile screen.
pub struct ProfileDriver {
    /// User whose profile is shown.
    pub user_id: String,
    /// Catalog source (also serves profiles).
    pub catalog: Arc<dyn CatalogProvider>,
    /// Optional provider timeout.
    pub timeout: Option<Duration>,
}

impl ScreenDriver for ProfileDriver {
    type State = ProfileState;
    type Event = ProfileEvent;
    type Effect = ProfileEffect;

    const NAME: &'static str = "profile";

    fn reduce(&self, state: ProfileState, event: ProfileEvent) -> (ProfileState, Vec<ProfileEffect>) {
        profile::reduce(state, event)
    }

    fn execute(&mut self, effect: ProfileEffect, scope: &mut TaskScope<ProfileEvent>) {
        match effect {
            ProfileEffect::FetchProfile => {
                let catalog = Arc::clone(&self.catalog);
                let user_id = self.user_id.clone();
                let timeout = self.timeout;
                tracing::debug!(user = %user_id, "[Profile] Fetching profile");
                scope.spawn_latest("profile", async move {
                    ProfileEvent::ProfileLoaded(
                        with_timeout("Profile", timeout, catalog.fetch_user_profile(&user_id))
                            .await,
                    )
                });
            }
        }
    }

    fn start(&mut self, _scope: &mut TaskScope<ProfileEvent>) -> Vec<ProfileEvent> {
        vec![ProfileEvent::RefreshRequested]
    }
}
