//! Application settings: TOML-backed value plus a watch-based change feed.
//!
//! Screens receive an `AppSettings` snapshot at construction; the few that
//! react to live toggles subscribe to [`SettingsStore`].

pub mod config;
pub mod paths;
pub mod types;

use tokio::sync::watch;

pub use config::{load_settings, parse_settings};
pub use types::{
    AppSettings, AppearanceMode, FeatureFlag, LatencyTuning, NetworkTuning, SearchTuning,
    SummaryTuning,
};

/// Shared holder of the current settings.
///
/// Cloning is cheap; all clones publish to the same subscribers.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    /// Latest-value channel carrying the settings.
    tx: watch::Sender<AppSettings>,
}

impl SettingsStore {
    /// Wrap an initial settings value.
    pub fn new(initial: AppSettings) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Copy of the current settings.
    pub fn current(&self) -> AppSettings {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every settings change.
    pub fn subscribe(&self) -> watch::Receiver<AppSettings> {
        self.tx.subscribe()
    }

    /// Change the appearance mode.
    pub fn set_appearance_mode(&self, mode: AppearanceMode) {
        tracing::debug!(?mode, "[Settings] Appearance changed");
        self.tx.send_modify(|s| s.appearance_mode = mode);
    }

    /// Toggle a feature flag.
    pub fn set_flag(&self, flag: FeatureFlag, enabled: bool) {
        tracing::debug!(flag = flag.key(), enabled, "[Settings] Flag changed");
        self.tx.send_modify(|s| s.set_flag(flag, enabled));
    }

    /// Restore the default appearance.
    pub fn reset_appearance(&self) {
        self.set_appearance_mode(AppearanceMode::System);
    }

    /// Restore every feature flag to its default.
    pub fn reset_feature_toggles(&self) {
        self.tx.send_modify(|s| {
            for flag in FeatureFlag::ALL {
                s.set_flag(flag, flag.default_enabled());
            }
        });
    }
}
