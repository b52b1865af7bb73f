//! Settings value types and their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearanceMode {
    /// Follow the platform setting.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl AppearanceMode {
    /// Parse a mode from its config key (case-insensitive).
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "system" | "auto" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Runtime feature toggles exposed on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFlag {
    /// Featured carousel on the home feed.
    FeaturedCarousel,
    /// Make every catalog call fail.
    SimulateErrors,
    /// Offer AI summaries on detail screens.
    AiSummary,
}

impl FeatureFlag {
    /// Every flag, in settings-screen order.
    pub const ALL: [Self; 3] = [Self::FeaturedCarousel, Self::SimulateErrors, Self::AiSummary];

    /// Key used in config files and logs.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FeaturedCarousel => "featured_carousel",
            Self::SimulateErrors => "simulate_errors",
            Self::AiSummary => "ai_summary",
        }
    }

    /// Value the flag takes after a reset.
    pub const fn default_enabled(self) -> bool {
        match self {
            Self::FeaturedCarousel | Self::AiSummary => true,
            Self::SimulateErrors => false,
        }
    }

    /// Parse a flag from its key.
    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == s.trim())
    }
}

/// Timing and thresholds for the Items and Search screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTuning {
    /// Queries shorter than this (after trimming) ask for more input.
    pub min_query_chars: usize,
    /// Items screen debounce before a search settles.
    pub items_debounce_ms: u64,
    /// Lower bound of the simulated search latency on the Items screen.
    pub latency_min_ms: u64,
    /// Upper bound of the simulated search latency on the Items screen.
    pub latency_max_ms: u64,
    /// Shuffle settled Items search results.
    pub randomize_search_order: bool,
    /// Search tab query-stream debounce.
    pub search_debounce_ms: u64,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            items_debounce_ms: 400,
            latency_min_ms: 300,
            latency_max_ms: 800,
            randomize_search_order: true,
            search_debounce_ms: 300,
        }
    }
}

impl SearchTuning {
    /// Search tab debounce window.
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Simulated latency of the in-memory catalog, per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyTuning {
    /// `fetch_catalog` delay.
    pub catalog_ms: u64,
    /// `fetch_item_detail` delay.
    pub detail_ms: u64,
    /// `search_items` delay.
    pub search_ms: u64,
    /// `fetch_user_profile` delay.
    pub profile_ms: u64,
}

impl Default for LatencyTuning {
    fn default() -> Self {
        Self {
            catalog_ms: 500,
            detail_ms: 300,
            search_ms: 300,
            profile_ms: 400,
        }
    }
}

impl LatencyTuning {
    /// No simulated latency at all.
    pub const fn zero() -> Self {
        Self {
            catalog_ms: 0,
            detail_ms: 0,
            search_ms: 0,
            profile_ms: 0,
        }
    }
}

/// Detail screen summary tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryTuning {
    /// Sentences kept by the extractive summarizer.
    pub max_sentences: usize,
}

impl Default for SummaryTuning {
    fn default() -> Self {
        Self { max_sentences: 2 }
    }
}

/// Provider call limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkTuning {
    /// Per-call timeout; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl NetworkTuning {
    /// Timeout as a `Duration`, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Application settings, passed explicitly to every screen at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Light/dark preference.
    pub appearance_mode: AppearanceMode,
    /// Show the featured carousel on the home feed.
    pub featured_carousel_enabled: bool,
    /// Make catalog calls fail with a simulated error.
    pub simulate_errors: bool,
    /// Offer AI summaries on detail screens.
    pub ai_summary_enabled: bool,
    /// Items/Search timing.
    pub search: SearchTuning,
    /// Catalog latency simulation.
    pub latency: LatencyTuning,
    /// Provider call limits.
    pub network: NetworkTuning,
    /// Summary length.
    pub summary: SummaryTuning,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            appearance_mode: AppearanceMode::System,
            featured_carousel_enabled: FeatureFlag::FeaturedCarousel.default_enabled(),
            simulate_errors: FeatureFlag::SimulateErrors.default_enabled(),
            ai_summary_enabled: FeatureFlag::AiSummary.default_enabled(),
            search: SearchTuning::default(),
            latency: LatencyTuning::default(),
            network: NetworkTuning::default(),
            summary: SummaryTuning::default(),
        }
    }
}

impl AppSettings {
    /// Current value of a feature flag.
    pub const fn flag(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::FeaturedCarousel => self.featured_carousel_enabled,
            FeatureFlag::SimulateErrors => self.simulate_errors,
            FeatureFlag::AiSummary => self.ai_summary_enabled,
        }
    }

    /// Set a feature flag.
    pub const fn set_flag(&mut self, flag: FeatureFlag, enabled: bool) {
        match flag {
            FeatureFlag::FeaturedCarousel => self.featured_carousel_enabled = enabled,
            FeatureFlag::SimulateErrors => self.simulate_errors = enabled,
            FeatureFlag::AiSummary => self.ai_summary_enabled = enabled,
        }
    }
}
