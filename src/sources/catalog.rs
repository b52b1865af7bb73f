//! In-memory catalog with simulated latency and an injectable failure mode.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::sleep;

use super::{CatalogProvider, ProviderError, ProviderResult, SIMULATED_ERROR};
use crate::logic::filter::matches_query;
use crate::settings::{AppSettings, LatencyTuning};
use crate::state::{Item, SearchResult, UserProfile};

/// Static catalog rows: id, title, description, subtitle, category, icon, color, reference.
const CATALOG: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "1",
        "Coroutines",
        "Suspend functions and structured concurrency make asynchronous Android code read top to bottom while scopes take care of cancellation.",
        "Lightweight concurrency for modern Android apps",
        "Concurrency",
        "bolt",
        "green",
        "Async/Await",
    ),
    (
        "2",
        "Kotlin Flow",
        "Cold asynchronous streams built on coroutines, with operators to transform, combine, and collect values as they arrive.",
        "Reactive streams with coroutines integration",
        "Reactive",
        "arrow.triangle.merge",
        "orange",
        "Combine",
    ),
    (
        "3",
        "Jetpack Compose",
        "A declarative toolkit where UI is a function of state; recomposition redraws only what changed.",
        "Declarative UI toolkit for Android",
        "UI",
        "rectangle.on.rectangle",
        "blue",
        "SwiftUI",
    ),
    (
        "4",
        "Navigation Component",
        "Manages destinations, arguments, deep links, and the back stack from a single navigation graph.",
        "Type-safe navigation for managing app flow",
        "Architecture",
        "arrow.triangle.branch",
        "purple",
        "Coordinator pattern",
    ),
    (
        "5",
        "MVVM",
        "View models expose observable screen state that Compose collects, keeping business rules out of the UI layer.",
        "Separating concerns with observable view models",
        "Architecture",
        "square.stack.3d.up",
        "indigo",
        "MVVM with @Published and ObservableObject",
    ),
    (
        "6",
        "Gradle Modules",
        "Splitting an app into focused modules gives each one explicit dependencies and lets it build and test on its own.",
        "Modular architecture with Gradle modules",
        "Modularity",
        "shippingbox",
        "brown",
        "SPM Modules",
    ),
    (
        "7",
        "Hilt",
        "Dependency injection on top of Dagger with compile-time validation and lifecycle-aware components.",
        "Compile-time dependency injection for Android",
        "DI",
        "magnifyingglass.circle",
        "teal",
        "ServiceLocator",
    ),
    (
        "8",
        "Interface-Oriented",
        "Behavior is described by interfaces with default implementations, which keeps abstractions small and easy to fake in tests.",
        "Favoring composition over inheritance",
        "Patterns",
        "list.bullet.rectangle",
        "mint",
        "Protocol-Oriented Programming",
    ),
    (
        "9",
        "Feature Toggles",
        "Runtime switches that turn features on or off for experiments, staged rollouts, and emergency kill switches.",
        "Runtime feature management and A/B testing",
        "DevOps",
        "switch.2",
        "cyan",
        "Feature Toggles (same pattern)",
    ),
    (
        "10",
        "Timber",
        "A small logging facade with pluggable trees and automatic tags, configured differently for debug and release builds.",
        "Extensible logging with tree-based architecture",
        "Debugging",
        "doc.text.magnifyingglass",
        "gray",
        "OSLog",
    ),
    (
        "11",
        "Kotlin 2.0",
        "The K2 compiler brings much faster builds, sharper type inference, and better tooling support.",
        "Next-generation compiler with faster builds",
        "Language",
        "swift",
        "red",
        "Swift 6",
    ),
    (
        "12",
        "JUnit 5",
        "Expressive test APIs with parameterized cases, nested classes, and extensions.",
        "Modern testing with expressive assertions",
        "Testing",
        "checkmark.seal",
        "green",
        "Swift Testing",
    ),
    (
        "13",
        "Screenshot Testing",
        "Rendered Compose components are compared against reference images so visual regressions fail the build.",
        "Visual regression testing for Compose UI",
        "Testing",
        "camera.viewfinder",
        "pink",
        "Snapshot Testing",
    ),
    (
        "14",
        "Accessibility",
        "Screen readers, content descriptions, and semantic properties make apps usable for people with disabilities.",
        "Making apps usable for everyone",
        "UX",
        "accessibility",
        "blue",
        "VoiceOver and Dynamic Type",
    ),
];

/// Build the static catalog in display order.
pub fn builtin_items() -> Vec<Item> {
    CATALOG
        .iter()
        .map(
            |&(id, title, description, subtitle, category, icon, color, reference)| Item {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                subtitle: subtitle.to_string(),
                category: category.to_string(),
                icon_name: icon.to_string(),
                icon_color: color.to_string(),
                external_reference: Some(reference.to_string()),
                is_favorite: false,
            },
        )
        .collect()
}

/// What: Synthesize the item returned for an id missing from the catalog.
///
/// Output:
/// - `Item <id>` titled item described as `Details for item <id>.` in category `General`.
pub fn placeholder_item(id: &str) -> Item {
    let mut item = Item::new(id, format!("Item {id}"), "General");
    item.description = format!("Details for item {id}.");
    item
}

/// Catalog backed by static data.
///
/// Every call sleeps for its configured latency, then checks the
/// `simulate_errors` setting as it is at that moment.
pub struct DefaultCatalog {
    /// Items served by every call.
    items: Vec<Item>,
    /// Per-call simulated latency.
    latency: LatencyTuning,
    /// Live settings, consulted for the failure flag.
    settings: Option<watch::Receiver<AppSettings>>,
}

impl DefaultCatalog {
    /// What: Catalog over the built-in items.
    ///
    /// Inputs:
    /// - `latency`: Per-call delays
    /// - `settings`: Live settings feed; `None` disables simulated failures
    pub fn new(latency: LatencyTuning, settings: Option<watch::Receiver<AppSettings>>) -> Self {
        Self::with_items(builtin_items(), latency, settings)
    }

    /// Catalog over caller-provided items.
    pub const fn with_items(
        items: Vec<Item>,
        latency: LatencyTuning,
        settings: Option<watch::Receiver<AppSettings>>,
    ) -> Self {
        Self {
            items,
            latency,
            settings,
        }
    }

    /// What: Wait out the simulated latency, then apply the failure flag.
    ///
    /// Inputs:
    /// - `ms`: Delay for this call
    /// - `op`: Operation name for logs
    ///
    /// Output:
    /// - `Err("Simulated network error")` when `simulate_errors` is set.
    async fn round_trip(&self, ms: u64, op: &'static str) -> ProviderResult<()> {
        if ms > 0 {
            sleep(Duration::from_millis(ms)).await;
        }
        let failing = self
            .settings
            .as_ref()
            .is_some_and(|rx| rx.borrow().simulate_errors);
        if failing {
            tracing::debug!(op, "[Catalog] Simulated failure");
            return Err(ProviderError::new(SIMULATED_ERROR));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogProvider for DefaultCatalog {
    async fn fetch_catalog(&self) -> ProviderResult<Vec<Item>> {
        self.round_trip(self.latency.catalog_ms, "fetch_catalog").await?;
        tracing::debug!(count = self.items.len(), "[Catalog] Catalog served");
        Ok(self.items.clone())
    }

    async fn fetch_item_detail(&self, id: &str) -> ProviderResult<Item> {
        self.round_trip(self.latency.detail_ms, "fetch_item_detail").await?;
        Ok(self
            .items
            .iter()
            .find(|it| it.id == id)
            .cloned()
            .unwrap_or_else(|| placeholder_item(id)))
    }

    async fn search_items(&self, query: &str) -> ProviderResult<SearchResult> {
        self.round_trip(self.latency.search_ms, "search_items").await?;
        let needle = query.trim();
        let results: Vec<Item> = self
            .items
            .iter()
            .filter(|it| matches_query(it, needle))
            .cloned()
            .collect();
        tracing::debug!(query = %query, count = results.len(), "[Catalog] Search served");
        Ok(SearchResult {
            query: query.to_string(),
            total_count: results.len(),
            results,
        })
    }

    async fn fetch_user_profile(&self, user_id: &str) -> ProviderResult<UserProfile> {
        self.round_trip(self.latency.profile_ms, "fetch_user_profile").await?;
        Ok(UserProfile {
            id: user_id.to_string(),
            name: "Alex Developer".to_string(),
            email: "alex@funapp.demo".to_string(),
            avatar_url: None,
            bio: Some(
                "Android developer who enjoys clean architecture, declarative UI, and careful UX."
                    .to_string(),
            ),
            views_count: 1247,
            favorites_count: 38,
            days_count: 142,
        })
    }
}
