//! Data providers behind the screens: catalog, search, and summarization.
//!
//! Every provider call is async and fallible with a single error kind,
//! [`ProviderError`], which screens fold into their `error` fields.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::state::{Item, SearchResult, UserProfile};

pub mod catalog;
pub mod descriptions;
pub mod search;
pub mod summarize;

pub use catalog::DefaultCatalog;
pub use search::DefaultSearchService;
pub use summarize::ExtractiveSummarizer;

/// Message used when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";
/// Message of the injected failure mode.
pub const SIMULATED_ERROR: &str = "Simulated network error";
/// Message produced by [`with_timeout`].
pub const TIMEOUT_ERROR: &str = "Request timed out";

/// Failure of a provider call.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProviderError {
    /// Human-readable cause, if the provider supplied one.
    pub message: Option<String>,
}

impl ProviderError {
    /// Error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Error without a message.
    pub const fn unknown() -> Self {
        Self { message: None }
    }

    /// Message for display, `"Unknown error"` when absent.
    pub fn message(&self) -> &str {
        self.message_or(UNKNOWN_ERROR)
    }

    /// Message for display with a caller-chosen fallback.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => fallback,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ProviderError {}

/// Result alias for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Source of catalog items, detail, search, and the user profile.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full ordered catalog.
    async fn fetch_catalog(&self) -> ProviderResult<Vec<Item>>;
    /// Detail for one item; unknown ids yield a placeholder item.
    async fn fetch_item_detail(&self, id: &str) -> ProviderResult<Item>;
    /// Case-insensitive text search over the catalog.
    async fn search_items(&self, query: &str) -> ProviderResult<SearchResult>;
    /// Profile of `user_id`.
    async fn fetch_user_profile(&self, user_id: &str) -> ProviderResult<UserProfile>;
}

/// Text search used by the Search tab.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for `query`.
    async fn search(&self, query: &str) -> ProviderResult<SearchResult>;
}

/// Optional text summarization backend.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Whether the backend can be used at all on this system.
    async fn is_available(&self) -> bool;
    /// Produce a short summary of `text`.
    async fn summarize(&self, text: &str) -> ProviderResult<String>;
}

/// What: Bound a provider call by an optional timeout.
///
/// Inputs:
/// - `component`: Caller named in the timeout log line (e.g. `"Search"`)
/// - `limit`: Maximum duration, or `None` to wait indefinitely
/// - `fut`: Provider call
///
/// Output:
/// - The call's own result, or `Err("Request timed out")` when the limit elapses first.
pub async fn with_timeout<T, F>(
    component: &'static str,
    limit: Option<Duration>,
    fut: F,
) -> ProviderResult<T>
where
    F: Future<Output = ProviderResult<T>>,
{
    match limit {
        Some(d) => tokio::time::timeout(d, fut).await.unwrap_or_else(|_| {
            tracing::warn!(component, timeout_ms = d.as_millis(), "[Provider] Call timed out");
            Err(ProviderError::new(TIMEOUT_ERROR))
        }),
        None => fut.await,
    }
}
