use std::sync::Arc;

use async_trait::async_trait;

use super::{CatalogProvider, ProviderResult, SearchProvider};
use crate::state::SearchResult;

/// Search service backed by the catalog's text search.
///
/// Catalog failures degrade into an empty result for the query, so the
/// Search tab shows "no results" rather than an error banner.
pub struct DefaultSearchService {
    /// Catalog performing the actual match.
    catalog: Arc<dyn CatalogProvider>,
}

impl DefaultSearchService {
    /// Wrap a catalog provider.
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl SearchProvider for DefaultSearchService {
    async fn search(&self, query: &str) -> ProviderResult<SearchResult> {
        match self.catalog.search_items(query).await {
            Ok(res) => Ok(res),
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "[Search] Catalog search failed; returning empty result");
                Ok(SearchResult::empty(query))
            }
        }
    }
}
