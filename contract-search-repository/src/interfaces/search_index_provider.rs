//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::IndexOperation;
use contract_search_shared::{Document, IndexDescriptor, SearchQuery};

/// Abstract interface for search index operations.
///
/// Implementations can be swapped for different backends (OpenSearch, mock)
/// enabling testing without a live cluster.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async
/// tasks.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Ensure the index described by `descriptor` exists.
    ///
    /// Creates the index with the descriptor's settings and mappings if it
    /// is absent; a no-op if it already exists. Idempotent.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The index exists or was created
    /// * `Err(SearchError::IndexCreationError)` - The create call was
    ///   rejected
    async fn ensure_index(&self, descriptor: &IndexDescriptor) -> Result<(), SearchError>;

    /// Submit a batch of index operations in a single bulk request.
    ///
    /// Upsert semantics per operation: create or overwrite at the
    /// operation's identifier, or service-assigned when absent. The index
    /// is refreshed synchronously so subsequent queries observe the
    /// documents immediately.
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Number of documents submitted and accepted
    /// * `Err(SearchError::BulkIndexError)` - One or more items were
    ///   rejected; accepted items in the batch are not rolled back
    async fn bulk_index(
        &self,
        index: &str,
        operations: &[IndexOperation],
    ) -> Result<usize, SearchError>;

    /// Execute a size-bounded search against an index.
    ///
    /// Returns the stored field values of each hit in the service's
    /// relevance order. Zero matches yield an empty vector, never an error.
    ///
    /// # Returns
    ///
    /// * `Ok(documents)` - Matched documents, possibly empty
    /// * `Err(SearchError::QueryError)` - The index does not exist or the
    ///   query expression was rejected
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Vec<Document>, SearchError>;

    /// Check if the search cluster is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Cluster status is green or yellow
    /// * `Ok(false)` - Cluster status is red or unknown
    /// * `Err(SearchError)` - The health check failed to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
