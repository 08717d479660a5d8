//! Search facade implementation.
//!
//! This module provides the main client application code uses to ensure
//! indices exist, bulk-load documents, and run queries. It validates input,
//! resolves operation identifiers, and delegates execution to an injected
//! `SearchIndexProvider`.

use crate::config::SearchClientConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchIndexProvider;
use crate::types::IndexOperation;
use contract_search_shared::{Document, IndexDescriptor, SearchQuery};

/// The main client for the contract search facade.
///
/// Constructed once at startup with a concrete provider and shared by
/// reference; there is no hidden process-wide instance.
pub struct ContractSearchClient {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchClientConfig,
}

impl ContractSearchClient {
    /// Create a new client with default configuration.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchClientConfig::default(),
        }
    }

    /// Create a new client with custom configuration.
    pub fn with_config(provider: Box<dyn SearchIndexProvider>, config: SearchClientConfig) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Ensure the described index exists, creating it if absent.
    ///
    /// Idempotent: calling twice with the same descriptor performs at most
    /// one create and leaves the index unchanged.
    pub async fn ensure_index(&self, descriptor: &IndexDescriptor) -> Result<(), SearchError> {
        if descriptor.name().is_empty() {
            return Err(SearchError::index_creation("index name is required"));
        }
        self.provider.ensure_index(descriptor).await
    }

    /// Bulk-load documents into an index and return the submitted count.
    ///
    /// The operation identifier per document comes from the configured
    /// extractor (default: `contract_id`, then `id`, else service-assigned).
    /// The whole batch goes out as one request with a synchronous refresh,
    /// so queries issued afterwards observe the documents. Partial
    /// rejections surface as `SearchError::BulkIndexError`; accepted items
    /// are not rolled back and nothing is retried.
    pub async fn bulk_index(
        &self,
        index: &str,
        documents: Vec<Document>,
    ) -> Result<usize, SearchError> {
        if documents.is_empty() {
            return Ok(0);
        }
        self.validate_batch_size(documents.len())?;

        let operations: Vec<IndexOperation> = documents
            .into_iter()
            .map(|document| IndexOperation {
                id: (self.config.id_extractor)(&document),
                document,
            })
            .collect();

        self.provider.bulk_index(index, &operations).await
    }

    /// Run a size-bounded query and return the matched documents in the
    /// service's relevance order. Zero matches yield an empty vector; a
    /// missing index is a `SearchError::QueryError`, never an empty result.
    pub async fn query(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<Vec<Document>, SearchError> {
        if index.is_empty() {
            return Err(SearchError::query("index name is required"));
        }
        self.provider.search(index, query).await
    }

    /// Check that the search cluster is healthy and reachable.
    pub async fn health_check(&self) -> Result<bool, SearchError> {
        self.provider.health_check().await
    }
}
