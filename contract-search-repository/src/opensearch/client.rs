//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client. Every operation is a single
//! request/response exchange; errors carry the service's diagnostic body and
//! nothing is retried here.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    BulkParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::config::{ClientConfig, REQUEST_TIMEOUT};
use crate::errors::SearchError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BulkItemFailure, IndexOperation};
use contract_search_shared::{Document, IndexDescriptor, SearchQuery};

/// OpenSearch implementation of the search index provider.
///
/// Holds a single reusable transport for the lifetime of the process; the
/// transport is cheap to share by reference and is never explicitly closed.
///
/// # Example
///
/// ```ignore
/// let config = ClientConfig::from_env()?;
/// let client = OpenSearchClient::new(&config)?;
/// let healthy = client.health_check().await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client from connection settings.
    ///
    /// The transport uses TLS with certificate verification (the endpoint
    /// is always `https`), basic authentication, and a fixed 30 second
    /// request timeout. No connection is opened until the first request.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError::ConfigurationError)` - If the endpoint is
    ///   malformed or transport construction fails
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let endpoint = config.endpoint()?;

        let conn_pool = SingleNodeConnectionPool::new(endpoint.clone());
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::Basic(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(REQUEST_TIMEOUT)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::configuration(e.to_string()))?;

        info!(
            host = %config.host,
            port = config.port,
            "Created OpenSearch client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Build the interleaved action/source lines for a bulk request.
    fn bulk_actions(operations: &[IndexOperation]) -> Vec<Value> {
        let mut lines = Vec::with_capacity(operations.len() * 2);
        for op in operations {
            let action = match &op.id {
                Some(id) => json!({ "index": { "_id": id } }),
                None => json!({ "index": {} }),
            };
            lines.push(action);
            lines.push(op.document.to_value());
        }
        lines
    }

    /// Walk a bulk response body and collect the rejected items.
    fn parse_bulk_failures(body: &Value) -> Vec<BulkItemFailure> {
        let empty = Vec::new();
        let items = body
            .get("items")
            .and_then(Value::as_array)
            .unwrap_or(&empty);

        items
            .iter()
            .filter_map(|item| item.get("index"))
            .filter(|result| result.get("error").is_some())
            .map(|result| BulkItemFailure {
                id: result
                    .get("_id")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                status: result
                    .get("status")
                    .and_then(Value::as_u64)
                    .unwrap_or(0) as u16,
                reason: result
                    .get("error")
                    .and_then(|e| e.get("reason"))
                    .and_then(Value::as_str)
                    .unwrap_or("unknown reason")
                    .to_string(),
            })
            .collect()
    }

    /// Extract the stored fields of each hit, preserving service order.
    fn parse_hits(body: &Value) -> Vec<Document> {
        body.get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("_source").cloned())
                    .filter_map(Document::from_value)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    async fn ensure_index(&self, descriptor: &IndexDescriptor) -> Result<(), SearchError> {
        let name = descriptor.name();

        let exists_response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = exists_response.status_code();
        if status.is_success() {
            debug!(index = %name, "Index already exists");
            return Ok(());
        }
        if status.as_u16() != 404 {
            let body = exists_response.text().await.unwrap_or_default();
            error!(index = %name, status = %status, body = %body, "Existence check failed");
            return Err(SearchError::index_creation(format!(
                "Existence check for '{}' failed with status {}: {}",
                name, status, body
            )));
        }

        let create_response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .body(descriptor.body())
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = create_response.status_code();
        if !status.is_success() {
            let body = create_response.text().await.unwrap_or_default();
            error!(index = %name, status = %status, body = %body, "Create index failed");
            return Err(SearchError::index_creation(format!(
                "Create of '{}' failed with status {}: {}",
                name, status, body
            )));
        }

        info!(index = %name, "Created index");
        Ok(())
    }

    async fn bulk_index(
        &self,
        index: &str,
        operations: &[IndexOperation],
    ) -> Result<usize, SearchError> {
        if operations.is_empty() {
            return Ok(0);
        }

        let body: Vec<JsonBody<Value>> = Self::bulk_actions(operations)
            .into_iter()
            .map(Into::into)
            .collect();

        // refresh=true trades write throughput for read-after-write
        // visibility: queries issued after this call observe the documents.
        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .refresh(Refresh::True)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::bulk_index(vec![BulkItemFailure {
                id: None,
                status: 0,
                reason: e.to_string(),
            }]))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, body = %body, "Bulk request failed");
            return Err(SearchError::bulk_index(vec![BulkItemFailure {
                id: None,
                status: status.as_u16(),
                reason: body,
            }]));
        }

        let response_body: Value = response.json().await.map_err(|e| {
            SearchError::bulk_index(vec![BulkItemFailure {
                id: None,
                status: 0,
                reason: format!("Failed to parse bulk response: {}", e),
            }])
        })?;

        if response_body
            .get("errors")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            let failures = Self::parse_bulk_failures(&response_body);
            error!(
                index = %index,
                failed = failures.len(),
                total = operations.len(),
                "Bulk index had rejected items"
            );
            return Err(SearchError::bulk_index(failures));
        }

        debug!(index = %index, count = operations.len(), "Bulk indexed documents");
        Ok(operations.len())
    }

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Vec<Document>, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(query.request_body())
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            return Err(SearchError::query(format!("Index '{}' does not exist", index)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, body = %body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::query(format!("Failed to parse search response: {}", e)))?;

        let documents = Self::parse_hits(&response_body);
        debug!(index = %index, count = documents.len(), "Search completed");
        Ok(documents)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(format!("Health check failed: {}", e)))?;

        let health: Value = response
            .json()
            .await
            .map_err(|e| SearchError::connection(format!("Failed to parse health response: {}", e)))?;

        let status = health
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        info!(status = %status, "Cluster health");

        Ok(status == "green" || status == "yellow")
    }
}
