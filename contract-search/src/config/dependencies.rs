//! Dependency initialization and wiring.
//!
//! The search client is constructed exactly once here, at startup, and
//! injected into whatever needs it. There is no memoized global; sharing is
//! by reference from this container.

use tracing::info;

use crate::AppError;
use contract_search_repository::{
    ClientConfig, ContractSearchClient, OpenSearchClient, SearchIndexProvider,
};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured search client, ready for use.
    pub search: ContractSearchClient,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// Reads `SERVICE_HOST`, `SERVICE_PORT`, `SERVICE_USER` and
    /// `SERVICE_PASS`, builds the OpenSearch client, and verifies cluster
    /// health before returning.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If configuration is invalid or the cluster is
    ///   unreachable or unhealthy
    pub async fn new() -> Result<Self, AppError> {
        let config = ClientConfig::from_env()?;

        info!(
            host = %config.host,
            port = config.port,
            "Initializing dependencies"
        );

        let provider = OpenSearchClient::new(&config)?;

        let healthy = provider
            .health_check()
            .await
            .map_err(|e| AppError::config(format!("Cluster health check failed: {}", e)))?;

        if !healthy {
            return Err(AppError::config("Search cluster is unhealthy"));
        }

        info!("Search cluster connection verified");

        Ok(Self {
            search: ContractSearchClient::new(Box::new(provider)),
        })
    }
}
