//! Search error types.
//!
//! Every error surfaces immediately to the caller with the service's
//! original diagnostic attached; nothing is swallowed or retried here.

use thiserror::Error;

use crate::types::BulkItemFailure;

/// Errors that can occur during search facade operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Missing or invalid environment configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The cluster could not be reached or reported itself unusable.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The create-index call was rejected (schema conflict, permissions).
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// One or more documents in a bulk batch were rejected. Successfully
    /// indexed items in the same batch remain indexed.
    #[error("Bulk index error: {} document(s) rejected", failures.len())]
    BulkIndexError {
        /// The rejected items with service-reported reasons.
        failures: Vec<BulkItemFailure>,
    },

    /// Malformed query or missing index.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Batch size exceeds the configured maximum; rejected before any
    /// network call.
    #[error("Batch size {provided} exceeds maximum {max}")]
    BatchSizeExceeded {
        /// Number of documents in the rejected batch.
        provided: usize,
        /// The configured cap.
        max: usize,
    },
}

impl SearchError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a bulk index error from the rejected items.
    pub fn bulk_index(failures: Vec<BulkItemFailure>) -> Self {
        Self::BulkIndexError { failures }
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a batch size exceeded error.
    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_error_display_counts_failures() {
        let err = SearchError::bulk_index(vec![
            BulkItemFailure {
                id: Some("C-001".to_string()),
                status: 400,
                reason: "mapper_parsing_exception".to_string(),
            },
            BulkItemFailure {
                id: None,
                status: 429,
                reason: "rejected_execution_exception".to_string(),
            },
        ]);

        assert_eq!(err.to_string(), "Bulk index error: 2 document(s) rejected");
    }

    #[test]
    fn test_configuration_error_display() {
        let err = SearchError::configuration("SERVICE_HOST is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: SERVICE_HOST is not set"
        );
    }
}
