//! # Contract Search Repository
//!
//! This crate provides the provider trait and OpenSearch implementation for
//! the contract search facade: client construction from environment
//! configuration, idempotent index creation, bulk document loading, and
//! query execution.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use client::ContractSearchClient;
pub use config::{ClientConfig, SearchClientConfig};
pub use errors::SearchError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchClient;
pub use types::{BulkItemFailure, IndexOperation};
