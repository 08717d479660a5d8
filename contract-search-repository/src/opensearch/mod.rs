//! OpenSearch implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client.

mod client;

pub use client::OpenSearchClient;
