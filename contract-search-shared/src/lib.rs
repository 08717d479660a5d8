//! # Contract Search Shared
//!
//! Shared types for the contract search facade: documents, index
//! descriptors, and search queries. These types are constructed by callers
//! and consumed read-only by the repository crate.

mod document;
mod index;
mod query;

pub use document::Document;
pub use index::{FieldType, IndexDescriptor};
pub use query::SearchQuery;
