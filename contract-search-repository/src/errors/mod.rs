//! Error types for the contract search repository.

mod search_error;

pub use search_error::SearchError;
