//! # Contract Search
//!
//! Wiring crate for the contract search facade: builds the configured
//! client from the environment and exposes it to application code.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during startup or execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] contract_search_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
