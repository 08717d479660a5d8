//! Configuration for the search client and facade.
//!
//! `ClientConfig` captures the connection settings read from the process
//! environment; `SearchClientConfig` captures facade behavior (batch-size
//! cap and identifier extraction). Both are constructed once at startup and
//! injected, never read from hidden globals.

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::errors::SearchError;
use contract_search_shared::Document;

/// Environment variable naming the search service hostname (required).
pub const ENV_HOST: &str = "SERVICE_HOST";
/// Environment variable naming the search service port (default 443).
pub const ENV_PORT: &str = "SERVICE_PORT";
/// Environment variable naming the basic-auth username (required).
pub const ENV_USER: &str = "SERVICE_USER";
/// Environment variable naming the basic-auth password (required).
pub const ENV_PASS: &str = "SERVICE_PASS";

/// Default service port when `SERVICE_PORT` is not set.
pub const DEFAULT_PORT: u16 = 443;

/// Fixed request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the search service.
///
/// TLS with certificate verification is always on; the endpoint scheme is
/// `https` regardless of port.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Search service hostname.
    pub host: String,
    /// Search service port.
    pub port: u16,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl ClientConfig {
    /// Read the connection settings from the process environment.
    ///
    /// Fails with `SearchError::ConfigurationError` if the host is absent
    /// or malformed, the port does not parse, or credentials are missing.
    /// No network call is made.
    pub fn from_env() -> Result<Self, SearchError> {
        let host = required(ENV_HOST)?;
        let port = match env::var(ENV_PORT) {
            Ok(value) => value.parse::<u16>().map_err(|_| {
                SearchError::configuration(format!("{} is not a valid port: {}", ENV_PORT, value))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let username = required(ENV_USER)?;
        let password = required(ENV_PASS)?;

        let config = Self {
            host,
            port,
            username,
            password,
        };
        // Validate the host up front so a malformed value fails here, not
        // on the first request.
        config.endpoint()?;
        Ok(config)
    }

    /// The HTTPS endpoint URL for the configured host and port.
    pub fn endpoint(&self) -> Result<Url, SearchError> {
        let raw = format!("https://{}:{}", self.host, self.port);
        let url = Url::parse(&raw).map_err(|e| {
            SearchError::configuration(format!("{} is malformed ({}): {}", ENV_HOST, self.host, e))
        })?;
        // Url::parse accepts hosts with embedded paths ("example.com/x");
        // reject anything that did not parse as a bare authority. Url
        // lowercases the host, so compare case-insensitively.
        let host_matches = url
            .host_str()
            .is_some_and(|h| h.eq_ignore_ascii_case(&self.host));
        if url.path() != "/" || !host_matches {
            return Err(SearchError::configuration(format!(
                "{} is malformed: {}",
                ENV_HOST, self.host
            )));
        }
        Ok(url)
    }
}

fn required(name: &str) -> Result<String, SearchError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SearchError::configuration(format!("{} is not set", name))),
    }
}

/// Identifier-extraction function used by the bulk loader.
///
/// Returns the operation identifier for a document, or `None` to let the
/// service assign one.
pub type IdExtractor = Arc<dyn Fn(&Document) -> Option<String> + Send + Sync>;

/// Default identifier extraction: `contract_id`, falling back to `id`.
pub fn contract_id_extractor(document: &Document) -> Option<String> {
    document
        .get_str("contract_id")
        .or_else(|| document.get_str("id"))
        .map(str::to_string)
}

/// Configuration for the `ContractSearchClient` facade.
#[derive(Clone)]
pub struct SearchClientConfig {
    /// Maximum number of documents allowed in a single batch operation.
    /// Set to None to disable the limit (not recommended for production).
    pub max_batch_size: Option<usize>,
    /// How the bulk loader derives an operation identifier per document.
    pub id_extractor: IdExtractor,
}

impl Default for SearchClientConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
            id_extractor: Arc::new(contract_id_extractor),
        }
    }
}

impl SearchClientConfig {
    /// Create a config with no batch size limit (use with caution).
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
            ..Self::default()
        }
    }

    /// Create a config with a custom batch size limit.
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
            ..Self::default()
        }
    }

    /// Replace the identifier extractor, for callers whose documents do not
    /// follow the `contract_id`/`id` convention.
    pub fn with_id_extractor(
        mut self,
        extractor: impl Fn(&Document) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.id_extractor = Arc::new(extractor);
        self
    }
}

impl fmt::Debug for SearchClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClientConfig")
            .field("max_batch_size", &self.max_batch_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment mutation is process-global; serialize these tests.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for name in [ENV_HOST, ENV_PORT, ENV_USER, ENV_PASS] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_from_env_missing_host() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(ENV_USER, "admin");
        env::set_var(ENV_PASS, "secret");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, SearchError::ConfigurationError(_)));
        assert!(err.to_string().contains(ENV_HOST));
        clear_env();
    }

    #[test]
    fn test_from_env_missing_credentials() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(ENV_HOST, "search.example.com");
        env::set_var(ENV_USER, "admin");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_PASS));
        clear_env();
    }

    #[test]
    fn test_from_env_defaults_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(ENV_HOST, "search.example.com");
        env::set_var(ENV_USER, "admin");
        env::set_var(ENV_PASS, "secret");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);

        // The url crate normalizes away the default https port.
        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_str(), Some("search.example.com"));
        clear_env();
    }

    #[test]
    fn test_from_env_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(ENV_HOST, "search.example.com");
        env::set_var(ENV_PORT, "not-a-port");
        env::set_var(ENV_USER, "admin");
        env::set_var(ENV_PASS, "secret");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_PORT));
        clear_env();
    }

    #[test]
    fn test_from_env_malformed_host() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(ENV_HOST, "search.example.com/extra");
        env::set_var(ENV_USER, "admin");
        env::set_var(ENV_PASS, "secret");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, SearchError::ConfigurationError(_)));
        clear_env();
    }

    #[test]
    fn test_contract_id_extractor_chain() {
        let with_contract_id = Document::new()
            .with_field("contract_id", "C-001")
            .with_field("id", "ignored");
        assert_eq!(
            contract_id_extractor(&with_contract_id),
            Some("C-001".to_string())
        );

        let with_id = Document::new().with_field("id", "42");
        assert_eq!(contract_id_extractor(&with_id), Some("42".to_string()));

        let with_neither = Document::new().with_field("title", "untracked");
        assert_eq!(contract_id_extractor(&with_neither), None);
    }

    #[test]
    fn test_custom_id_extractor() {
        let config = SearchClientConfig::default()
            .with_id_extractor(|doc| doc.get_str("sku").map(str::to_string));
        let doc = Document::new().with_field("sku", "SKU-9");

        assert_eq!((config.id_extractor)(&doc), Some("SKU-9".to_string()));
    }
}
