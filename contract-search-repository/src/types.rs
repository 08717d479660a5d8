//! Operation and failure-report types for search index operations.

use std::fmt;

use contract_search_shared::Document;

/// A single resolved bulk operation: the document plus its operation
/// identifier, if one could be derived. Without an identifier the service
/// assigns one.
#[derive(Debug, Clone)]
pub struct IndexOperation {
    /// Identifier the document is indexed under, if derived.
    pub id: Option<String>,
    /// The document to index (upsert semantics at `id`).
    pub document: Document,
}

/// A single rejected item from a bulk submission, as reported by the
/// service. Carried inside `SearchError::BulkIndexError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkItemFailure {
    /// The identifier the item was submitted under, if any.
    pub id: Option<String>,
    /// HTTP status the service reported for the item.
    pub status: u16,
    /// The service's diagnostic reason.
    pub reason: String,
}

impl fmt::Display for BulkItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} (status {}): {}", id, self.status, self.reason),
            None => write!(f, "<unidentified> (status {}): {}", self.status, self.reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = BulkItemFailure {
            id: Some("C-002".to_string()),
            status: 400,
            reason: "failed to parse field [expiry]".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "C-002 (status 400): failed to parse field [expiry]"
        );

        let anonymous = BulkItemFailure {
            id: None,
            status: 429,
            reason: "too many requests".to_string(),
        };
        assert_eq!(
            anonymous.to_string(),
            "<unidentified> (status 429): too many requests"
        );
    }
}
