//! Search query construction.
//!
//! A `SearchQuery` pairs a query DSL expression with a result-size bound.
//! Constructors cover the common expressions; `from_expression` accepts any
//! raw DSL body for callers that need more.

use serde_json::{json, Value};

/// Default number of results returned when no size is set.
pub const DEFAULT_SIZE: usize = 10;

/// A structured search query: a DSL expression plus a size bound.
///
/// Caller-constructed and read-only to the facade. The expression is the
/// inner query body; the facade wraps it in `{ "size": n, "query": ... }`
/// when submitting.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    expression: Value,
    size: usize,
}

impl SearchQuery {
    /// Build a query from a raw DSL expression.
    pub fn from_expression(expression: Value) -> Self {
        Self {
            expression,
            size: DEFAULT_SIZE,
        }
    }

    /// Phrase match on a full-text field.
    pub fn match_phrase(field: impl Into<String>, phrase: impl Into<String>) -> Self {
        let field: String = field.into();
        let phrase: String = phrase.into();
        Self::from_expression(json!({
            "match_phrase": { field: phrase }
        }))
    }

    /// Exact term match on a keyword field.
    pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field: String = field.into();
        let value: Value = value.into();
        Self::from_expression(json!({
            "term": { field: value }
        }))
    }

    /// Match every document in the index.
    pub fn match_all() -> Self {
        Self::from_expression(json!({ "match_all": {} }))
    }

    /// Set the maximum number of results to return.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// The result-size bound.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The inner DSL expression.
    pub fn expression(&self) -> &Value {
        &self.expression
    }

    /// Render the full request body submitted to the search call.
    pub fn request_body(&self) -> Value {
        json!({
            "size": self.size,
            "query": self.expression
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_phrase() {
        let query = SearchQuery::match_phrase("full_text", "indemnity");

        assert_eq!(
            query.expression(),
            &json!({ "match_phrase": { "full_text": "indemnity" } })
        );
        assert_eq!(query.size(), DEFAULT_SIZE);
    }

    #[test]
    fn test_term() {
        let query = SearchQuery::term("status", "active").with_size(5);

        assert_eq!(query.expression(), &json!({ "term": { "status": "active" } }));
        assert_eq!(query.size(), 5);
    }

    #[test]
    fn test_request_body() {
        let body = SearchQuery::match_all().with_size(25).request_body();

        assert_eq!(body["size"], 25);
        assert_eq!(body["query"], json!({ "match_all": {} }));
    }

    #[test]
    fn test_raw_expression() {
        let expression = json!({
            "bool": {
                "must": [ { "term": { "status": "active" } } ],
                "filter": [ { "range": { "expiry": { "gte": "2026-01-01" } } } ]
            }
        });
        let query = SearchQuery::from_expression(expression.clone());

        assert_eq!(query.expression(), &expression);
        assert_eq!(query.request_body()["query"], expression);
    }
}
