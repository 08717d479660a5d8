//! Caller-shaped documents.
//!
//! A document is an ordered mapping of field name to JSON value. The search
//! facade never interprets field semantics beyond identifier extraction; it
//! serializes the document as-is into the index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document to be indexed or returned from a query.
///
/// Wraps a JSON object so callers are not forced into a fixed schema.
/// Documents are read-only to the search facade; indexing derives an
/// operation identifier from the document but never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create a document from a JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Set a field, returning the document for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Get a field value as a string slice, if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON value for request bodies.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// The document as a JSON value, cloning the fields.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_field_and_get() {
        let doc = Document::new()
            .with_field("contract_id", "C-001")
            .with_field("status", "active");

        assert_eq!(doc.get_str("contract_id"), Some("C-001"));
        assert_eq!(doc.get_str("status"), Some("active"));
        assert!(doc.get("missing").is_none());
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_from_value_object() {
        let doc = Document::from_value(json!({
            "contract_id": "C-002",
            "parties": ["Gamma", "XYZ"]
        }))
        .unwrap();

        assert_eq!(doc.get_str("contract_id"), Some("C-002"));
        assert!(doc.get("parties").unwrap().is_array());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(Document::from_value(json!("not an object")).is_none());
        assert!(Document::from_value(json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_get_str_non_string_field() {
        let doc = Document::new().with_field("expiry_days", 30);
        assert!(doc.get_str("expiry_days").is_none());
        assert_eq!(doc.get("expiry_days"), Some(&json!(30)));
    }

    #[test]
    fn test_serde_transparent() {
        let doc = Document::new().with_field("title", "Alpha-Beta Agreement");
        let serialized = serde_json::to_value(&doc).unwrap();

        assert_eq!(serialized, json!({"title": "Alpha-Beta Agreement"}));

        let roundtrip: Document = serde_json::from_value(serialized).unwrap();
        assert_eq!(roundtrip, doc);
    }
}
