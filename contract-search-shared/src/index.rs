//! Index descriptors.
//!
//! An index descriptor names an index and declares its schema: field
//! mappings plus shard and replica counts. The descriptor renders itself to
//! the JSON body the create-index call expects.

use serde_json::{json, Map, Value};

/// Field types supported by the index mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Exact-match, non-analyzed field (identifiers, statuses).
    Keyword,
    /// Analyzed full-text field.
    Text,
    /// Date field.
    Date,
    /// 64-bit integer field.
    Long,
    /// Double-precision float field.
    Double,
    /// Boolean field.
    Boolean,
}

impl FieldType {
    /// The mapping type name the service expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Keyword => "keyword",
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Boolean => "boolean",
        }
    }
}

/// Descriptor for an index: name, storage settings, and field mappings.
///
/// Built by the caller and passed to `ensure_index`; never mutated
/// afterward.
///
/// # Example
///
/// ```
/// use contract_search_shared::{FieldType, IndexDescriptor};
///
/// let descriptor = IndexDescriptor::new("contracts_meta")
///     .shards(1)
///     .replicas(0)
///     .field("contract_id", FieldType::Keyword)
///     .field("full_text", FieldType::Text);
///
/// assert_eq!(descriptor.name(), "contracts_meta");
/// ```
#[derive(Debug, Clone)]
pub struct IndexDescriptor {
    name: String,
    shards: u32,
    replicas: u32,
    properties: Map<String, Value>,
}

impl IndexDescriptor {
    /// Create a descriptor with default storage settings (1 shard,
    /// 1 replica) and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shards: 1,
            replicas: 1,
            properties: Map::new(),
        }
    }

    /// Set the number of primary shards.
    pub fn shards(mut self, shards: u32) -> Self {
        self.shards = shards;
        self
    }

    /// Set the number of replicas.
    pub fn replicas(mut self, replicas: u32) -> Self {
        self.replicas = replicas;
        self
    }

    /// Declare a field with the given mapping type.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.properties
            .insert(name.into(), json!({ "type": field_type.as_str() }));
        self
    }

    /// Declare a field with a raw mapping body, for mapping options the
    /// typed variants do not cover (analyzers, multi-fields, ...).
    pub fn raw_field(mut self, name: impl Into<String>, mapping: Value) -> Self {
        self.properties.insert(name.into(), mapping);
        self
    }

    /// The index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the settings-and-mappings body for the create-index call.
    pub fn body(&self) -> Value {
        json!({
            "settings": {
                "number_of_shards": self.shards,
                "number_of_replicas": self.replicas
            },
            "mappings": {
                "properties": self.properties
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contracts_descriptor() -> IndexDescriptor {
        IndexDescriptor::new("contracts_meta")
            .shards(1)
            .replicas(0)
            .field("contract_id", FieldType::Keyword)
            .field("title", FieldType::Text)
            .field("parties", FieldType::Keyword)
            .field("expiry", FieldType::Date)
            .field("status", FieldType::Keyword)
            .field("full_text", FieldType::Text)
    }

    #[test]
    fn test_body_structure() {
        let body = contracts_descriptor().body();

        assert_eq!(body["settings"]["number_of_shards"], 1);
        assert_eq!(body["settings"]["number_of_replicas"], 0);

        let properties = &body["mappings"]["properties"];
        assert_eq!(properties["contract_id"]["type"], "keyword");
        assert_eq!(properties["title"]["type"], "text");
        assert_eq!(properties["expiry"]["type"], "date");
        assert_eq!(properties["full_text"]["type"], "text");
    }

    #[test]
    fn test_defaults() {
        let body = IndexDescriptor::new("bare").body();

        assert_eq!(body["settings"]["number_of_shards"], 1);
        assert_eq!(body["settings"]["number_of_replicas"], 1);
        assert!(body["mappings"]["properties"]
            .as_object()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_raw_field() {
        let body = IndexDescriptor::new("custom")
            .raw_field(
                "name",
                json!({ "type": "text", "fields": { "raw": { "type": "keyword" } } }),
            )
            .body();

        assert_eq!(body["mappings"]["properties"]["name"]["type"], "text");
        assert_eq!(
            body["mappings"]["properties"]["name"]["fields"]["raw"]["type"],
            "keyword"
        );
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Keyword.as_str(), "keyword");
        assert_eq!(FieldType::Text.as_str(), "text");
        assert_eq!(FieldType::Date.as_str(), "date");
        assert_eq!(FieldType::Long.as_str(), "long");
        assert_eq!(FieldType::Double.as_str(), "double");
        assert_eq!(FieldType::Boolean.as_str(), "boolean");
    }
}
