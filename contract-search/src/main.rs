//! End-to-end scenario for the contract search facade.
//!
//! Ensures the `contracts_meta` index exists, bulk-loads two sample
//! contracts, and runs a phrase query against the full text.

use tracing::info;
use tracing_subscriber::EnvFilter;

use contract_search::{AppError, Dependencies};
use contract_search_shared::{Document, FieldType, IndexDescriptor, SearchQuery};

/// The index holding contract metadata.
const CONTRACTS_INDEX: &str = "contracts_meta";

fn contracts_descriptor() -> IndexDescriptor {
    IndexDescriptor::new(CONTRACTS_INDEX)
        .shards(1)
        .replicas(0)
        .field("contract_id", FieldType::Keyword)
        .field("title", FieldType::Text)
        .field("parties", FieldType::Keyword)
        .field("expiry", FieldType::Date)
        .field("status", FieldType::Keyword)
        .field("full_text", FieldType::Text)
}

fn sample_contracts() -> Vec<Document> {
    vec![
        Document::new()
            .with_field("contract_id", "C-001")
            .with_field("title", "Alpha-Beta Agreement")
            .with_field("parties", serde_json::json!(["Alpha", "Beta"]))
            .with_field("expiry", "2027-02-19")
            .with_field("status", "active")
            .with_field("full_text", "Indemnity clause applies."),
        Document::new()
            .with_field("contract_id", "C-002")
            .with_field("title", "Gamma Licence")
            .with_field("parties", serde_json::json!(["Gamma", "XYZ"]))
            .with_field("expiry", "2026-09-30")
            .with_field("status", "signed")
            .with_field("full_text", "Force majeure included."),
    ]
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let deps = Dependencies::new().await?;

    deps.search.ensure_index(&contracts_descriptor()).await?;

    let count = deps
        .search
        .bulk_index(CONTRACTS_INDEX, sample_contracts())
        .await?;
    info!(count = count, index = CONTRACTS_INDEX, "Indexed sample contracts");

    let query = SearchQuery::match_phrase("full_text", "indemnity").with_size(5);
    let results = deps.search.query(CONTRACTS_INDEX, &query).await?;

    info!(matches = results.len(), "Query completed");
    for doc in &results {
        info!(
            contract_id = doc.get_str("contract_id").unwrap_or("<none>"),
            title = doc.get_str("title").unwrap_or("<none>"),
            "Matched contract"
        );
    }

    Ok(())
}
