use std::path::Path;

use anyhow::Context;
use contracts::domain::common::AggregateRoot;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Aggregate with built-in sample records
pub trait SeedSource: AggregateRoot + DeserializeOwned {
    fn builtin() -> Vec<Self>;
}

/// Load records of one domain.
///
/// The seed file is a JSON object keyed by collection name
/// (`{"orders": [...], "arrangements": [...]}`); a domain missing from the
/// file, or no file at all, falls back to the built-in samples.
pub fn load_records<R: SeedSource>(seed_path: Option<&Path>) -> anyhow::Result<Vec<R>> {
    let Some(path) = seed_path else {
        return Ok(R::builtin());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed(&contents)
}

pub fn parse_seed<R: SeedSource>(contents: &str) -> anyhow::Result<Vec<R>> {
    let mut document: Map<String, Value> =
        serde_json::from_str(contents).context("Seed file is not a JSON object")?;

    match document.remove(R::collection_name()) {
        Some(value) => {
            let records: Vec<R> = serde_json::from_value(value)
                .with_context(|| format!("Invalid records in \"{}\"", R::collection_name()))?;
            tracing::info!("Loaded {} {} from seed file", records.len(), R::collection_name());
            Ok(records)
        }
        None => {
            tracing::warn!(
                "Seed file has no \"{}\" key, using built-in samples",
                R::collection_name()
            );
            Ok(R::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_delivery::{Delivery, DeliveryStatus};

    #[test]
    fn test_parse_seed_reads_collection() {
        let json = r#"{
            "deliveries": [{
                "id": "d-100",
                "deliveryNo": "DLV-2025-0100",
                "name": "制御盤",
                "client": "東邦精密",
                "address": "愛知県豊田市",
                "deliveryDate": "2025-04-18",
                "amount": 1450000,
                "status": "配送中"
            }]
        }"#;
        let records: Vec<Delivery> = parse_seed(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, DeliveryStatus::InTransit);
    }

    #[test]
    fn test_missing_collection_falls_back() {
        let records: Vec<Delivery> = parse_seed(r#"{"orders": []}"#).unwrap();
        assert_eq!(records, Delivery::builtin());
    }

    #[test]
    fn test_invalid_seed() {
        assert!(parse_seed::<Delivery>("[1, 2]").is_err());
        assert!(parse_seed::<Delivery>(r#"{"deliveries": [{"id": 1}]}"#).is_err());
    }

    #[test]
    fn test_no_seed_path_uses_builtin() {
        let records: Vec<Delivery> = load_records(None).unwrap();
        assert!(!records.is_empty());
    }
}
