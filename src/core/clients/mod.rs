//! Category client implementations
//!
//! Each client produces deterministic mock payloads describing what the real
//! integration would return. Sub-provider operations report a missing
//! credential as data instead of failing.

pub mod background;
pub mod business;
pub mod court;
pub mod government;
pub mod property;
pub mod vehicle;

pub use background::BackgroundCheckClient;
pub use business::BusinessRegistrationClient;
pub use court::CourtRecordsClient;
pub use government::GovernmentDataClient;
pub use property::PropertyRecordsClient;
pub use vehicle::VehicleRecordsClient;

use crate::core::category::Category;
use crate::core::constants::message;
use crate::models::record::{Filters, Record};
use serde_json::{Value, json};

/// Build a payload starting with `api_type`, followed by the fields of `body`
pub(crate) fn payload(category: Category, body: Value) -> Record {
    let mut record = Record::new();
    record.insert("api_type".to_string(), json!(category.as_str()));
    match body {
        Value::Object(fields) => record.extend(fields),
        Value::Null => {}
        other => {
            record.insert("data".to_string(), other);
        }
    }
    record
}

/// Payload for a sub-provider whose credential is not configured
pub(crate) fn missing_credential(category: Category, source: &str, note: &str) -> Record {
    payload(category, json!({ "source": source, "message": note }))
}

/// Standard mock search payload shared by most categories
pub(crate) fn mock_search(category: Category, query: &str, filters: &Filters) -> Record {
    payload(
        category,
        json!({
            "query": query,
            "filters": filters,
            "results": [],
            "total": 0,
            "message": message::MOCK,
        }),
    )
}

/// Standard mock detail payload keyed by `id_field`
pub(crate) fn mock_detail(category: Category, id_field: &str, id: &str) -> Record {
    let mut body = serde_json::Map::new();
    body.insert(id_field.to_string(), json!(id));
    body.insert("details".to_string(), json!({}));
    body.insert("message".to_string(), json!(message::MOCK));
    payload(category, Value::Object(body))
}

/// Copy of `filters` with one extra entry
pub(crate) fn with_filter(filters: &Filters, key: &str, value: &str) -> Filters {
    let mut filters = filters.clone();
    filters.insert(key.to_string(), json!(value));
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_puts_api_type_first() {
        let record = payload(Category::Court, json!({"query": "x"}));
        let keys: Vec<_> = record.keys().cloned().collect();
        assert_eq!(keys, vec!["api_type", "query"]);
        assert_eq!(record["api_type"], json!("court_records"));
    }

    #[test]
    fn test_missing_credential_payload() {
        let record = missing_credential(Category::Vehicle, "vindata", "key required");
        assert_eq!(record["api_type"], json!("vehicle_records"));
        assert_eq!(record["source"], json!("vindata"));
        assert_eq!(record["message"], json!("key required"));
    }

    #[test]
    fn test_with_filter_leaves_original_untouched() {
        let original = Filters::new();
        let extended = with_filter(&original, "search_type", "party");
        assert!(original.is_empty());
        assert_eq!(extended["search_type"], json!("party"));
    }
}
