//! Record data models
//!
//! Queries, result payloads, and the per-category maps produced by fan-out.

use crate::core::category::Category;
use crate::core::client::RecordError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A result payload. No schema is enforced across categories; by convention
/// every record carries `api_type`.
pub type Record = Map<String, Value>;

/// Provider-specific search filters, passed through unvalidated
pub type Filters = Map<String, Value>;

/// Free-text query plus filters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
    filters: Filters,
}

impl SearchQuery {
    /// Build a query, rejecting empty text
    pub fn new(text: impl Into<String>, filters: Filters) -> Result<Self, RecordError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RecordError::MalformedRequest(
                "Query parameter is required".to_string(),
            ));
        }
        Ok(Self { text, filters })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }
}

/// Outcome of one category during fan-out
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    Found(Record),
    Failed { error: String },
}

impl CategoryOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, CategoryOutcome::Failed { .. })
    }

    #[cfg(test)]
    pub fn record(&self) -> Option<&Record> {
        match self {
            CategoryOutcome::Found(record) => Some(record),
            CategoryOutcome::Failed { .. } => None,
        }
    }
}

impl Serialize for CategoryOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryOutcome::Found(record) => record.serialize(serializer),
            CategoryOutcome::Failed { error } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

/// Ordered map keyed by category. Serializes as a JSON object whose keys are
/// canonical category names, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap<T> {
    entries: Vec<(Category, T)>,
}

impl<T> CategoryMap<T> {
    #[cfg(test)]
    pub fn get(&self, category: Category) -> Option<&T> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Category, T)> {
        self.entries.iter()
    }
}

impl<T> FromIterator<(Category, T)> for CategoryMap<T> {
    fn from_iter<I: IntoIterator<Item = (Category, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, value) in &self.entries {
            map.serialize_entry(category.as_str(), value)?;
        }
        map.end()
    }
}

/// Result of searching every category
pub type AggregateResult = CategoryMap<CategoryOutcome>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            SearchQuery::new("", Filters::new()),
            Err(RecordError::MalformedRequest(_))
        ));
        assert!(SearchQuery::new("   ", Filters::new()).is_err());
    }

    #[test]
    fn test_query_keeps_text_and_filters() {
        let mut filters = Filters::new();
        filters.insert("state".to_string(), json!("CA"));
        let query = SearchQuery::new("John Doe", filters).unwrap();
        assert_eq!(query.text(), "John Doe");
        assert_eq!(query.filters().get("state"), Some(&json!("CA")));
    }

    #[test]
    fn test_outcome_serialization() {
        let mut record = Record::new();
        record.insert("api_type".to_string(), json!("court_records"));

        let found = serde_json::to_value(CategoryOutcome::Found(record)).unwrap();
        assert_eq!(found, json!({"api_type": "court_records"}));

        let failed = serde_json::to_value(CategoryOutcome::Failed {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(failed, json!({"error": "boom"}));
    }

    #[test]
    fn test_category_map_preserves_insertion_order() {
        let map: CategoryMap<bool> = [
            (Category::Vehicle, true),
            (Category::Court, false),
            (Category::Government, true),
        ]
        .into_iter()
        .collect();

        let rendered = serde_json::to_string(&map).unwrap();
        assert_eq!(
            rendered,
            r#"{"vehicle_records":true,"court_records":false,"government_data":true}"#
        );
        assert_eq!(map.get(Category::Court), Some(&false));
        assert_eq!(map.get(Category::Business), None);
        assert_eq!(map.len(), 3);
    }
}
