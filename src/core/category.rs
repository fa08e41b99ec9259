//! Record categories and name resolution
//!
//! Maps user-supplied category names (short names and canonical names, any
//! case) onto the six record categories through a static alias table.

use crate::core::constants::category;
use serde::{Serialize, Serializer};
use std::fmt;

/// One of the six public-record domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Court,
    Property,
    Business,
    Government,
    Background,
    Vehicle,
}

/// Alias -> category lookup table. Keys are lowercase.
const ALIASES: &[(&str, Category)] = &[
    ("court", Category::Court),
    (category::COURT, Category::Court),
    ("property", Category::Property),
    (category::PROPERTY, Category::Property),
    ("business", Category::Business),
    (category::BUSINESS, Category::Business),
    ("government", Category::Government),
    (category::GOVERNMENT, Category::Government),
    ("background", Category::Background),
    (category::BACKGROUND, Category::Background),
    ("vehicle", Category::Vehicle),
    (category::VEHICLE, Category::Vehicle),
];

impl Category {
    /// All categories in fan-out order
    pub const ALL: [Category; 6] = [
        Category::Court,
        Category::Property,
        Category::Business,
        Category::Government,
        Category::Background,
        Category::Vehicle,
    ];

    /// Canonical name, used as the `api_type` of results and as aggregate keys
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Court => category::COURT,
            Category::Property => category::PROPERTY,
            Category::Business => category::BUSINESS,
            Category::Government => category::GOVERNMENT,
            Category::Background => category::BACKGROUND,
            Category::Vehicle => category::VEHICLE,
        }
    }

    /// Short alias shown to users in error messages
    pub fn short_name(self) -> &'static str {
        match self {
            Category::Court => "court",
            Category::Property => "property",
            Category::Business => "business",
            Category::Government => "government",
            Category::Background => "background",
            Category::Vehicle => "vehicle",
        }
    }

    /// Resolve a category name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, category)| *category)
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Comma-separated short names of every category
pub fn valid_short_names() -> String {
    Category::ALL
        .iter()
        .map(|c| c.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_canonical_names_resolve_to_same_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.short_name()), Some(category));
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(Category::from_name("VEHICLE"), Some(Category::Vehicle));
        assert_eq!(Category::from_name("Court_Records"), Some(Category::Court));
        assert_eq!(Category::from_name("  property "), Some(Category::Property));
    }

    #[test]
    fn test_unknown_names_do_not_resolve() {
        assert_eq!(Category::from_name("unknown_type"), None);
        assert_eq!(Category::from_name(""), None);
        assert_eq!(Category::from_name("courts"), None);
        assert_eq!(Category::from_name("all"), None);
    }

    #[test]
    fn test_index_matches_fan_out_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_serializes_as_canonical_name() {
        let value = serde_json::to_value(Category::Business).unwrap();
        assert_eq!(value, serde_json::json!("business_registration"));
    }

    #[test]
    fn test_valid_short_names_lists_all_six() {
        assert_eq!(
            valid_short_names(),
            "court, property, business, government, background, vehicle"
        );
    }
}
