//! HTTP request bodies
//!
//! Every field defaults so that missing values reach validation instead of
//! failing JSON extraction.

use crate::models::record::Filters;
use serde::Deserialize;

/// Record type that fans out to every category
pub const ALL_TYPES: &str = "all";

/// `POST /api/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub record_types: Option<Vec<String>>,
    #[serde(default)]
    pub filters: Filters,
}

impl SearchRequest {
    /// True when the request targets every category
    pub fn searches_all(&self) -> bool {
        match &self.record_types {
            None => true,
            Some(types) => types.iter().any(|t| t.eq_ignore_ascii_case(ALL_TYPES)),
        }
    }
}

/// `POST /api/search/{record_type}` and text-query convenience routes
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: Filters,
}

/// `POST /api/court/party`
#[derive(Debug, Clone, Deserialize)]
pub struct PartyRequest {
    #[serde(default)]
    pub party_name: String,
    #[serde(default)]
    pub filters: Filters,
}

/// `POST /api/court/legislation`
#[derive(Debug, Clone, Deserialize)]
pub struct LegislationRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub filters: Filters,
}

/// `POST /api/property/address`
#[derive(Debug, Clone, Deserialize)]
pub struct AddressRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

/// Address plus free-form extra parameters (valuation, analytics)
#[derive(Debug, Clone, Deserialize)]
pub struct AddressLookupRequest {
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub extra: Filters,
}

/// `POST /api/property/report`
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub report_type: Option<String>,
}

/// `POST /api/government/census`
#[derive(Debug, Clone, Deserialize)]
pub struct CensusRequest {
    #[serde(default)]
    pub geography: String,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub filters: Filters,
}

/// `POST /api/background/checkr`
#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningRequest {
    #[serde(default)]
    pub candidate_email: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(flatten)]
    pub candidate: Filters,
}

/// `POST /api/background/criminal`
#[derive(Debug, Clone, Deserialize)]
pub struct CriminalSearchRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// `POST /api/vehicle/dmv`
#[derive(Debug, Clone, Deserialize)]
pub struct DmvRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub state: String,
}
