//! Constants for record categories, credentials, and provider endpoints
//!
//! This module defines string constants used throughout the application for
//! category names, environment variable names, provider base URLs, and the
//! canned messages returned by mock payloads.

/// Canonical category names (also the keys of aggregate results)
pub mod category {
    pub const COURT: &str = "court_records";
    pub const PROPERTY: &str = "property_records";
    pub const BUSINESS: &str = "business_registration";
    pub const GOVERNMENT: &str = "government_data";
    pub const BACKGROUND: &str = "background_check";
    pub const VEHICLE: &str = "vehicle_records";
}

/// Environment variables holding sub-provider secrets
pub mod env {
    pub const UNICOURT_API_KEY: &str = "UNICOURT_API_KEY";
    pub const PACER_USERNAME: &str = "PACER_USERNAME";
    pub const PACER_PASSWORD: &str = "PACER_PASSWORD";
    pub const COURTLISTENER_TOKEN: &str = "COURTLISTENER_TOKEN";
    pub const LEGISCAN_API_KEY: &str = "LEGISCAN_API_KEY";

    pub const PROPMIX_API_KEY: &str = "PROPMIX_API_KEY";
    pub const BRIDGE_API_KEY: &str = "BRIDGE_API_KEY";
    pub const FIRST_AMERICAN_API_KEY: &str = "FIRST_AMERICAN_API_KEY";
    pub const RENTCAST_API_KEY: &str = "RENTCAST_API_KEY";
    pub const HOUSECANARY_API_KEY: &str = "HOUSECANARY_API_KEY";

    pub const BUSINESS_API_KEY: &str = "BUSINESS_API_KEY";

    pub const DATA_GOV_API_KEY: &str = "DATA_GOV_API_KEY";

    pub const BACKGROUND_API_KEY: &str = "BACKGROUND_API_KEY";
    pub const CHECKR_API_KEY: &str = "CHECKR_API_KEY";
    pub const GRIDLINES_API_KEY: &str = "GRIDLINES_API_KEY";
    pub const IDENFY_API_KEY: &str = "IDENFY_API_KEY";

    pub const VEHICLE_API_KEY: &str = "VEHICLE_API_KEY";
    pub const VINDATA_API_KEY: &str = "VINDATA_API_KEY";
    pub const IDSCAN_API_KEY: &str = "IDSCAN_API_KEY";
}

/// Provider base URLs
pub mod base_url {
    pub const UNICOURT: &str = "https://api.unicourt.com";
    pub const COURTLISTENER: &str = "https://www.courtlistener.com/api/rest/v3";
    pub const LEGISCAN: &str = "https://api.legiscan.com";

    pub const BRIDGE: &str = "https://api.bridgedataoutput.com";
    pub const FIRST_AMERICAN: &str = "https://dna.firstam.com/api";
    pub const RENTCAST: &str = "https://api.rentcast.io/v1";
    pub const HOUSECANARY: &str = "https://api.housecanary.com/v2";

    pub const BUSINESS_DATA: &str = "https://api.business-data.gov";

    pub const DATA_GOV: &str = "https://api.data.gov";

    pub const CHECKR: &str = "https://api.checkr.com/v1";
    pub const IDENFY: &str = "https://ivs.idenfy.com/api/v2";

    pub const NHTSA_VPIC: &str = "https://vpic.nhtsa.dot.gov/api";
    pub const VINDATA: &str = "https://api.vindata.com";
    pub const IDSCAN: &str = "https://api.idscan.net";
}

/// Messages attached to mock payloads
pub mod message {
    /// Default note on every mock payload
    pub const MOCK: &str = "Mock implementation. Configure API key to use real data.";

    pub const VEHICLE_SEARCH: &str = "Mock implementation. Use decode_vin() for VIN lookups.";
}

/// HTTP status codes that trigger a retry
pub const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "Public Records API";

/// Service version reported by the health endpoint
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
