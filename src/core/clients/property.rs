//! Property records client
//!
//! Bridge public records is the primary source; RentCast, First American and
//! HouseCanary are keyed sub-providers.

use super::{missing_credential, mock_detail, mock_search, payload, with_filter};
use crate::core::category::Category;
use crate::core::client::{RecordClient, RecordError};
use crate::core::config::RequestConfig;
use crate::core::constants::{base_url, message};
use crate::core::credentials::{CredentialSet, is_set};
use crate::core::http::{HttpSession, UpstreamError};
use crate::models::record::{Filters, Record, SearchQuery};
use async_trait::async_trait;
use serde_json::json;

const CATEGORY: Category = Category::Property;

/// Default First American report type
pub const DEFAULT_REPORT_TYPE: &str = "TotalView";

pub struct PropertyRecordsClient {
    session: HttpSession,
    first_american_key: Option<String>,
    rentcast_key: Option<String>,
    housecanary_key: Option<String>,
}

impl PropertyRecordsClient {
    pub fn new(credentials: &CredentialSet, config: &RequestConfig) -> Result<Self, UpstreamError> {
        let primary_key = credentials
            .bridge_api_key
            .clone()
            .or_else(|| credentials.propmix_api_key.clone());

        Ok(Self {
            session: HttpSession::new(base_url::BRIDGE, primary_key, config)?,
            first_american_key: credentials.first_american_api_key.clone(),
            rentcast_key: credentials.rentcast_api_key.clone(),
            housecanary_key: credentials.housecanary_api_key.clone(),
        })
    }

    /// Search by street address
    pub fn get_by_address(&self, address: &str, city: &str, state: &str) -> Record {
        let full_address = format!("{}, {}, {}", address, city, state);
        mock_search(
            CATEGORY,
            &full_address,
            &with_filter(&Filters::new(), "search_type", "address"),
        )
    }

    pub fn get_ownership_history(&self, property_id: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "property_id": property_id,
                "ownership_history": [],
                "message": message::MOCK,
            }),
        )
    }

    pub fn get_tax_history(&self, property_id: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "property_id": property_id,
                "tax_history": [],
                "message": message::MOCK,
            }),
        )
    }

    /// Value and rent estimate from RentCast
    pub fn get_rentcast_valuation(&self, address: &str, filters: &Filters) -> Record {
        if !is_set(&self.rentcast_key) {
            return missing_credential(
                CATEGORY,
                "rentcast",
                "RentCast API key required. Get 50 free calls at https://www.rentcast.io/api",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "rentcast",
                "address": address,
                "filters": filters,
                "base_url": base_url::RENTCAST,
                "endpoints": {
                    "property": "/properties",
                    "valuation": "/avm/value",
                    "rent_estimate": "/avm/rent",
                    "listings": "/listings/sale",
                },
                "data_available": [
                    "property_value_estimate",
                    "rent_estimate",
                    "property_details",
                    "comparable_properties",
                    "market_statistics",
                ],
                "message": "Mock implementation. Configure API key to use real RentCast API.",
            }),
        )
    }

    /// Property report from First American
    ///
    /// Report types: `TotalView`, `LegalVesting`, `TitleChain`, `PropertyHistory`.
    pub fn get_first_american_report(&self, address: &str, report_type: &str) -> Record {
        if !is_set(&self.first_american_key) {
            return missing_credential(
                CATEGORY,
                "first_american",
                "First American API key required. Contact First American for access.",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "first_american",
                "address": address,
                "report_type": report_type,
                "base_url": base_url::FIRST_AMERICAN,
                "available_reports": [
                    "TotalView Report",
                    "Legal & Vesting Report",
                    "Title Chain & Lien Report",
                    "Property History Report",
                ],
                "data_available": [
                    "ownership_info",
                    "property_characteristics",
                    "tax_assessment",
                    "foreclosure_activity",
                    "liens_encumbrances",
                    "HOA_information",
                    "recorded_documents",
                    "assessor_maps",
                ],
                "message": "Mock implementation. Configure API key to use real First American API.",
            }),
        )
    }

    /// Analytics and forecasts from HouseCanary
    pub fn get_housecanary_analytics(&self, address: &str, filters: &Filters) -> Record {
        if !is_set(&self.housecanary_key) {
            return missing_credential(
                CATEGORY,
                "housecanary",
                "HouseCanary API key required. Contact HouseCanary for access.",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "housecanary",
                "address": address,
                "filters": filters,
                "base_url": base_url::HOUSECANARY,
                "data_categories": [
                    "property_characteristics",
                    "market_valuations",
                    "forecasting_models",
                    "neighborhood_analytics",
                    "investment_scoring",
                    "renovation_estimates",
                    "risk_assessment",
                ],
                "geographic_levels": [
                    "individual_property",
                    "census_tract",
                    "zip_code",
                    "MSA",
                    "state",
                ],
                "message": "Mock implementation. Configure API key to use real HouseCanary API.",
            }),
        )
    }
}

#[async_trait]
impl RecordClient for PropertyRecordsClient {
    fn category(&self) -> Category {
        CATEGORY
    }

    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError> {
        Ok(mock_search(CATEGORY, query.text(), query.filters()))
    }

    async fn get_record(&self, property_id: &str) -> Result<Record, RecordError> {
        Ok(mock_detail(CATEGORY, "property_id", property_id))
    }

    fn session(&self) -> &HttpSession {
        &self.session
    }
}
