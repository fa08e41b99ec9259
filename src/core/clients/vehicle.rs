//! Vehicle and DMV records client
//!
//! NHTSA vPIC decodes VINs for free; VINData and IDScan.net need keys.
//! NMVTIS access normally runs through state agencies.

use super::{missing_credential, payload};
use crate::core::category::Category;
use crate::core::client::{RecordClient, RecordError};
use crate::core::config::RequestConfig;
use crate::core::constants::{base_url, message};
use crate::core::credentials::{CredentialSet, is_set};
use crate::core::http::{HttpSession, UpstreamError};
use crate::models::record::{Record, SearchQuery};
use async_trait::async_trait;
use serde_json::json;

const CATEGORY: Category = Category::Vehicle;

pub struct VehicleRecordsClient {
    session: HttpSession,
    vindata_key: Option<String>,
    idscan_key: Option<String>,
}

impl VehicleRecordsClient {
    pub fn new(credentials: &CredentialSet, config: &RequestConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            session: HttpSession::new(
                base_url::NHTSA_VPIC,
                credentials.vehicle_api_key.clone(),
                config,
            )?,
            vindata_key: credentials.vindata_api_key.clone(),
            idscan_key: credentials.idscan_api_key.clone(),
        })
    }

    /// Decode a VIN through NHTSA vPIC
    pub fn decode_vin(&self, vin: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "source": "nhtsa_vpic",
                "vin": vin,
                "base_url": base_url::NHTSA_VPIC,
                "endpoint": format!("/vehicles/DecodeVin/{}?format=json", vin),
                "data_available": [
                    "make",
                    "model",
                    "model_year",
                    "body_class",
                    "engine_info",
                    "transmission",
                    "manufacturer",
                    "plant_info",
                    "vehicle_type",
                ],
                "access": "Free public API",
                "message": "Mock implementation. NHTSA vPIC provides free VIN decoding.",
            }),
        )
    }

    /// Title, accident and inspection history from VINData
    pub fn get_vehicle_history(&self, vin: &str) -> Record {
        if !is_set(&self.vindata_key) {
            return missing_credential(
                CATEGORY,
                "vindata",
                "VINData API key required. Visit https://www.vindata.com for access.",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "vindata",
                "vin": vin,
                "base_url": base_url::VINDATA,
                "database_size": "1B+ records",
                "data_available": [
                    "dmv_title_info",
                    "salvage_status",
                    "junk_records",
                    "insurance_total_loss",
                    "lien_information",
                    "stolen_recovered",
                    "accident_history",
                    "inspection_reports",
                    "mechanical_condition",
                    "specifications",
                ],
                "coverage": [
                    "automobiles",
                    "motorcycles",
                    "specialty_vehicles",
                ],
                "message": "Mock implementation. Configure API key to use real VINData API.",
            }),
        )
    }

    /// Confirm a driver's license against DMV records (boolean flags only, no PII)
    pub fn verify_dmv_record(
        &self,
        first_name: &str,
        last_name: &str,
        license_number: &str,
        state: &str,
    ) -> Record {
        if !is_set(&self.idscan_key) {
            return missing_credential(
                CATEGORY,
                "idscan_dmv",
                "IDScan.net API key required. Visit https://idscan.net for access.",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "idscan_dmv",
                "first_name": first_name,
                "last_name": last_name,
                "license_number": license_number,
                "state": state,
                "base_url": base_url::IDSCAN,
                "coverage": "40+ U.S. states",
                "verification_types": [
                    "id_issuance_confirmed",
                    "address_verified",
                    "expiration_confirmed",
                    "license_authentic",
                ],
                "response_format": "Boolean flags (does not return PII)",
                "message": "Mock implementation. Configure API key to use real IDScan.net API.",
            }),
        )
    }

    /// Title brand check against NMVTIS
    pub fn check_nmvtis(&self, vin: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "source": "nmvtis",
                "vin": vin,
                "system": "National Motor Vehicle Title Information System",
                "managed_by": "AAMVA",
                "features": [
                    "instant_title_verification",
                    "interstate_title_info",
                    "anti_theft_protection",
                    "brand_verification",
                ],
                "access_methods": [
                    "state_web_single_vin",
                    "batch_inquiry",
                ],
                "message": "Mock implementation. NMVTIS access typically through state agencies.",
            }),
        )
    }
}

#[async_trait]
impl RecordClient for VehicleRecordsClient {
    fn category(&self) -> Category {
        CATEGORY
    }

    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError> {
        Ok(payload(
            CATEGORY,
            json!({
                "query": query.text(),
                "filters": query.filters(),
                "message": message::VEHICLE_SEARCH,
            }),
        ))
    }

    async fn get_record(&self, vin: &str) -> Result<Record, RecordError> {
        Ok(self.decode_vin(vin))
    }

    fn session(&self) -> &HttpSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Filters;

    const VIN: &str = "1HGBH41JXMN109186";

    fn client(credentials: CredentialSet) -> VehicleRecordsClient {
        VehicleRecordsClient::new(&credentials, &RequestConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_get_record_decodes_vin() {
        let client = client(CredentialSet::default());
        let record = client.get_record(VIN).await.unwrap();
        assert_eq!(record, client.decode_vin(VIN));
        assert_eq!(
            record["endpoint"],
            json!("/vehicles/DecodeVin/1HGBH41JXMN109186?format=json")
        );
    }

    #[tokio::test]
    async fn test_search_points_at_vin_decoding() {
        let query = SearchQuery::new(VIN, Filters::new()).unwrap();
        let record = client(CredentialSet::default()).search(&query).await.unwrap();
        assert_eq!(record["message"], json!(message::VEHICLE_SEARCH));
        assert!(record.get("results").is_none());
    }

    #[test]
    fn test_history_requires_vindata_key() {
        let locked = client(CredentialSet::default()).get_vehicle_history(VIN);
        assert_eq!(locked["source"], json!("vindata"));
        assert!(locked.get("vin").is_none());

        let unlocked = client(CredentialSet {
            vindata_api_key: Some("vd".to_string()),
            ..Default::default()
        })
        .get_vehicle_history(VIN);
        assert_eq!(unlocked["vin"], json!(VIN));
    }

    #[test]
    fn test_dmv_requires_idscan_key() {
        let locked = client(CredentialSet::default()).verify_dmv_record("Jane", "Roe", "D123", "CA");
        assert!(locked["message"].as_str().unwrap().contains("IDScan.net"));

        let unlocked = client(CredentialSet {
            idscan_api_key: Some("ids".to_string()),
            ..Default::default()
        })
        .verify_dmv_record("Jane", "Roe", "D123", "CA");
        assert_eq!(unlocked["license_number"], json!("D123"));
    }

    #[test]
    fn test_nmvtis_needs_no_key() {
        let record = client(CredentialSet::default()).check_nmvtis(VIN);
        assert_eq!(record["managed_by"], json!("AAMVA"));
    }
}
