//! Background check client
//!
//! Checkr handles employment screening; iDenfy covers U.S. criminal records.

use super::{missing_credential, mock_detail, payload};
use crate::core::category::Category;
use crate::core::client::{RecordClient, RecordError};
use crate::core::config::RequestConfig;
use crate::core::constants::{base_url, message};
use crate::core::credentials::{CredentialSet, is_set};
use crate::core::http::{HttpSession, UpstreamError};
use crate::models::record::{Filters, Record, SearchQuery};
use async_trait::async_trait;
use serde_json::json;

const CATEGORY: Category = Category::Background;

/// Default Checkr screening package
pub const DEFAULT_PACKAGE: &str = "basic";

pub struct BackgroundCheckClient {
    session: HttpSession,
    checkr_key: Option<String>,
    idenfy_key: Option<String>,
}

impl BackgroundCheckClient {
    pub fn new(credentials: &CredentialSet, config: &RequestConfig) -> Result<Self, UpstreamError> {
        let primary_key = credentials
            .checkr_api_key
            .clone()
            .or_else(|| credentials.background_api_key.clone());

        Ok(Self {
            session: HttpSession::new(base_url::CHECKR, primary_key, config)?,
            checkr_key: credentials.checkr_api_key.clone(),
            idenfy_key: credentials.idenfy_api_key.clone(),
        })
    }

    /// Start a Checkr screening for a candidate
    pub fn create_checkr_screening(
        &self,
        candidate_email: &str,
        package: &str,
        candidate: &Filters,
    ) -> Record {
        if !is_set(&self.checkr_key) {
            return missing_credential(
                CATEGORY,
                "checkr",
                "Checkr API key required. Visit https://checkr.com for access.",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "checkr",
                "candidate_email": candidate_email,
                "package": package,
                "candidate": candidate,
                "base_url": base_url::CHECKR,
                "available_screenings": [
                    "criminal_background",
                    "continuous_monitoring",
                    "motor_vehicle_records",
                    "employment_verification",
                    "education_verification",
                    "international_checks",
                    "sex_offender_registry",
                ],
                "features": [
                    "branded_candidate_portal",
                    "webhook_notifications",
                    "customizable_packages",
                    "compliance_ready",
                ],
                "message": "Mock implementation. Configure API key to use real Checkr API.",
            }),
        )
    }

    /// U.S. criminal record search through iDenfy
    ///
    /// `dob` is `YYYY-MM-DD`; `location` an address or state.
    pub fn search_criminal_records(
        &self,
        name: &str,
        dob: Option<&str>,
        location: Option<&str>,
    ) -> Record {
        if !is_set(&self.idenfy_key) {
            return missing_credential(
                CATEGORY,
                "idenfy",
                "iDenfy API key required. Visit https://www.idenfy.com for access.",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "idenfy",
                "name": name,
                "dob": dob,
                "location": location,
                "base_url": base_url::IDENFY,
                "coverage": "All U.S. states and jurisdictions",
                "includes": [
                    "court_records",
                    "arrest_warrants",
                    "blacklist_databases",
                    "watchlists",
                    "adverse_media",
                ],
                "response_time": "Seconds",
                "message": "Mock implementation. Configure API key to use real iDenfy API.",
            }),
        )
    }

    pub fn get_continuous_monitoring(&self, candidate_id: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "candidate_id": candidate_id,
                "monitoring_types": [
                    "continuous_criminal_monitoring",
                    "continuous_mvr",
                ],
                "message": message::MOCK,
            }),
        )
    }
}

#[async_trait]
impl RecordClient for BackgroundCheckClient {
    fn category(&self) -> Category {
        CATEGORY
    }

    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError> {
        Ok(payload(
            CATEGORY,
            json!({
                "query": query.text(),
                "filters": query.filters(),
                "available_checks": [
                    "criminal_records",
                    "employment_verification",
                    "education_verification",
                    "motor_vehicle_records",
                    "sex_offender_registry",
                    "global_watchlist",
                ],
                "message": message::MOCK,
            }),
        ))
    }

    async fn get_record(&self, record_id: &str) -> Result<Record, RecordError> {
        Ok(mock_detail(CATEGORY, "record_id", record_id))
    }

    fn session(&self) -> &HttpSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(credentials: CredentialSet) -> BackgroundCheckClient {
        BackgroundCheckClient::new(&credentials, &RequestConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_search_lists_available_checks() {
        let query = SearchQuery::new("Jane Roe", Filters::new()).unwrap();
        let record = client(CredentialSet::default()).search(&query).await.unwrap();
        assert_eq!(record["api_type"], json!("background_check"));
        assert_eq!(record["available_checks"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_checkr_requires_key() {
        let record = client(CredentialSet::default()).create_checkr_screening(
            "jane@example.com",
            DEFAULT_PACKAGE,
            &Filters::new(),
        );
        assert_eq!(record["source"], json!("checkr"));
        assert!(record.get("candidate_email").is_none());
    }

    #[test]
    fn test_checkr_with_key() {
        let record = client(CredentialSet {
            checkr_api_key: Some("ck".to_string()),
            ..Default::default()
        })
        .create_checkr_screening("jane@example.com", "pro", &Filters::new());
        assert_eq!(record["candidate_email"], json!("jane@example.com"));
        assert_eq!(record["package"], json!("pro"));
    }

    #[test]
    fn test_background_key_alone_does_not_unlock_checkr() {
        let record = client(CredentialSet {
            background_api_key: Some("generic".to_string()),
            ..Default::default()
        })
        .create_checkr_screening("jane@example.com", DEFAULT_PACKAGE, &Filters::new());
        assert!(record["message"].as_str().unwrap().contains("Checkr API key required"));
    }

    #[test]
    fn test_criminal_records() {
        let locked = client(CredentialSet::default()).search_criminal_records("Jane Roe", None, None);
        assert!(locked["message"].as_str().unwrap().contains("iDenfy"));

        let unlocked = client(CredentialSet {
            idenfy_api_key: Some("id".to_string()),
            ..Default::default()
        })
        .search_criminal_records("Jane Roe", Some("1980-01-01"), None);
        assert_eq!(unlocked["dob"], json!("1980-01-01"));
        assert_eq!(unlocked["location"], json!(null));
    }

    #[test]
    fn test_continuous_monitoring() {
        let record = client(CredentialSet::default()).get_continuous_monitoring("cand-1");
        assert_eq!(record["candidate_id"], json!("cand-1"));
    }
}
