//! Business registration client (Secretary of State style records)

use super::{mock_detail, mock_search, payload};
use crate::core::category::Category;
use crate::core::client::{RecordClient, RecordError};
use crate::core::config::RequestConfig;
use crate::core::constants::{base_url, message};
use crate::core::credentials::CredentialSet;
use crate::core::http::{HttpSession, UpstreamError};
use crate::models::record::{Record, SearchQuery};
use async_trait::async_trait;
use serde_json::json;

const CATEGORY: Category = Category::Business;

pub struct BusinessRegistrationClient {
    session: HttpSession,
}

impl BusinessRegistrationClient {
    pub fn new(credentials: &CredentialSet, config: &RequestConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            session: HttpSession::new(
                base_url::BUSINESS_DATA,
                credentials.business_api_key.clone(),
                config,
            )?,
        })
    }

    /// Lookup by Employer Identification Number
    pub fn get_by_ein(&self, ein: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "ein": ein,
                "details": {},
                "message": message::MOCK,
            }),
        )
    }

    /// Annual reports, amendments and other filings
    pub fn get_filings(&self, business_id: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "business_id": business_id,
                "filings": [],
                "message": message::MOCK,
            }),
        )
    }

    pub fn get_licenses(&self, business_id: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "business_id": business_id,
                "licenses": [],
                "message": message::MOCK,
            }),
        )
    }

    /// Company profile derived from a web domain
    pub fn enrich_company(&self, domain: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "domain": domain.trim().to_lowercase(),
                "company": {},
                "data_available": [
                    "legal_name",
                    "industry",
                    "employee_count",
                    "headquarters",
                    "founded_year",
                    "registrations",
                ],
                "message": message::MOCK,
            }),
        )
    }
}

#[async_trait]
impl RecordClient for BusinessRegistrationClient {
    fn category(&self) -> Category {
        CATEGORY
    }

    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError> {
        Ok(mock_search(CATEGORY, query.text(), query.filters()))
    }

    async fn get_record(&self, business_id: &str) -> Result<Record, RecordError> {
        Ok(mock_detail(CATEGORY, "business_id", business_id))
    }

    fn session(&self) -> &HttpSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Filters;

    fn client() -> BusinessRegistrationClient {
        BusinessRegistrationClient::new(&CredentialSet::default(), &RequestConfig::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_and_get_record() {
        let client = client();
        let query = SearchQuery::new("Acme LLC", Filters::new()).unwrap();
        let found = client.search(&query).await.unwrap();
        assert_eq!(found["api_type"], json!("business_registration"));
        assert_eq!(found["results"], json!([]));

        let record = client.get_record("C1234567").await.unwrap();
        assert_eq!(record["business_id"], json!("C1234567"));
    }

    #[test]
    fn test_lookups() {
        let client = client();
        assert_eq!(client.get_by_ein("12-3456789")["ein"], json!("12-3456789"));
        assert_eq!(client.get_filings("b1")["filings"], json!([]));
        assert_eq!(client.get_licenses("b1")["licenses"], json!([]));
    }

    #[test]
    fn test_enrich_normalizes_domain() {
        let record = client().enrich_company(" Example.COM ");
        assert_eq!(record["domain"], json!("example.com"));
    }
}
