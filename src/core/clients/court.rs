//! Court records client
//!
//! UniCourt is the primary source. CourtListener (RECAP archive), LegiScan
//! (legislation tracking) and PACER are sub-providers with their own
//! credentials.

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

const CATEGORY: Category = Category::Court;

pub struct CourtRecordsClient {
    session: HttpSession,
    courtlistener_token: Option<String>,
    legiscan_key: Option<String>,
}

impl CourtRecordsClient {
    pub fn new(credentials: &CredentialSet, config: &RequestConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            session: HttpSession::new(
                base_url::UNICOURT,
                credentials.unicourt_api_key.clone(),
                config,
            )?,
            courtlistener_token: credentials.courtlistener_token.clone(),
            legiscan_key: credentials.legiscan_api_key.clone(),
        })
    }

    /// Documents filed in a case
    pub fn get_case_documents(&self, case_id: &str) -> Record {
        payload(
            CATEGORY,
            json!({
                "case_id": case_id,
                "documents": [],
                "message": message::MOCK,
            }),
        )
    }

    /// Cases naming `party_name` as a party
    pub fn search_by_party(&self, party_name: &str, filters: &Filters) -> Record {
        mock_search(
            CATEGORY,
            party_name,
            &with_filter(filters, "search_type", "party"),
        )
    }

    /// Search the CourtListener RECAP archive
    pub fn search_courtlistener(&self, query: &str, filters: &Filters) -> Record {
        if !is_set(&self.courtlistener_token) {
            return missing_credential(
                CATEGORY,
                "courtlistener",
                "CourtListener API token required. Get free token at https://www.courtlistener.com/help/api/",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "courtlistener",
                "query": query,
                "filters": filters,
                "base_url": base_url::COURTLISTENER,
                "endpoints": {
                    "dockets": "/dockets/",
                    "opinions": "/opinions/",
                    "parties": "/parties/",
                    "attorneys": "/attorneys/",
                },
                "message": "Mock implementation. Configure token to use real CourtListener API.",
            }),
        )
    }

    /// Search state and federal legislation through LegiScan
    ///
    /// `state` is a two-letter abbreviation, or `US` for Congress.
    pub fn search_legislation(
        &self,
        query: &str,
        state: Option<&str>,
        filters: &Filters,
    ) -> Record {
        if !is_set(&self.legiscan_key) {
            return missing_credential(
                CATEGORY,
                "legiscan",
                "LegiScan API key required. Sign up at https://legiscan.com/legiscan",
            );
        }

        payload(
            CATEGORY,
            json!({
                "source": "legiscan",
                "query": query,
                "state": state,
                "filters": filters,
                "base_url": base_url::LEGISCAN,
                "data_available": [
                    "bill_text",
                    "bill_status",
                    "sponsors",
                    "votes",
                    "amendments",
                    "committee_info",
                ],
                "message": "Mock implementation. Configure API key to use real LegiScan API.",
            }),
        )
    }
}

#[async_trait]
impl RecordClient for CourtRecordsClient {
    fn category(&self) -> Category {
        CATEGORY
    }

    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError> {
        Ok(mock_search(CATEGORY, query.text(), query.filters()))
    }

    async fn get_record(&self, case_id: &str) -> Result<Record, RecordError> {
        Ok(mock_detail(CATEGORY, "case_id", case_id))
    }

    fn session(&self) -> &HttpSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(credentials: CredentialSet) -> CourtRecordsClient {
        CourtRecordsClient::new(&credentials, &RequestConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_search_payload() {
        let client = client(CredentialSet::default());
        let query = SearchQuery::new("Smith v. Jones", Filters::new()).unwrap();
        let record = client.search(&query).await.unwrap();
        assert_eq!(record["api_type"], json!("court_records"));
        assert_eq!(record["query"], json!("Smith v. Jones"));
        assert_eq!(record["total"], json!(0));
        assert_eq!(record["message"], json!(message::MOCK));
    }

    #[tokio::test]
    async fn test_get_record_uses_case_id() {
        let record = client(CredentialSet::default())
            .get_record("1:21-cv-00001")
            .await
            .unwrap();
        assert_eq!(record["case_id"], json!("1:21-cv-00001"));
        assert_eq!(record["details"], json!({}));
    }

    #[test]
    fn test_search_by_party_sets_search_type() {
        let record = client(CredentialSet::default()).search_by_party("Acme Corp", &Filters::new());
        assert_eq!(record["query"], json!("Acme Corp"));
        assert_eq!(record["filters"]["search_type"], json!("party"));
    }

    #[test]
    fn test_courtlistener_requires_token() {
        let record = client(CredentialSet::default()).search_courtlistener("patent", &Filters::new());
        assert_eq!(record["source"], json!("courtlistener"));
        assert!(record["message"].as_str().unwrap().contains("token required"));
        assert!(record.get("endpoints").is_none());
    }

    #[test]
    fn test_courtlistener_with_token() {
        let record = client(CredentialSet {
            courtlistener_token: Some("cl-token".to_string()),
            ..Default::default()
        })
        .search_courtlistener("patent", &Filters::new());
        assert_eq!(record["base_url"], json!(base_url::COURTLISTENER));
        assert_eq!(record["endpoints"]["dockets"], json!("/dockets/"));
    }

    #[test]
    fn test_legislation_with_key() {
        let record = client(CredentialSet {
            legiscan_api_key: Some("ls-key".to_string()),
            ..Default::default()
        })
        .search_legislation("privacy", Some("CA"), &Filters::new());
        assert_eq!(record["state"], json!("CA"));
        assert_eq!(record["source"], json!("legiscan"));
    }

    #[test]
    fn test_legislation_without_key() {
        let record =
            client(CredentialSet::default()).search_legislation("privacy", None, &Filters::new());
        assert!(record["message"].as_str().unwrap().contains("LegiScan API key required"));
    }
}
