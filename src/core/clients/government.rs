//! Government data client (data.gov catalog and census data)

use super::{mock_detail, mock_search, payload};
use crate::core::category::Category;
use crate::core::client::{RecordClient, RecordError};
use crate::core::config::RequestConfig;
use crate::core::constants::{base_url, message};
use crate::core::credentials::CredentialSet;
use crate::core::http::{HttpSession, UpstreamError};
use crate::models::record::{Filters, Record, SearchQuery};
use async_trait::async_trait;
use serde_json::json;

const CATEGORY: Category = Category::Government;

/// Data categories offered by the catalog
const DATA_CATEGORIES: [&str; 10] = [
    "health",
    "education",
    "transportation",
    "environment",
    "public_safety",
    "economy",
    "demographics",
    "energy",
    "agriculture",
    "infrastructure",
];

pub struct GovernmentDataClient {
    session: HttpSession,
}

impl GovernmentDataClient {
    pub fn new(credentials: &CredentialSet, config: &RequestConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            session: HttpSession::new(
                base_url::DATA_GOV,
                credentials.data_gov_api_key.clone(),
                config,
            )?,
        })
    }

    /// Rows of a dataset
    pub fn get_dataset_data(&self, dataset_id: &str, filters: &Filters) -> Record {
        payload(
            CATEGORY,
            json!({
                "dataset_id": dataset_id,
                "filters": filters,
                "data": [],
                "message": message::MOCK,
            }),
        )
    }

    pub fn data_categories(&self) -> &'static [&'static str] {
        &DATA_CATEGORIES
    }

    /// Datasets published by `agency`
    pub fn search_by_agency(&self, agency: &str) -> Record {
        let mut filters = Filters::new();
        filters.insert("agency".to_string(), json!(agency));
        mock_search(CATEGORY, "", &filters)
    }

    /// U.S. Census data for a geographic level
    pub fn get_census_data(&self, geography: &str, variables: &[String], filters: &Filters) -> Record {
        payload(
            CATEGORY,
            json!({
                "source": "census",
                "geography": geography,
                "variables": variables,
                "filters": filters,
                "data": [],
                "message": message::MOCK,
            }),
        )
    }
}

#[async_trait]
impl RecordClient for GovernmentDataClient {
    fn category(&self) -> Category {
        CATEGORY
    }

    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError> {
        Ok(mock_search(CATEGORY, query.text(), query.filters()))
    }

    async fn get_record(&self, dataset_id: &str) -> Result<Record, RecordError> {
        Ok(mock_detail(CATEGORY, "dataset_id", dataset_id))
    }

    fn session(&self) -> &HttpSession {
        &self.session
    }
}
