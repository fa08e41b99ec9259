//! Fan-out and dispatch across category clients
//!
//! The [`Aggregator`] owns one client per category. It searches every
//! category at once with per-category isolation, and resolves category names
//! (short or canonical, any case) to a single client.

use crate::core::category::Category;
use crate::core::client::{RecordClient, RecordError};
use crate::core::clients::{
    BackgroundCheckClient, BusinessRegistrationClient, CourtRecordsClient, GovernmentDataClient,
    PropertyRecordsClient, VehicleRecordsClient,
};
use crate::core::config::RequestConfig;
use crate::core::credentials::CredentialSet;
use crate::models::record::{AggregateResult, CategoryMap, CategoryOutcome, Record, SearchQuery};
use futures::FutureExt;
use futures::future::join_all;
use serde::Serialize;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, warn};

/// Connectivity report for one category's upstream
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub category: Category,
    pub base_url: String,
    pub status: u16,
    pub authenticated: bool,
}

/// Owns every category client and dispatches requests to them by name
pub struct Aggregator {
    court: Arc<CourtRecordsClient>,
    property: Arc<PropertyRecordsClient>,
    business: Arc<BusinessRegistrationClient>,
    government: Arc<GovernmentDataClient>,
    background: Arc<BackgroundCheckClient>,
    vehicle: Arc<VehicleRecordsClient>,
    /// Dispatch table, indexed by [`Category::index`]
    clients: Vec<Arc<dyn RecordClient>>,
    credentials: CredentialSet,
}

impl Aggregator {
    /// Build every category client from the credential set
    pub fn new(credentials: CredentialSet, config: &RequestConfig) -> Result<Self, RecordError> {
        let court = Arc::new(CourtRecordsClient::new(&credentials, config)?);
        let property = Arc::new(PropertyRecordsClient::new(&credentials, config)?);
        let business = Arc::new(BusinessRegistrationClient::new(&credentials, config)?);
        let government = Arc::new(GovernmentDataClient::new(&credentials, config)?);
        let background = Arc::new(BackgroundCheckClient::new(&credentials, config)?);
        let vehicle = Arc::new(VehicleRecordsClient::new(&credentials, config)?);

        let clients: Vec<Arc<dyn RecordClient>> = vec![
            court.clone(),
            property.clone(),
            business.clone(),
            government.clone(),
            background.clone(),
            vehicle.clone(),
        ];

        Ok(Self {
            court,
            property,
            business,
            government,
            background,
            vehicle,
            clients,
            credentials,
        })
    }

    pub fn court(&self) -> &CourtRecordsClient {
        &self.court
    }

    pub fn property(&self) -> &PropertyRecordsClient {
        &self.property
    }

    pub fn business(&self) -> &BusinessRegistrationClient {
        &self.business
    }

    pub fn government(&self) -> &GovernmentDataClient {
        &self.government
    }

    pub fn background(&self) -> &BackgroundCheckClient {
        &self.background
    }

    pub fn vehicle(&self) -> &VehicleRecordsClient {
        &self.vehicle
    }

    /// Resolve a category name to its client
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategory` if the name matches no category alias.
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn RecordClient>, RecordError> {
        let category = Category::from_name(name).ok_or_else(|| RecordError::InvalidCategory {
            name: name.to_string(),
        })?;
        Ok(&self.clients[category.index()])
    }

    /// Search every category concurrently
    ///
    /// An error or panic in one client becomes an `{error}` entry for that
    /// category only. Entries follow the fixed category order.
    pub async fn search_all(&self, query: &SearchQuery) -> AggregateResult {
        debug!("Searching all categories");

        let searches = self
            .clients
            .iter()
            .map(|client| AssertUnwindSafe(client.search(query)).catch_unwind());
        let outcomes = join_all(searches).await;

        let results: AggregateResult = self
            .clients
            .iter()
            .zip(outcomes)
            .map(|(client, outcome)| {
                let category = client.category();
                let outcome = match outcome {
                    Ok(Ok(record)) => CategoryOutcome::Found(record),
                    Ok(Err(e)) => {
                        warn!("Search failed for {}: {}", category, e);
                        CategoryOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                    Err(panic) => {
                        let error = panic_message(panic);
                        warn!("Search panicked for {}: {}", category, error);
                        CategoryOutcome::Failed { error }
                    }
                };
                (category, outcome)
            })
            .collect();

        let failed = results.iter().filter(|(_, o)| o.is_error()).count();
        debug!(
            "Search complete: {} of {} categories succeeded",
            results.len() - failed,
            results.len()
        );
        results
    }

    /// Search one category by name
    pub async fn search_by_category(
        &self,
        name: &str,
        query: &SearchQuery,
    ) -> Result<Record, RecordError> {
        let client = self.resolve(name)?;
        debug!("Searching {}", client.category());
        client.search(query).await
    }

    /// Fetch one record by category name and identifier
    pub async fn get_record_by_category(&self, name: &str, id: &str) -> Result<Record, RecordError> {
        let client = self.resolve(name)?;
        debug!("Fetching {} record {}", client.category(), id);
        client.get_record(id).await
    }

    /// Categories in fan-out order
    pub fn list_categories(&self) -> Vec<Category> {
        self.clients.iter().map(|client| client.category()).collect()
    }

    /// Whether each category has at least one sub-provider secret
    pub fn credential_status(&self) -> CategoryMap<bool> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.credentials.is_configured(category)))
            .collect()
    }

    /// Check that a category's upstream is reachable
    pub async fn probe(&self, name: &str) -> Result<ProbeReport, RecordError> {
        let client = self.resolve(name)?;
        let session = client.session();
        let status = session.probe().await?;

        Ok(ProbeReport {
            category: client.category(),
            base_url: session.base_url().to_string(),
            status: status.as_u16(),
            authenticated: session.has_api_key(),
        })
    }

    /// Replace the dispatch entry for `client.category()`
    #[cfg(test)]
    pub fn with_client(mut self, client: Arc<dyn RecordClient>) -> Self {
        let index = client.category().index();
        self.clients[index] = client;
        self
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "client panicked".to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::http::{HttpSession, UpstreamError};
    use crate::models::record::Filters;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Client that always fails, counting calls
    pub(crate) struct FailingClient {
        category: Category,
        session: HttpSession,
        pub calls: AtomicUsize,
        panics: bool,
    }

    impl FailingClient {
        pub(crate) fn new(category: Category) -> Self {
            Self {
                category,
                session: HttpSession::new("http://127.0.0.1", None, &RequestConfig::default())
                    .unwrap(),
                calls: AtomicUsize::new(0),
                panics: false,
            }
        }

        pub(crate) fn panicking(category: Category) -> Self {
            Self {
                panics: true,
                ..Self::new(category)
            }
        }

        fn fail(&self) -> Result<Record, RecordError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.panics {
                panic!("{} exploded", self.category);
            }
            Err(RecordError::Upstream(UpstreamError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            }))
        }
    }

    #[async_trait]
    impl RecordClient for FailingClient {
        fn category(&self) -> Category {
            self.category
        }

        async fn search(&self, _query: &SearchQuery) -> Result<Record, RecordError> {
            self.fail()
        }

        async fn get_record(&self, _id: &str) -> Result<Record, RecordError> {
            self.fail()
        }

        fn session(&self) -> &HttpSession {
            &self.session
        }
    }

    fn aggregator() -> Aggregator {
        Aggregator::new(CredentialSet::default(), &RequestConfig::default()).unwrap()
    }

    fn query(text: &str) -> SearchQuery {
        SearchQuery::new(text, Filters::new()).unwrap()
    }

    #[tokio::test]
    async fn test_search_all_returns_every_category_in_order() {
        let results = aggregator().search_all(&query("John Doe")).await;

        let keys: Vec<_> = results.keys().map(|c| c.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "court_records",
                "property_records",
                "business_registration",
                "government_data",
                "background_check",
                "vehicle_records",
            ]
        );
        for (category, outcome) in results.iter() {
            let record = outcome.record().expect("mock search succeeds");
            assert_eq!(record["api_type"], json!(category.as_str()));
            assert_eq!(record["query"], json!("John Doe"));
        }
    }

    #[tokio::test]
    async fn test_one_failing_client_is_isolated() {
        let baseline = aggregator().search_all(&query("John Doe")).await;
        let results = aggregator()
            .with_client(Arc::new(FailingClient::new(Category::Business)))
            .search_all(&query("John Doe"))
            .await;

        assert_eq!(results.len(), 6);
        for category in Category::ALL {
            let outcome = results.get(category).unwrap();
            if category == Category::Business {
                assert!(outcome.is_error());
            } else {
                assert_eq!(outcome, baseline.get(category).unwrap());
            }
        }

        let rendered = serde_json::to_value(&results).unwrap();
        assert!(
            rendered["business_registration"]["error"]
                .as_str()
                .unwrap()
                .contains("503")
        );
    }

    #[tokio::test]
    async fn test_panicking_client_is_isolated() {
        let results = aggregator()
            .with_client(Arc::new(FailingClient::panicking(Category::Court)))
            .search_all(&query("John Doe"))
            .await;

        let court = results.get(Category::Court).unwrap();
        assert_eq!(
            court,
            &CategoryOutcome::Failed {
                error: "court_records exploded".to_string()
            }
        );
        assert!(!results.get(Category::Vehicle).unwrap().is_error());
    }

    #[tokio::test]
    async fn test_all_clients_failing_still_yields_six_entries() {
        let mut aggregator = aggregator();
        for category in Category::ALL {
            aggregator = aggregator.with_client(Arc::new(FailingClient::new(category)));
        }

        let results = aggregator.search_all(&query("John Doe")).await;
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|(_, outcome)| outcome.is_error()));
    }

    #[tokio::test]
    async fn test_aliases_resolve_to_same_client() {
        let aggregator = aggregator();
        let q = query("1HGBH41JXMN109186");
        for category in Category::ALL {
            let by_short = aggregator
                .search_by_category(category.short_name(), &q)
                .await
                .unwrap();
            let by_canonical = aggregator
                .search_by_category(category.as_str(), &q)
                .await
                .unwrap();
            let by_upper = aggregator
                .search_by_category(&category.short_name().to_uppercase(), &q)
                .await
                .unwrap();
            assert_eq!(by_short, by_canonical);
            assert_eq!(by_short, by_upper);
            assert_eq!(by_short["api_type"], json!(category.as_str()));

            let record_short = aggregator
                .get_record_by_category(category.short_name(), "id-1")
                .await
                .unwrap();
            let record_canonical = aggregator
                .get_record_by_category(category.as_str(), "id-1")
                .await
                .unwrap();
            assert_eq!(record_short, record_canonical);
        }
    }

    #[tokio::test]
    async fn test_vehicle_alias_example() {
        let aggregator = aggregator();
        let q = query("1HGBH41JXMN109186");
        assert_eq!(
            aggregator.search_by_category("vehicle", &q).await.unwrap(),
            aggregator
                .search_by_category("vehicle_records", &q)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_invalid_category_invokes_no_client() {
        let failing: Vec<Arc<FailingClient>> = Category::ALL
            .into_iter()
            .map(|c| Arc::new(FailingClient::new(c)))
            .collect();
        let mut aggregator = aggregator();
        for client in &failing {
            aggregator = aggregator.with_client(client.clone());
        }

        let err = aggregator
            .search_by_category("unknown_type", &query("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RecordError::InvalidCategory { ref name } if name == "unknown_type"));
        let message = err.to_string();
        for category in Category::ALL {
            assert!(message.contains(category.short_name()));
        }

        let err = aggregator
            .get_record_by_category("records", "1")
            .await
            .unwrap_err();
        assert!(matches!(err, RecordError::InvalidCategory { .. }));

        assert!(failing.iter().all(|c| c.calls.load(Ordering::SeqCst) == 0));
    }

    #[tokio::test]
    async fn test_single_category_failure_propagates() {
        let aggregator =
            aggregator().with_client(Arc::new(FailingClient::new(Category::Government)));
        let err = aggregator
            .search_by_category("government", &query("census"))
            .await
            .unwrap_err();
        assert!(matches!(err, RecordError::Upstream(_)));
    }

    #[test]
    fn test_list_categories() {
        assert_eq!(aggregator().list_categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_credential_status_is_or_across_sub_providers() {
        let credentials = CredentialSet {
            pacer_username: Some("user".to_string()),
            idscan_api_key: Some("ids".to_string()),
            business_api_key: Some(String::new()),
            ..Default::default()
        };
        let aggregator = Aggregator::new(credentials, &RequestConfig::default()).unwrap();
        let status = aggregator.credential_status();

        assert_eq!(status.get(Category::Court), Some(&true));
        assert_eq!(status.get(Category::Vehicle), Some(&true));
        assert_eq!(status.get(Category::Business), Some(&false));
        assert_eq!(status.get(Category::Property), Some(&false));
        assert_eq!(status.len(), 6);
    }

    #[tokio::test]
    async fn test_probe_rejects_unknown_category() {
        let err = aggregator().probe("nope").await.unwrap_err();
        assert!(matches!(err, RecordError::InvalidCategory { .. }));
    }

    #[test]
    fn test_typed_accessors_share_dispatch_clients() {
        let aggregator = aggregator();
        let record = aggregator.vehicle().decode_vin("VIN1");
        assert_eq!(record["api_type"], json!("vehicle_records"));
        assert_eq!(aggregator.court().category(), Category::Court);
        assert_eq!(aggregator.property().category(), Category::Property);
        assert_eq!(aggregator.business().category(), Category::Business);
        assert_eq!(aggregator.government().category(), Category::Government);
        assert_eq!(aggregator.background().category(), Category::Background);
    }
}
