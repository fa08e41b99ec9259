//! Category-specific convenience endpoints
//!
//! Each route maps onto one category client operation and wraps the record
//! as `{success, result}`.

use crate::api::endpoints::{AppState, JsonBody};
use crate::core::client::{RecordClient, RecordError};
use crate::core::clients::background::DEFAULT_PACKAGE;
use crate::core::clients::property::DEFAULT_REPORT_TYPE;
use crate::models::record::{Filters, Record};
use crate::models::requests::{
    AddressLookupRequest, AddressRequest, CensusRequest, CriminalSearchRequest, DmvRequest,
    LegislationRequest, PartyRequest, QueryRequest, ReportRequest, ScreeningRequest,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::debug;

type LookupResult = Result<Json<Value>, RecordError>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/court/case/{case_id}", get(court_case))
        .route("/api/court/documents/{case_id}", get(court_documents))
        .route("/api/court/party", post(court_party))
        .route("/api/court/courtlistener", post(court_courtlistener))
        .route("/api/court/legislation", post(court_legislation))
        .route("/api/property/address", post(property_by_address))
        .route("/api/property/valuation", post(property_valuation))
        .route("/api/property/report", post(property_report))
        .route("/api/property/analytics", post(property_analytics))
        .route("/api/property/ownership/{property_id}", get(property_ownership))
        .route("/api/property/taxes/{property_id}", get(property_taxes))
        .route("/api/business/enrich/{domain}", get(business_enrich))
        .route("/api/business/ein/{ein}", get(business_by_ein))
        .route("/api/business/filings/{business_id}", get(business_filings))
        .route("/api/business/licenses/{business_id}", get(business_licenses))
        .route("/api/government/categories", get(government_categories))
        .route("/api/government/data/{dataset_id}", get(government_dataset))
        .route("/api/government/agency/{agency}", get(government_agency))
        .route("/api/government/census", post(government_census))
        .route("/api/background/checkr", post(background_checkr))
        .route("/api/background/criminal", post(background_criminal))
        .route("/api/background/monitoring/{candidate_id}", get(background_monitoring))
        .route("/api/vehicle/decode/{vin}", get(vehicle_decode))
        .route("/api/vehicle/history/{vin}", get(vehicle_history))
        .route("/api/vehicle/dmv", post(vehicle_dmv))
        .route("/api/vehicle/nmvtis/{vin}", get(vehicle_nmvtis))
}

fn found(record: Record) -> LookupResult {
    Ok(Json(json!({ "success": true, "result": record })))
}

/// Reject blank required fields before any client runs
fn require(field: &str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::MalformedRequest(format!(
            "{} parameter is required",
            field
        )));
    }
    Ok(())
}

// Court

async fn court_case(State(state): State<AppState>, Path(case_id): Path<String>) -> LookupResult {
    found(state.aggregator.court().get_record(&case_id).await?)
}

async fn court_documents(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> LookupResult {
    found(state.aggregator.court().get_case_documents(&case_id))
}

async fn court_party(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PartyRequest>,
) -> LookupResult {
    require("party_name", &request.party_name)?;
    found(
        state
            .aggregator
            .court()
            .search_by_party(&request.party_name, &request.filters),
    )
}

async fn court_courtlistener(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<QueryRequest>,
) -> LookupResult {
    require("query", &request.query)?;
    found(
        state
            .aggregator
            .court()
            .search_courtlistener(&request.query, &request.filters),
    )
}

async fn court_legislation(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LegislationRequest>,
) -> LookupResult {
    require("query", &request.query)?;
    found(state.aggregator.court().search_legislation(
        &request.query,
        request.state.as_deref(),
        &request.filters,
    ))
}

// Property

async fn property_by_address(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddressRequest>,
) -> LookupResult {
    require("address", &request.address)?;
    found(
        state
            .aggregator
            .property()
            .get_by_address(&request.address, &request.city, &request.state),
    )
}

async fn property_valuation(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddressLookupRequest>,
) -> LookupResult {
    require("address", &request.address)?;
    found(
        state
            .aggregator
            .property()
            .get_rentcast_valuation(&request.address, &request.extra),
    )
}

async fn property_report(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ReportRequest>,
) -> LookupResult {
    require("address", &request.address)?;
    let report_type = request.report_type.as_deref().unwrap_or(DEFAULT_REPORT_TYPE);
    found(
        state
            .aggregator
            .property()
            .get_first_american_report(&request.address, report_type),
    )
}

async fn property_analytics(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddressLookupRequest>,
) -> LookupResult {
    require("address", &request.address)?;
    found(
        state
            .aggregator
            .property()
            .get_housecanary_analytics(&request.address, &request.extra),
    )
}

async fn property_ownership(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> LookupResult {
    found(state.aggregator.property().get_ownership_history(&property_id))
}

async fn property_taxes(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> LookupResult {
    found(state.aggregator.property().get_tax_history(&property_id))
}

// Business

async fn business_enrich(State(state): State<AppState>, Path(domain): Path<String>) -> LookupResult {
    found(state.aggregator.business().enrich_company(&domain))
}

async fn business_by_ein(State(state): State<AppState>, Path(ein): Path<String>) -> LookupResult {
    found(state.aggregator.business().get_by_ein(&ein))
}

async fn business_filings(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
) -> LookupResult {
    found(state.aggregator.business().get_filings(&business_id))
}

async fn business_licenses(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
) -> LookupResult {
    found(state.aggregator.business().get_licenses(&business_id))
}

// Government

async fn government_categories(State(state): State<AppState>) -> LookupResult {
    Ok(Json(json!({
        "success": true,
        "categories": state.aggregator.government().data_categories(),
    })))
}

async fn government_dataset(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> LookupResult {
    let filters: Filters = params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    debug!("Dataset {} requested with {} filters", dataset_id, filters.len());
    found(
        state
            .aggregator
            .government()
            .get_dataset_data(&dataset_id, &filters),
    )
}

async fn government_agency(
    State(state): State<AppState>,
    Path(agency): Path<String>,
) -> LookupResult {
    found(state.aggregator.government().search_by_agency(&agency))
}

async fn government_census(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CensusRequest>,
) -> LookupResult {
    require("geography", &request.geography)?;
    found(state.aggregator.government().get_census_data(
        &request.geography,
        &request.variables,
        &request.filters,
    ))
}

// Background

async fn background_checkr(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ScreeningRequest>,
) -> LookupResult {
    require("candidate_email", &request.candidate_email)?;
    let package = request.package.as_deref().unwrap_or(DEFAULT_PACKAGE);
    found(state.aggregator.background().create_checkr_screening(
        &request.candidate_email,
        package,
        &request.candidate,
    ))
}

async fn background_criminal(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CriminalSearchRequest>,
) -> LookupResult {
    require("name", &request.name)?;
    found(state.aggregator.background().search_criminal_records(
        &request.name,
        request.dob.as_deref(),
        request.location.as_deref(),
    ))
}

async fn background_monitoring(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> LookupResult {
    found(
        state
            .aggregator
            .background()
            .get_continuous_monitoring(&candidate_id),
    )
}

// Vehicle

async fn vehicle_decode(State(state): State<AppState>, Path(vin): Path<String>) -> LookupResult {
    found(state.aggregator.vehicle().decode_vin(&vin))
}

async fn vehicle_history(State(state): State<AppState>, Path(vin): Path<String>) -> LookupResult {
    found(state.aggregator.vehicle().get_vehicle_history(&vin))
}

async fn vehicle_dmv(State(state): State<AppState>, JsonBody(request): JsonBody<DmvRequest>) -> LookupResult {
    require("license_number", &request.license_number)?;
    require("state", &request.state)?;
    found(state.aggregator.vehicle().verify_dmv_record(
        &request.first_name,
        &request.last_name,
        &request.license_number,
        &request.state,
    ))
}

async fn vehicle_nmvtis(State(state): State<AppState>, Path(vin): Path<String>) -> LookupResult {
    found(state.aggregator.vehicle().check_nmvtis(&vin))
}
