//! API endpoint handlers
//!
//! This module implements the HTTP endpoints for unified search, single
//! category search, record lookup, category listing, credential status,
//! connectivity tests and health checks.

use crate::api::lookups;
use crate::core::aggregator::Aggregator;
use crate::core::category::Category;
use crate::core::client::RecordError;
use crate::core::config::Config;
use crate::core::constants::{SERVICE_NAME, SERVICE_VERSION};
use crate::models::record::{CategoryOutcome, SearchQuery};
use crate::models::requests::{QueryRequest, SearchRequest};
use axum::{
    Json, Router,
    extract::{FromRequest, Path, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub aggregator: Arc<Aggregator>,
}

/// JSON body extractor whose rejections use the API error envelope
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = RecordError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(RecordError::MalformedRequest(rejection.body_text())),
        }
    }
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/search", post(search))
        .route("/api/search/{record_type}", post(search_by_type))
        .route("/api/record/{record_type}/{record_id}", get(get_record))
        .route("/api/types", get(record_types))
        .route("/api/status", get(api_status))
        .route("/api/test-connection/{record_type}", get(test_connection))
        .merge(lookups::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecordError::InvalidCategory { .. } | RecordError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            RecordError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        if let RecordError::InvalidCategory { .. } = &self {
            body["valid_types"] = json!(Category::ALL.map(|c| c.as_str()));
        }

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        (status, Json(body)).into_response()
    }
}

/// POST /api/search - Search one, several, or all categories
async fn search(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> Result<Json<Value>, RecordError> {
    let searches_all = request.searches_all();
    let SearchRequest {
        query,
        record_types,
        filters,
    } = request;
    let query = SearchQuery::new(query, filters)?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        "Incoming search: types={}",
        record_types
            .as_ref()
            .map(|t| t.join(","))
            .unwrap_or_else(|| "all".to_string())
    );

    let results = if searches_all {
        json!(state.aggregator.search_all(&query).await)
    } else {
        let mut results = Map::new();
        for record_type in record_types.unwrap_or_default() {
            let outcome = match state
                .aggregator
                .search_by_category(&record_type, &query)
                .await
            {
                Ok(record) => CategoryOutcome::Found(record),
                Err(e) => {
                    warn!(%request_id, "Search failed for {}: {}", record_type, e);
                    CategoryOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            results.insert(record_type, json!(outcome));
        }
        Value::Object(results)
    };

    Ok(Json(json!({
        "success": true,
        "query": query.text(),
        "results": results,
    })))
}

/// POST /api/search/{record_type} - Search a single category
async fn search_by_type(
    State(state): State<AppState>,
    Path(record_type): Path<String>,
    JsonBody(request): JsonBody<QueryRequest>,
) -> Result<Json<Value>, RecordError> {
    let query = SearchQuery::new(request.query, request.filters)?;
    info!("Incoming {} search", record_type);

    let result = state
        .aggregator
        .search_by_category(&record_type, &query)
        .await?;

    Ok(Json(json!({
        "success": true,
        "record_type": record_type,
        "query": query.text(),
        "result": result,
    })))
}

/// GET /api/record/{record_type}/{record_id} - Fetch one record
async fn get_record(
    State(state): State<AppState>,
    Path((record_type, record_id)): Path<(String, String)>,
) -> Result<Json<Value>, RecordError> {
    info!("Fetching {} record {}", record_type, record_id);

    let result = state
        .aggregator
        .get_record_by_category(&record_type, &record_id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "record_type": record_type,
        "record_id": record_id,
        "result": result,
    })))
}

/// GET /api/types - Available record types
async fn record_types(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "record_types": state.aggregator.list_categories(),
    }))
}

/// GET /api/status - Credential configuration per category
async fn api_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "status": state.aggregator.credential_status(),
    }))
}

/// GET /api/test-connection/{record_type} - Test upstream connectivity
async fn test_connection(
    State(state): State<AppState>,
    Path(record_type): Path<String>,
) -> Result<Json<Value>, RecordError> {
    match state.aggregator.probe(&record_type).await {
        Ok(report) => Ok(Json(json!({
            "status": "success",
            "message": format!("Successfully connected to {}", report.base_url),
            "report": report,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))),
        Err(RecordError::Upstream(e)) => {
            error!("Connectivity test for {} failed: {}", record_type, e);
            Ok(Json(json!({
                "status": "failed",
                "error_type": "Upstream Error",
                "message": e.to_string(),
                "record_type": record_type,
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "suggestions": [
                    "Check network access to the provider",
                    "Verify the provider API key is valid",
                    "Check if you have reached rate limits",
                ],
            })))
        }
        Err(e) => Err(e),
    }
}

/// GET / - Root endpoint
async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": format!("{} v{}", SERVICE_NAME, SERVICE_VERSION),
        "status": "running",
        "config": {
            "request_timeout": state.config.request.request_timeout,
            "max_attempts": state.config.request.max_attempts,
            "configured_categories": state.aggregator.credential_status(),
        },
        "endpoints": {
            "search": "/api/search",
            "search_by_type": "/api/search/{record_type}",
            "record": "/api/record/{record_type}/{record_id}",
            "types": "/api/types",
            "status": "/api/status",
            "health": "/api/health",
            "test_connection": "/api/test-connection/{record_type}",
        },
    }))
}

/// GET /api/health - Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": SERVICE_VERSION,
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
