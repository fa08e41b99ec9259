//! Category client abstraction
//!
//! This module defines the common trait implemented by every record category
//! client and the error type shared by the dispatch layer.

use crate::core::category::{Category, valid_short_names};
use crate::core::http::{HttpSession, UpstreamError};
use crate::models::record::{Record, SearchQuery};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for record operations
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid record type: {name}. Valid types: {}", valid_short_names())]
    InvalidCategory { name: String },

    #[error("{0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Trait for record category clients
///
/// Missing credentials are reported inside the returned record, never as an
/// error. Errors are reserved for upstream failures.
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// The category this client serves
    fn category(&self) -> Category;

    /// Search this category
    async fn search(&self, query: &SearchQuery) -> Result<Record, RecordError>;

    /// Fetch one record by identifier
    async fn get_record(&self, id: &str) -> Result<Record, RecordError>;

    /// The client's HTTP session
    fn session(&self) -> &HttpSession;
}
