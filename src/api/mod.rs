//! HTTP API layer
//!
//! Routes requests onto the aggregator and the category clients.

pub mod endpoints;
pub mod lookups;
