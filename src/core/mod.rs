//! Core application modules
//!
//! This module contains configuration, credentials, logging, the HTTP
//! session, the category clients and the aggregator that dispatches to them.

pub mod aggregator;
pub mod category;
pub mod client;
pub mod clients;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod http;
pub mod logging;
