//! API data models
//!
//! This module contains record payload types and HTTP request bodies.

pub mod record;
pub mod requests;
