//! Public Records API
//!
//! A unified HTTP facade over court, property, business, government,
//! background check and vehicle record providers. Searches fan out to every
//! category client and come back as one normalized response.

mod api;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::aggregator::Aggregator;
use crate::core::category::Category;
use crate::core::config::Config;
use crate::core::constants::{SERVICE_NAME, SERVICE_VERSION};
use crate::core::credentials::CredentialSet;
use crate::core::logging::init_logging;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Load configuration (also loads .env)
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.server.log_level);

    let credentials = CredentialSet::from_env();
    print_startup_banner(&config, &credentials);

    let aggregator = match Aggregator::new(credentials, &config.request) {
        Ok(aggregator) => Arc::new(aggregator),
        Err(e) => {
            error!("Failed to initialize record clients: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Serving {} record categories",
        aggregator.list_categories().len()
    );

    let app_state = AppState {
        config: config.clone(),
        aggregator,
    };

    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config, credentials: &CredentialSet) {
    println!("{} v{}", SERVICE_NAME, SERVICE_VERSION);
    println!("Configuration loaded");
    println!("   Server: {}", config.bind_address());
    println!("   Request Timeout: {}s", config.request.request_timeout);
    println!(
        "   Retry: {} attempts, backoff from {}ms",
        config.request.max_attempts, config.request.backoff_base_ms
    );
    println!("   Credentials:");
    for category in Category::ALL {
        println!(
            "     {:<22} {}",
            category.as_str(),
            if credentials.is_configured(category) {
                "configured"
            } else {
                "mock only"
            }
        );
    }
    println!();
}

/// Print help message
fn print_help() {
    println!("{} v{}", SERVICE_NAME, SERVICE_VERSION);
    println!();
    println!("Usage: public-records-api [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Settings (config.toml or CONFIG_PATH, overridable by environment):");
    println!("  HOST - Server host (default: 0.0.0.0)");
    println!("  PORT - Server port (default: 5000)");
    println!("  LOG_LEVEL - Logging level (default: info)");
    println!("  [request] request_timeout, max_attempts, backoff_base_ms");
    println!();
    println!("Provider credentials (all optional; .env is loaded at startup):");
    for category in Category::ALL {
        println!(
            "  {}: {}",
            category.short_name(),
            CredentialSet::variable_names(category).join(", ")
        );
    }
}
