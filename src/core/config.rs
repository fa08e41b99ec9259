//! Application configuration management
//!
//! This module handles loading and validating server and HTTP request
//! settings from an optional TOML file, `.env`, and the process environment.
//! Sub-provider secrets live in [`crate::core::credentials`].

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default server port
const DEFAULT_PORT: u16 = 5000;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Default number of attempts per outbound request
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the first retry, in milliseconds
const DEFAULT_BACKOFF_BASE_MS: u64 = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Settings shared by every category client's HTTP session
#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each further retry
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_backoff_base_ms() -> u64 {
    DEFAULT_BACKOFF_BASE_MS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

impl RequestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct TomlConfig {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    request: RequestConfig,
}

/// Application configuration
///
/// Loaded once at startup and validated so the service fails fast when
/// misconfigured.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub request: RequestConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The TOML file cannot be read or parsed
    /// - Configuration values are invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;
        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Self> {
        let parsed: TomlConfig =
            toml::from_str(content).context("Failed to parse TOML configuration")?;

        let config = Config {
            server: parsed.server,
            request: parsed.request,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `.env`, the optional config file, and the
    /// process environment
    ///
    /// Looks for `config.toml` in the current directory unless `CONFIG_PATH`
    /// points elsewhere. A missing file means defaults.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Config::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `LOG_LEVEL` overrides
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|v| !v.is_empty()) {
            self.server.log_level = level;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.request.max_attempts >= 1,
            "request.max_attempts must be at least 1"
        );
        ensure!(
            self.request.request_timeout >= 1,
            "request.request_timeout must be at least 1 second"
        );
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
