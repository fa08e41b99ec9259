//! HTTP session with retry support
//!
//! Every category client owns one [`HttpSession`]: a pooled `reqwest` client
//! bound to the provider's base URL, sending JSON headers and an optional
//! bearer token. Requests are retried on transient statuses with exponential
//! backoff.

use crate::core::config::RequestConfig;
use crate::core::constants::RETRY_STATUSES;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Error types that can occur while talking to an upstream provider
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Bounded retry with exponential backoff
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RequestConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            backoff_base: config.backoff_base(),
        }
    }

    /// Delay after the given failed attempt (1-based): base, 2*base, 4*base...
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.backoff_base.saturating_mul(1 << exponent)
    }

    pub fn should_retry(status: StatusCode) -> bool {
        RETRY_STATUSES.contains(&status.as_u16())
    }
}

/// Pooled HTTP session for one provider
pub struct HttpSession {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryPolicy,
}

impl HttpSession {
    /// Create a new session
    ///
    /// # Arguments
    ///
    /// * `base_url` - Provider base URL; endpoints are joined onto it
    /// * `api_key` - Optional bearer token
    /// * `config` - Timeout and retry settings
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        config: &RequestConfig,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            retry: RetryPolicy::from_config(config),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Send a request, retrying transient failures
    ///
    /// Retries on 429/500/502/503/504 and on transport errors. Any other
    /// non-2xx status fails immediately.
    ///
    /// # Errors
    ///
    /// Returns the last failure once `max_attempts` is exhausted.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Response, UpstreamError> {
        let url = self.url(endpoint);
        let mut attempt = 0;

        loop {
            attempt += 1;

            let mut req_builder = self
                .client
                .request(method.clone(), &url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .query(params);

            if let Some(api_key) = &self.api_key {
                req_builder = req_builder.bearer_auth(api_key);
            }

            debug!("{} {} (attempt {}/{})", method, url, attempt, self.retry.max_attempts);

            let error = match req_builder.send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status();
                    let retryable = RetryPolicy::should_retry(status);
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    let error = UpstreamError::Status {
                        status: status.as_u16(),
                        message,
                    };
                    if !retryable {
                        return Err(error);
                    }
                    error
                }
                Err(e) => UpstreamError::Transport(e.to_string()),
            };

            if attempt >= self.retry.max_attempts {
                return Err(error);
            }

            let delay = self.retry.delay_after(attempt);
            warn!("Request to {} failed ({}), retrying in {:?}", url, error, delay);
            tokio::time::sleep(delay).await;
        }
    }

    /// GET the base URL and report the status
    pub async fn probe(&self) -> Result<StatusCode, UpstreamError> {
        self.send(Method::GET, "", &[]).await.map(|r| r.status())
    }
}
