use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::TimeoutConfig;

const USER_AGENT: &str = concat!("calmpath/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 8_000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Shared reqwest wrapper for all backend calls.
pub struct HttpClient {
    pub(super) client: Client,
    retry_config: RetryConfig,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_config(RetryConfig::default(), TimeoutConfig::default())
    }

    pub fn with_config(retry_config: RetryConfig, timeouts: TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            retry_config,
        })
    }

    /// Execute a request with retry logic.
    ///
    /// Retries on:
    /// - Network errors (connection failures, timeouts)
    /// - 5xx server errors
    /// - 429 Too Many Requests
    ///
    /// Does NOT retry on:
    /// - 4xx client errors (except 429)
    /// - Successful responses
    pub(super) async fn execute_with_retry<F, Fut, T>(
        &self,
        operation_name: &str,
        mut request_fn: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        let mut backoff_ms = self.retry_config.initial_backoff_ms;

        loop {
            attempt += 1;

            match request_fn().await {
                Ok(response) => {
                    if attempt > 1 {
                        debug!("{} succeeded after {} attempts", operation_name, attempt);
                    }
                    return Ok(response);
                }
                Err(e) => {
                    let should_retry =
                        attempt <= self.retry_config.max_retries && self.is_retryable_error(&e);

                    if should_retry {
                        warn!(
                            "{} failed (attempt {}/{}): {}. Retrying in {}ms",
                            operation_name, attempt, self.retry_config.max_retries, e, backoff_ms
                        );

                        sleep(Duration::from_millis(backoff_ms)).await;

                        backoff_ms = ((backoff_ms as f64 * self.retry_config.backoff_multiplier)
                            as u64)
                            .min(self.retry_config.max_backoff_ms);
                    } else {
                        if attempt > self.retry_config.max_retries {
                            warn!(
                                "{} failed after {} attempts",
                                operation_name, self.retry_config.max_retries
                            );
                        }
                        return Err(e);
                    }
                }
            }
        }
    }

    fn is_retryable_error(&self, error: &anyhow::Error) -> bool {
        if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_connect() || reqwest_err.is_timeout() || reqwest_err.is_request() {
                return true;
            }

            if let Some(status) = reqwest_err.status() {
                return status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_non_retryable_error_returns_immediately() {
        let client = HttpClient::new().unwrap();
        let mut calls = 0;

        let result: Result<()> = client
            .execute_with_retry("test op", || {
                calls += 1;
                async { Err(anyhow::anyhow!("permanent failure")) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
