//! REST client for the managed auth provider.
//!
//! Email/password sign-up and sign-in only; session refresh and password
//! reset stay with the provider's hosted flows.

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use calmpath_domain::shared::{DomainError, UserId};

use super::HttpClient;
use crate::config::BackendConfig;

/// Result of a successful sign-up or sign-in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: UserId,
    pub email: String,
    pub id_token: String,
    pub expires_in_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    email: String,
    id_token: String,
    #[serde(default)]
    expires_in: String,
}

pub struct AuthClient {
    http: Arc<HttpClient>,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(http: Arc<HttpClient>, config: &BackendConfig) -> Self {
        Self {
            http,
            base_url: config.auth_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        self.token_request("accounts:signUp", email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        self.token_request("accounts:signInWithPassword", email, password)
            .await
    }

    async fn token_request(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError> {
        let url = format!("{}/{}?key={}", self.base_url, endpoint, self.api_key);
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let result = self
            .http
            .execute_with_retry("Auth token request", || {
                let url = url.clone();
                let body = body.clone();
                let client = self.http.client.clone();

                async move {
                    let response = client
                        .post(&url)
                        .json(&body)
                        .send()
                        .await
                        .context("Auth request failed")?;

                    let status = response.status();
                    let payload: Value =
                        response.json().await.context("Invalid auth response")?;

                    if !status.is_success() {
                        let code = payload["error"]["message"]
                            .as_str()
                            .unwrap_or("UNKNOWN")
                            .to_string();
                        return Ok(Err(code));
                    }

                    let token: TokenResponse = serde_json::from_value(payload)
                        .context("Malformed auth token response")?;
                    Ok(Ok(token))
                }
            })
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        match result {
            Ok(token) => Ok(AuthSession {
                user_id: UserId::from_string(&token.local_id),
                email: token.email,
                id_token: token.id_token,
                expires_in_secs: token.expires_in.parse().unwrap_or(3600),
            }),
            Err(code) => {
                warn!("[auth] {} rejected: {}", endpoint, code);
                Err(map_auth_error(&code))
            }
        }
    }
}

/// Provider error codes collapse into two buckets: credential problems
/// the user can fix, and everything else.
fn map_auth_error(code: &str) -> DomainError {
    // Some provider codes carry a trailing explanation, e.g.
    // "WEAK_PASSWORD : Password should be at least 6 characters"
    match code.split_whitespace().next().unwrap_or(code) {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED"
        | "EMAIL_EXISTS" | "WEAK_PASSWORD" => DomainError::InvalidCredentials(code.to_string()),
        other => DomainError::Infrastructure(format!("Auth provider error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_errors_map_to_invalid_credentials() {
        assert!(matches!(
            map_auth_error("INVALID_PASSWORD"),
            DomainError::InvalidCredentials(_)
        ));
        assert!(matches!(
            map_auth_error("EMAIL_EXISTS"),
            DomainError::InvalidCredentials(_)
        ));
    }

    #[test]
    fn test_unknown_errors_map_to_infrastructure() {
        assert!(matches!(
            map_auth_error("QUOTA_EXCEEDED"),
            DomainError::Infrastructure(_)
        ));
    }
}
