//! HTTP client for the external policy/query API.
//!
//! The feedback service never calls this backend itself; integrators use
//! this client to fetch published policies and ask questions, then submit
//! the resulting question/answer pair as feedback context. Auth endpoints
//! (`/auth/login`, `/auth/register`) are opaque to this service and not
//! wrapped here.
//!
//! Configuration is via environment variables:
//! - `POLICYBOT_API_URL` - Base URL (default: `http://localhost:8000`)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{PolicyQuery, PolicyQueryResponse, PublishedPolicy};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:8000";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum PolicyApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Client for the policy/query backend.
#[derive(Debug, Clone)]
pub struct PolicyClient {
    base_url: String,
    client: Client,
}

impl PolicyClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POLICYBOT_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with explicit configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Handle response, converting HTTP errors to PolicyApiError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PolicyApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(PolicyApiError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(PolicyApiError::BadRequest(body)),
                _ => Err(PolicyApiError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// List policies published to end users.
    pub async fn published_policies(&self) -> Result<Vec<PublishedPolicy>, PolicyApiError> {
        let url = format!("{}/admin/policies?published=true", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Submit questions against a published policy, getting back answers
    /// parallel to the questions.
    pub async fn query(&self, query: &PolicyQuery) -> Result<PolicyQueryResponse, PolicyApiError> {
        let url = format!("{}/user/query", self.base_url);
        let response = self.client.post(&url).json(query).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_given_base_url() {
        let client = PolicyClient::new("http://example.com:9000");
        assert_eq!(client.base_url, "http://example.com:9000");
    }

    #[test]
    fn query_payload_matches_backend_contract() {
        let query = PolicyQuery {
            insurance_type: "Health".to_string(),
            policy_name: "Silver Plan".to_string(),
            policy_year: "2024".to_string(),
            questions: vec!["Is dental covered?".to_string()],
        };

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["insurance_type"], "Health");
        assert_eq!(json["policy_name"], "Silver Plan");
        assert_eq!(json["policy_year"], "2024");
        assert_eq!(json["questions"][0], "Is dental covered?");
    }
}
