//! HTTP client for the chatdesk backend.

use chatdesk_shared::{ApiError, Setting};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Local storage key the login flow keeps the access token under.
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            token: None,
        }
    }

    /// Client for the configured backend, authenticated with the stored
    /// access token when there is one.
    pub fn from_environment() -> Self {
        Self::new()
            .with_base_url(crate::config::backend_url())
            .with_token(crate::storage::load::<String>(AUTH_TOKEN_KEY))
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request and decode the JSON body
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);
        let mut rb = self.client.get(&url);

        if let Some(token) = &self.token {
            rb = rb.header("Authorization", format!("Bearer {token}"));
        }

        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Fetch every persisted setting
    pub async fn fetch_settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.get_json("/settings").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        let client = ApiClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(client.url("/settings"), "http://localhost:8080/settings");
        assert_eq!(client.url("settings"), "http://localhost:8080/settings");
    }

    #[test]
    fn relative_without_base() {
        let client = ApiClient::new();
        assert_eq!(client.url("settings"), "/settings");
        assert_eq!(client.url("/settings"), "/settings");
    }

    #[test]
    fn absolute_paths_pass_through() {
        let client = ApiClient::new().with_base_url("http://localhost:8080");
        assert_eq!(client.url("https://api.example.com/settings"), "https://api.example.com/settings");
    }

    #[test]
    fn empty_token_is_ignored() {
        assert!(ApiClient::new().with_token(Some(String::new())).token.is_none());
        assert_eq!(
            ApiClient::new().with_token(Some("abc".into())).token.as_deref(),
            Some("abc")
        );
    }
}
