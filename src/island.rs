//! MCC Island GraphQL API.
//!
//! Queries are sent as-is; there is no client-side schema validation. All
//! player data is opt-in, so fields may be missing for private profiles.

use std::env;
use std::time::Duration;

use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DEFAULT_TIMEOUT, USER_AGENT as DEFAULT_USER_AGENT};
use crate::error::{ApiStatus, MccError};

pub const ISLAND_URL: &str = "https://api.mccisland.net/graphql";
const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// An error entry from a GraphQL response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<GraphqlLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlLocation {
    pub line: u32,
    pub column: u32,
}

/// Client for the Island API. Requests without an API key are rejected by the
/// server with HTTP 401.
#[derive(Debug, Clone)]
pub struct IslandClient {
    http: Client,
    endpoint: String,
    api_key: Option<HeaderValue>,
    timeout: Duration,
}

impl IslandClient {
    pub fn new() -> Result<Self, MccError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: ISLAND_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// A client with the key from `MCC_ISLAND_API_KEY`, if set.
    pub fn from_env() -> Result<Self, MccError> {
        let mut client = Self::new()?;
        if let Ok(key) = env::var("MCC_ISLAND_API_KEY") {
            client.set_api_key(&key)?;
        }
        Ok(client)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Authenticate every later request with `key`.
    pub fn set_api_key(&mut self, key: &str) -> Result<(), MccError> {
        let mut value = HeaderValue::from_str(key)
            .map_err(|_| MccError::Config("API key is not a valid header value".into()))?;
        value.set_sensitive(true);
        self.api_key = Some(value);
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Run `query` with `variables` and decode its `data` into `T`.
    pub async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, MccError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .post(&self.endpoint)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .timeout(self.timeout)
            .json(&GraphqlRequest { query, variables });
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.clone());
        }

        debug!(endpoint = %self.endpoint, "GraphQL query");
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let reason = Some(body).filter(|b| !b.is_empty());
            return Err(MccError::Api(ApiStatus::new(status.as_u16(), reason)));
        }

        let body: GraphqlResponse<T> = resp.json().await?;
        if !body.errors.is_empty() {
            return Err(MccError::Graphql(body.errors));
        }
        body.data
            .ok_or_else(|| MccError::Envelope("GraphQL response has neither data nor errors".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GraphqlRequest {
            query: "query { nextEvent }",
            variables: json!({ "username": "Jammy4312" }),
        })
        .unwrap();
        assert_eq!(body["query"], "query { nextEvent }");
        assert_eq!(body["variables"]["username"], "Jammy4312");
    }

    #[test]
    fn errors_default_to_empty() {
        let resp: GraphqlResponse<serde_json::Value> =
            serde_json::from_value(json!({ "data": { "player": null } })).unwrap();
        assert!(resp.errors.is_empty());
        assert!(resp.data.is_some());
    }

    #[test]
    fn api_key_is_optional_until_set() {
        let mut client = IslandClient::new().unwrap();
        assert!(!client.has_api_key());
        client.set_api_key("abc123").unwrap();
        assert!(client.has_api_key());
        assert!(client.set_api_key("bad\nkey").is_err());
    }
}
