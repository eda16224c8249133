//! Blocking HTTP client for the color identification endpoint.

use crate::error::{ColorError, Result};
use crate::input::{ColorOptions, ColorSpec, QueryParam};
use crate::response::ColorLookup;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Color identification endpoint of The Color API.
pub const DEFAULT_ENDPOINT: &str = "https://www.thecolorapi.com/id";

/// Client settings. Every field has a default, so a partial JSON document
/// deserializes fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL the query parameter is appended to
    pub endpoint: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            user_agent: concat!("thecolorapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Performs one GET per lookup; no retries.
#[derive(Debug, Clone)]
pub struct ColorClient {
    http: Client,
    endpoint: String,
}

impl ColorClient {
    /// Client for [`DEFAULT_ENDPOINT`] with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates the four-slot `options` and looks the color up.
    pub fn lookup_options(&self, options: ColorOptions) -> Result<ColorLookup> {
        let spec = options.into_spec()?;
        self.lookup(&spec)
    }

    /// Normalizes `spec` and looks the color up.
    pub fn lookup(&self, spec: &ColorSpec) -> Result<ColorLookup> {
        let query = spec.to_query()?;
        let json = self.fetch(&query)?;
        Ok(ColorLookup::with_query(json, query))
    }

    /// Sends `query` and returns the decoded response body.
    pub fn fetch(&self, query: &QueryParam) -> Result<Value> {
        debug!(endpoint = %self.endpoint, %query, "Requesting color");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[query.as_pair()])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "Color response received");

        if status != StatusCode::OK {
            let message = error_message(status, &body);
            warn!(status = status.as_u16(), %message, "Color request rejected");
            return Err(ColorError::Request {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Picks the best description of a failed request: the body's `message`
/// field, else the body itself, else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        json.get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("thecolorapi/"));
    }

    #[test]
    fn test_config_deserializes_partial_document() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"endpoint": "http://localhost:8080/id", "timeout_secs": 5}"#)
                .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/id");
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.user_agent, ClientConfig::default().user_agent);
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let config = ClientConfig::default()
            .with_endpoint("http://127.0.0.1:1/id")
            .with_timeout_secs(1);
        let client = ColorClient::from_config(config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:1/id");
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = r#"{"code": 400, "message": "bad request"}"#;
        assert_eq!(error_message(StatusCode::BAD_REQUEST, body), "bad request");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, " upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, r#"{"error": "nope"}"#),
            r#"{"error": "nope"}"#
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }

    #[test]
    fn test_invalid_input_fails_before_any_request() {
        // Port 1 is never listened on; reaching the network would be a
        // transport error instead.
        let client =
            ColorClient::from_config(ClientConfig::default().with_endpoint("http://127.0.0.1:1/id"))
                .unwrap();

        let err = client.lookup(&ColorSpec::hex("#12")).unwrap_err();
        assert!(matches!(err, ColorError::Validation(_)));

        let err = client.lookup_options(ColorOptions::new()).unwrap_err();
        assert!(matches!(err, ColorError::Validation(_)));
    }
}
