//! HTTP client abstraction and utilities

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use snail_core::Error;
use std::time::Duration;
use tracing::trace;

/// A raw HTTP answer: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client abstraction
///
/// Implementations only report transport failures as errors; any status
/// code the server answers with comes back as an [`HttpResponse`].
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a JSON POST request
    async fn post(&self, url: &str, headers: HeaderMap, body: Value)
        -> Result<HttpResponse, Error>;
}

/// Default HTTP client implementation using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client with the default request timeout
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Create a new HTTP client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Value,
    ) -> Result<HttpResponse, Error> {
        trace!(url, "POST");
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(error::network_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(error::network_error)?;
        trace!(status, bytes = body.len(), "HTTP response received");

        Ok(HttpResponse { status, body })
    }
}

/// Helper to create common headers
pub fn create_headers(api_key: &str, additional: Option<HeaderMap>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| Error::Configuration(format!("Invalid API key: {}", e)))?,
    );

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(additional) = additional {
        headers.extend(additional);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;

    #[test]
    fn test_create_headers() {
        let headers = create_headers("secret", None).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_create_headers_with_additional() {
        let mut extra = HeaderMap::new();
        extra.insert(
            HeaderName::from_static("x-trace"),
            HeaderValue::from_static("1"),
        );
        let headers = create_headers("secret", Some(extra)).unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["x-trace"], "1");
    }

    #[test]
    fn test_create_headers_rejects_bad_key() {
        let err = create_headers("bad\nkey", None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_http_response_success_range() {
        let ok = HttpResponse {
            status: 200,
            body: String::new(),
        };
        assert!(ok.is_success());
        let failed = HttpResponse {
            status: 500,
            body: String::new(),
        };
        assert!(!failed.is_success());
    }
}
