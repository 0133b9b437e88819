//! Common utilities for provider implementations

use crate::error;
use crate::http::HttpResponse;
use serde_json::Value;
use snail_core::Error;

/// Longest response body quoted in an error message
const MAX_ERROR_BODY: usize = 512;

/// Check the HTTP status and convert failures to a provider error
pub fn check_response_status(response: HttpResponse, provider_name: &str) -> Result<HttpResponse, Error> {
    if response.is_success() {
        return Ok(response);
    }

    let message = if response.body.is_empty() {
        format!("HTTP {} error", response.status)
    } else {
        truncate(&response.body, MAX_ERROR_BODY)
    };
    Err(error::provider_error(provider_name, response.status, message))
}

/// Parse a successful response body as JSON
pub fn parse_json_body(response: &HttpResponse) -> Result<Value, Error> {
    serde_json::from_str(&response.body).map_err(error::serialization_error)
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
