//! Common traits for provider implementations

use serde_json::Value;
use snail_core::{Completion, CompletionRequest, Error};

/// Convert requests to provider-specific format
pub trait RequestConverter: Send + Sync {
    /// Convert a generic request to provider-specific JSON
    fn convert_request(&self, model: &str, request: &CompletionRequest) -> Result<Value, Error>;
}

/// Parse responses from provider-specific format
pub trait ResponseParser: Send + Sync {
    /// Parse provider-specific JSON into a completion
    fn parse_response(&self, value: Value) -> Result<Completion, Error>;
}
