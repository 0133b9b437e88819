//! Conversions from transport and payload errors to core errors

use snail_core::Error;

/// Convert a non-success HTTP answer to a core error
pub fn provider_error(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Error {
    Error::Provider {
        provider: provider.into(),
        status,
        message: message.into(),
    }
}

/// Convert network errors to core errors
///
/// Timeouts reported by reqwest keep their own variant.
pub fn network_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        return Error::Timeout;
    }
    Error::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert serialization errors to core errors
pub fn serialization_error(error: serde_json::Error) -> Error {
    Error::Serialization {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_carries_status() {
        let error = provider_error("together", 503, "unavailable");
        assert_eq!(error.status(), Some(503));
        assert_eq!(
            error.to_string(),
            "Provider error (together): HTTP 503: unavailable"
        );
    }

    #[test]
    fn test_serialization_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = serialization_error(json_error);
        assert!(matches!(error, Error::Serialization { source: Some(_), .. }));
    }
}
