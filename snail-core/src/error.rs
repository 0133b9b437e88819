//! Error types for the snail library

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed source error carried by transport and serialization failures
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The main error type for all snail operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A prompt template is malformed or lacks a required placeholder
    #[error("Template error: {0}")]
    Template(String),

    /// The completion provider answered with a non-success HTTP status
    #[error("Provider error ({provider}): HTTP {status}: {message}")]
    Provider {
        /// Provider name (e.g., "together")
        provider: String,
        /// HTTP status code returned by the provider
        status: u16,
        /// Error message or response body
        message: String,
    },

    /// Network-level failure talking to the provider
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// The provider call did not finish in time
    #[error("Operation timed out")]
    Timeout,

    /// The provider call was cancelled by the caller
    #[error("Operation cancelled")]
    Cancelled,

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// The provider answered successfully but the payload was unusable
    #[error("Response error: {message}")]
    Response {
        /// Error message
        message: String,
    },

    /// Invalid sampling parameters or other caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// HTTP status code for provider errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a transport failure (network, timeout or cancellation)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Network { .. } | Error::Timeout | Error::Cancelled
        )
    }
}

/// Result type alias for snail operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
