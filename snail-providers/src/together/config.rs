//! together.xyz provider configuration

use crate::constants::{
    TOGETHER_API_KEY_ENV, TOGETHER_DEFAULT_ENDPOINT, TOGETHER_DEFAULT_MODEL,
    TOGETHER_ENDPOINT_ENV, TOGETHER_MODEL_ENV,
};
use snail_core::Error;
use std::env;
use url::Url;

/// Configuration for the together.xyz provider
#[derive(Clone)]
pub struct TogetherConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Completion endpoint URL
    pub endpoint: String,
    /// Model to run
    pub model: String,
}

impl TogetherConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: TOGETHER_DEFAULT_ENDPOINT.to_string(),
            model: TOGETHER_DEFAULT_MODEL.to_string(),
        }
    }

    /// Read the configuration from the environment
    ///
    /// `TOGETHER_API_KEY` is required; `TOGETHER_ENDPOINT` and
    /// `TOGETHER_MODEL` override the defaults when set.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var(TOGETHER_API_KEY_ENV)
            .map_err(|_| Error::Configuration(format!("{} is not set", TOGETHER_API_KEY_ENV)))?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = env::var(TOGETHER_ENDPOINT_ENV) {
            config = config.with_endpoint(endpoint);
        }
        if let Ok(model) = env::var(TOGETHER_MODEL_ENV) {
            config = config.with_model(model);
        }
        config.validate()?;
        Ok(config)
    }

    /// Set a custom endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Reject configurations that could never produce a request
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(Error::Configuration("model is empty".to_string()));
        }
        let url = Url::parse(&self.endpoint).map_err(|e| {
            Error::Configuration(format!("Invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Configuration(format!(
                "Endpoint must be http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }
}

// The key stays out of logs.
impl std::fmt::Debug for TogetherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogetherConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}
