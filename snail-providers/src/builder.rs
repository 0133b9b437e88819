//! Builder pattern for provider construction
//!
//! Builders follow a fluent interface where configuration methods return
//! `self` and `build()` validates the configuration and constructs the
//! provider.
//!
//! # Examples
//!
//! ```no_run
//! use snail_providers::builder::{ProviderBuilder, TogetherBuilder};
//! use snail_providers::http::ReqwestClient;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let client = Arc::new(ReqwestClient::with_timeout(Duration::from_secs(30)).unwrap());
//! let provider = TogetherBuilder::new("api-key")
//!     .model("microsoft/phi-2")
//!     .with_client(client)
//!     .build()
//!     .expect("Failed to build provider");
//! ```

use crate::http::{HttpClient, ReqwestClient};
use crate::together::{Together, TogetherConfig};
use snail_core::Error;
use std::sync::Arc;
use std::time::Duration;

/// Common builder trait for providers
pub trait ProviderBuilder: Sized {
    /// The provider type being built
    type Provider;

    /// Set a custom HTTP client
    ///
    /// This allows injecting a custom HTTP client implementation,
    /// useful for testing or special networking requirements.
    fn with_client(self, client: Arc<dyn HttpClient>) -> Self;

    /// Build the provider
    fn build(self) -> Result<Self::Provider, Error>;
}

/// Builder for constructing together.xyz providers
pub struct TogetherBuilder {
    config: TogetherConfig,
    timeout: Option<Duration>,
    client: Option<Arc<dyn HttpClient>>,
}

impl TogetherBuilder {
    /// Create a new builder with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(TogetherConfig::new(api_key))
    }

    /// Start from an existing configuration
    pub fn from_config(config: TogetherConfig) -> Self {
        Self {
            config,
            timeout: None,
            client: None,
        }
    }

    /// Set the endpoint URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the HTTP request timeout of the default client
    ///
    /// Ignored when a custom client is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the together.xyz provider
    pub fn build(self) -> Result<Together, Error> {
        self.config.validate()?;

        let client: Arc<dyn HttpClient> = match self.client {
            Some(client) => client,
            None => match self.timeout {
                Some(timeout) => Arc::new(ReqwestClient::with_timeout(timeout)?),
                None => Arc::new(ReqwestClient::new()?),
            },
        };

        Ok(Together::new(self.config, client))
    }
}

impl ProviderBuilder for TogetherBuilder {
    type Provider = Together;

    fn with_client(self, client: Arc<dyn HttpClient>) -> Self {
        TogetherBuilder::with_client(self, client)
    }

    fn build(self) -> Result<Self::Provider, Error> {
        TogetherBuilder::build(self)
    }
}
