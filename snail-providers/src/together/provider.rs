//! together.xyz provider implementation
//!
//! Sends the rendered prompt and the transcript to the together.xyz
//! serverless completion endpoint and parses the first choice back into a
//! [`Completion`]. Non-success statuses are returned as
//! [`Error::Provider`] carrying the HTTP status; nothing is retried here.

use crate::constants::TOGETHER_PROVIDER_NAME;
use crate::http::{create_headers, HttpClient};
use crate::together::{
    config::TogetherConfig, converter::TogetherConverter, parser::TogetherParser,
};
use crate::traits::{RequestConverter, ResponseParser};
use crate::utils::{check_response_status, parse_json_body};
use async_trait::async_trait;
use snail_core::{Completion, CompletionProvider, CompletionRequest, Error};
use std::sync::Arc;
use tracing::{debug, trace};

/// together.xyz provider for prompt completions
///
/// # Example
///
/// ```no_run
/// use snail_providers::Together;
///
/// // Create with API key
/// let provider = Together::with_api_key("your-api-key").expect("valid config");
///
/// // Or with custom configuration and client
/// use snail_providers::together::TogetherConfig;
/// use snail_providers::http::ReqwestClient;
/// use std::sync::Arc;
///
/// let config = TogetherConfig::new("your-api-key").with_model("microsoft/phi-2");
/// let client = Arc::new(ReqwestClient::new().expect("Failed to create client"));
/// let provider = Together::new(config, client);
/// ```
#[derive(Clone)]
pub struct Together {
    client: Arc<dyn HttpClient>,
    config: TogetherConfig,
    converter: TogetherConverter,
    parser: TogetherParser,
}

impl Together {
    /// Create a new provider with the given configuration and client
    pub fn new(config: TogetherConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: TogetherConverter,
            parser: TogetherParser,
        }
    }

    /// Create a new provider with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        crate::builder::TogetherBuilder::new(api_key).build()
    }

    /// Create a new provider configured from the environment
    pub fn from_env() -> Result<Self, Error> {
        let config = TogetherConfig::from_env()?;
        crate::builder::TogetherBuilder::from_config(config).build()
    }

    /// The provider configuration
    pub fn config(&self) -> &TogetherConfig {
        &self.config
    }
}

impl std::fmt::Debug for Together {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Together")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for Together {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, Error> {
        let body = self
            .converter
            .convert_request(&self.config.model, &request)?;
        trace!(body = %body, "together request body");

        let headers = create_headers(&self.config.api_key, None)?;
        let response = self
            .client
            .post(&self.config.endpoint, headers, body)
            .await?;
        let response = check_response_status(response, TOGETHER_PROVIDER_NAME)?;

        let completion = self.parser.parse_response(parse_json_body(&response)?)?;
        debug!(
            model = %self.config.model,
            chars = completion.text.len(),
            stop_reason = ?completion.stop_reason,
            "together completion received"
        );
        Ok(completion)
    }
}
