//! Per-call options for dialogue invocations

use snail_core::{
    default_stop_sequences, Result, SamplingParameters, DEFAULT_PRESENCE_PENALTY,
    DEFAULT_TEMPERATURE, DEFAULT_TOP_K, DEFAULT_TOP_P,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Options for one [`Dialogue::invoke`](crate::Dialogue::invoke) call
///
/// `stop_sequences` distinguishes "not chosen" (`None`, the default stop set
/// is used) from an explicit empty list (no stop sequences and no stop token
/// in the prompt).
///
/// # Example
///
/// ```
/// use snail_client::InvokeOptions;
/// use std::time::Duration;
///
/// let options = InvokeOptions::new()
///     .with_flush(true)
///     .with_temperature(0.7)
///     .with_stop_sequences(["\nUser:"])
///     .with_timeout(Duration::from_secs(30));
/// assert_eq!(options.stop_token(), Some("\nUser:"));
/// ```
#[derive(Debug, Clone)]
pub struct InvokeOptions {
    /// Clear the transcript before appending the message
    pub flush: bool,
    /// Temperature for randomness (0.0 to 2.0)
    pub temperature: f32,
    /// Top-p nucleus sampling, in (0.0, 1.0]
    pub top_p: f32,
    /// Top-k candidate tokens, at least 1
    pub top_k: u32,
    /// Presence penalty (-2.0 to 2.0)
    pub presence_penalty: f32,
    /// Stop sequences; `None` selects the default set
    pub stop_sequences: Option<Vec<String>>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Give up on the provider after this long
    pub timeout: Option<Duration>,
    /// Abandon the provider call when this token is cancelled
    pub cancellation: Option<CancellationToken>,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self {
            flush: false,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            presence_penalty: DEFAULT_PRESENCE_PENALTY,
            stop_sequences: None,
            max_tokens: None,
            timeout: None,
            cancellation: None,
        }
    }
}

impl InvokeOptions {
    /// Options with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the transcript before this call
    pub fn with_flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set top-p
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Set top-k
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set presence penalty
    pub fn with_presence_penalty(mut self, penalty: f32) -> Self {
        self.presence_penalty = penalty;
        self
    }

    /// Set explicit stop sequences; an empty list disables them
    pub fn with_stop_sequences(
        mut self,
        sequences: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.stop_sequences = Some(sequences.into_iter().map(Into::into).collect());
        self
    }

    /// Set maximum tokens
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Bound the provider call by a timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Let the caller abandon the provider call
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The stop sequences that will be sent
    pub fn effective_stop_sequences(&self) -> Vec<String> {
        match &self.stop_sequences {
            Some(sequences) => sequences.clone(),
            None => default_stop_sequences(),
        }
    }

    /// The stop token hinted in the prompt, if any
    pub fn stop_token(&self) -> Option<&str> {
        match &self.stop_sequences {
            Some(sequences) => sequences.first().map(String::as_str),
            None => Some(snail_core::DEFAULT_STOP_SEQUENCES[0]),
        }
    }

    /// The sampling parameters these options describe
    pub fn sampling_parameters(&self) -> SamplingParameters {
        SamplingParameters {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            presence_penalty: self.presence_penalty,
            max_tokens: self.max_tokens,
            stop: self.effective_stop_sequences(),
        }
    }

    /// Check the sampling parameters against their allowed ranges
    pub fn validate(&self) -> Result<()> {
        self.sampling_parameters().validate()
    }
}
