//! Request types for completion providers

use crate::error::{Error, Result};
use crate::types::turn::Turn;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.33;

/// Default nucleus sampling threshold
pub const DEFAULT_TOP_P: f32 = 0.95;

/// Default number of candidate tokens
pub const DEFAULT_TOP_K: u32 = 42;

/// Default presence penalty
pub const DEFAULT_PRESENCE_PENALTY: f32 = 1.07;

/// Stop sequences used when the caller does not pick any
pub const DEFAULT_STOP_SEQUENCES: [&str; 6] = [
    "</s>",
    "\n\n",
    "<|end_of_text|>",
    "<|endoftext|>",
    "<|im_end|>",
    "###",
];

/// The default stop set as owned strings
pub fn default_stop_sequences() -> Vec<String> {
    DEFAULT_STOP_SEQUENCES.iter().map(|s| s.to_string()).collect()
}

/// Parameters for controlling generation
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingParameters {
    /// Temperature for randomness (0.0 to 2.0)
    pub temperature: f32,
    /// Top-p nucleus sampling, in (0.0, 1.0]
    pub top_p: f32,
    /// Top-k candidate tokens, at least 1
    pub top_k: u32,
    /// Presence penalty (-2.0 to 2.0)
    pub presence_penalty: f32,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Stop sequences, in priority order
    pub stop: Vec<String>,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            presence_penalty: DEFAULT_PRESENCE_PENALTY,
            max_tokens: None,
            stop: default_stop_sequences(),
        }
    }
}

impl SamplingParameters {
    /// Create a new parameters builder
    pub fn builder() -> SamplingParametersBuilder {
        SamplingParametersBuilder::default()
    }

    /// Check every parameter against its allowed range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Validation(format!(
                "temperature must be within [0, 2], got {}",
                self.temperature
            )));
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(Error::Validation(format!(
                "top_p must be within (0, 1], got {}",
                self.top_p
            )));
        }
        if self.top_k == 0 {
            return Err(Error::Validation("top_k must be positive".to_string()));
        }
        if !(-2.0..=2.0).contains(&self.presence_penalty) {
            return Err(Error::Validation(format!(
                "presence_penalty must be within [-2, 2], got {}",
                self.presence_penalty
            )));
        }
        if self.max_tokens == Some(0) {
            return Err(Error::Validation("max_tokens must be positive".to_string()));
        }
        Ok(())
    }
}

/// Builder for SamplingParameters
#[derive(Default)]
pub struct SamplingParametersBuilder {
    params: SamplingParameters,
}

impl SamplingParametersBuilder {
    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.params.temperature = temp;
        self
    }

    /// Set top-p
    pub fn top_p(mut self, p: f32) -> Self {
        self.params.top_p = p;
        self
    }

    /// Set top-k
    pub fn top_k(mut self, k: u32) -> Self {
        self.params.top_k = k;
        self
    }

    /// Set presence penalty
    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.params.presence_penalty = penalty;
        self
    }

    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.params.max_tokens = Some(tokens);
        self
    }

    /// Set stop sequences
    pub fn stop(mut self, sequences: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.stop = sequences.into_iter().map(Into::into).collect();
        self
    }

    /// Build the parameters without validation
    pub fn build(self) -> SamplingParameters {
        self.params
    }

    /// Build the parameters, rejecting out-of-range values
    pub fn try_build(self) -> Result<SamplingParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}

/// Everything a completion provider needs for one call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The fully rendered prompt
    pub prompt: String,
    /// The transcript the prompt was rendered from
    pub history: Vec<Turn>,
    /// Generation parameters
    pub parameters: SamplingParameters,
}

impl CompletionRequest {
    /// Create a request with default parameters
    pub fn new(prompt: impl Into<String>, history: Vec<Turn>) -> Self {
        Self {
            prompt: prompt.into(),
            history,
            parameters: SamplingParameters::default(),
        }
    }

    /// Replace the generation parameters
    pub fn with_parameters(mut self, parameters: SamplingParameters) -> Self {
        self.parameters = parameters;
        self
    }
}
