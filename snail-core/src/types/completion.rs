//! Completion types returned by providers

use serde_json::Value;
use std::fmt;

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Natural end of the answer (end-of-sequence token)
    Stop,
    /// Hit the max_tokens limit
    Length,
    /// Hit one of the requested stop sequences
    StopSequence,
    /// Any reason the provider reports that has no dedicated variant
    Other(String),
}

impl StopReason {
    /// Map a provider-reported reason onto a variant
    pub fn parse(reason: &str) -> Self {
        match reason {
            "stop" | "eos" | "end_turn" => StopReason::Stop,
            "length" | "max_tokens" => StopReason::Length,
            "stop_sequence" => StopReason::StopSequence,
            other => StopReason::Other(other.to_string()),
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Stop => write!(f, "stop"),
            StopReason::Length => write!(f, "length"),
            StopReason::StopSequence => write!(f, "stop_sequence"),
            StopReason::Other(reason) => write!(f, "{}", reason),
        }
    }
}

/// Generated text plus what the provider said about it
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// The generated text
    pub text: String,
    /// Why generation ended, when the provider says
    pub stop_reason: Option<StopReason>,
    /// The raw provider payload
    pub raw: Value,
}

impl Completion {
    /// Create a completion carrying only text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stop_reason: None,
            raw: Value::Null,
        }
    }

    /// Attach a stop reason
    pub fn with_stop_reason(mut self, reason: StopReason) -> Self {
        self.stop_reason = Some(reason);
        self
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_reason_parse() {
        assert_eq!(StopReason::parse("stop"), StopReason::Stop);
        assert_eq!(StopReason::parse("eos"), StopReason::Stop);
        assert_eq!(StopReason::parse("length"), StopReason::Length);
        assert_eq!(StopReason::parse("stop_sequence"), StopReason::StopSequence);
        assert_eq!(
            StopReason::parse("content_filter"),
            StopReason::Other("content_filter".to_string())
        );
        assert_eq!(StopReason::parse("content_filter").to_string(), "content_filter");
    }

    #[test]
    fn test_completion_text() {
        let completion = Completion::text("Hi there").with_stop_reason(StopReason::Stop);
        assert_eq!(completion.to_string(), "Hi there");
        assert_eq!(completion.stop_reason, Some(StopReason::Stop));
        assert!(completion.raw.is_null());
    }
}
