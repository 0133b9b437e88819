//! Response parsing for together.xyz

use crate::constants::TOGETHER_PROVIDER_NAME;
use crate::error;
use crate::traits::ResponseParser;
use serde::Deserialize;
use serde_json::Value;
use snail_core::{Completion, Error, StopReason};

/// Parses together.xyz responses
#[derive(Debug, Clone, Copy, Default)]
pub struct TogetherParser;

impl ResponseParser for TogetherParser {
    fn parse_response(&self, value: Value) -> Result<Completion, Error> {
        let response: TogetherResponse =
            serde_json::from_value(value.clone()).map_err(error::serialization_error)?;

        // Older deployments nest the choices under "output".
        let (choices, nested_reason) = if response.choices.is_empty() {
            response
                .output
                .map(|o| (o.choices, o.stop_reason))
                .unwrap_or_default()
        } else {
            (response.choices, None)
        };

        let choice = choices.into_iter().next().ok_or_else(|| Error::Response {
            message: format!("No choices in {} response", TOGETHER_PROVIDER_NAME),
        })?;

        let stop_reason = response
            .stop_reason
            .or(nested_reason)
            .or(choice.finish_reason)
            .map(|reason| StopReason::parse(&reason));

        let text = choice.content.ok_or_else(|| Error::Response {
            message: "choice has no content".to_string(),
        })?;

        Ok(Completion {
            text,
            stop_reason,
            raw: value,
        })
    }
}

// Response structures
#[derive(Deserialize)]
struct TogetherResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    stop_reason: Option<String>,
    output: Option<Output>,
}

#[derive(Deserialize)]
struct Output {
    #[serde(default)]
    choices: Vec<Choice>,
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(alias = "text")]
    content: Option<String>,
    finish_reason: Option<String>,
}
