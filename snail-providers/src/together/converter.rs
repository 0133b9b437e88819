//! Request conversion for together.xyz

use crate::traits::RequestConverter;
use serde_json::{json, Value};
use snail_core::{CompletionRequest, Error};

/// Converts completion requests to the together.xyz wire format
#[derive(Debug, Clone, Copy, Default)]
pub struct TogetherConverter;

impl RequestConverter for TogetherConverter {
    fn convert_request(&self, model: &str, request: &CompletionRequest) -> Result<Value, Error> {
        let params = &request.parameters;
        let history: Vec<Value> = request
            .history
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role().as_str(),
                    "content": turn.content(),
                })
            })
            .collect();

        let mut body = json!({
            "model": model,
            "prompt": request.prompt,
            "history": history,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "top_k": params.top_k,
            "presence_penalty": params.presence_penalty,
            "stop": params.stop,
        });

        if let Some(max_tokens) = params.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        Ok(body)
    }
}
