//! Tests for the together.xyz provider
//!
//! HTTP interactions run against a local wiremock server.

#[cfg(test)]
mod provider_tests {
    use super::super::*;
    use crate::builder::TogetherBuilder;
    use crate::http::ReqwestClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use snail_core::{
        CompletionProvider, CompletionRequest, Error, SamplingParameters, StopReason, Turn,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> Together {
        TogetherBuilder::new("test-key")
            .endpoint(format!("{}/v1/complete", server.uri()))
            .build()
            .unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new("SYS\nQ: Hello\nA:", vec![Turn::user("Hello")])
    }

    #[test_log::test(tokio::test)]
    async fn test_together_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/complete"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"content": "Hi there"}],
                "stop_reason": "stop"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let completion = provider_for(&server).complete(request()).await.unwrap();
        assert_eq!(completion.text, "Hi there");
        assert_eq!(completion.stop_reason, Some(StopReason::Stop));
        assert_eq!(completion.raw["choices"][0]["content"], "Hi there");
    }

    #[test_log::test(tokio::test)]
    async fn test_together_sends_wire_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "model": "microsoft/phi-2",
                "prompt": "SYS\nQ: Hello\nA:",
                "history": [{"role": "user", "content": "Hello"}],
                "top_k": 7,
                "stop": ["\n"],
                "max_tokens": 16
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"text": "ok"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = SamplingParameters::builder()
            .top_k(7)
            .stop(["\n"])
            .max_tokens(16)
            .build();
        let completion = provider_for(&server)
            .complete(request().with_parameters(params))
            .await
            .unwrap();
        assert_eq!(completion.text, "ok");
        assert_eq!(completion.stop_reason, None);
    }

    #[test_log::test(tokio::test)]
    async fn test_together_nested_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": {
                    "choices": [{"text": "nested", "finish_reason": "length"}]
                }
            })))
            .mount(&server)
            .await;

        let completion = provider_for(&server).complete(request()).await.unwrap();
        assert_eq!(completion.text, "nested");
        assert_eq!(completion.stop_reason, Some(StopReason::Length));
    }

    #[test_log::test(tokio::test)]
    async fn test_together_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let err = provider_for(&server).complete(request()).await.unwrap_err();
        match err {
            Error::Provider {
                provider,
                status,
                message,
            } => {
                assert_eq!(provider, "together");
                assert_eq!(status, 500);
                assert_eq!(message, "internal");
            }
            e => panic!("Expected Provider error, got: {:?}", e),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_together_no_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = provider_for(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, Error::Response { .. }));
    }

    #[test_log::test(tokio::test)]
    async fn test_together_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test_log::test(tokio::test)]
    async fn test_together_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": [{"content": "late"}]}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = Arc::new(ReqwestClient::with_timeout(Duration::from_millis(100)).unwrap());
        let provider = TogetherBuilder::new("test-key")
            .endpoint(format!("{}/v1/complete", server.uri()))
            .with_client(client)
            .build()
            .unwrap();

        let err = provider.complete(request()).await.unwrap_err();
        assert!(matches!(err, Error::Timeout));
        assert!(err.is_transport());
    }

    #[test_log::test(tokio::test)]
    async fn test_together_connection_refused() {
        let provider = TogetherBuilder::new("test-key")
            .endpoint("http://127.0.0.1:1/v1/complete")
            .build()
            .unwrap();

        let err = provider.complete(request()).await.unwrap_err();
        match err {
            Error::Network { .. } => {}
            e => panic!("Expected Network error, got: {:?}", e),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::super::config::TogetherConfig;
    use crate::builder::TogetherBuilder;
    use crate::constants::{TOGETHER_DEFAULT_ENDPOINT, TOGETHER_DEFAULT_MODEL};
    use snail_core::Error;

    #[test]
    fn test_config_default() {
        let config = TogetherConfig::new("key");
        assert_eq!(config.endpoint, TOGETHER_DEFAULT_ENDPOINT);
        assert_eq!(config.model, TOGETHER_DEFAULT_MODEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_key() {
        let err = TogetherConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(TogetherBuilder::new("").build().is_err());
    }

    #[test]
    fn test_config_rejects_bad_endpoint() {
        let config = TogetherConfig::new("key").with_endpoint("not a url");
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = TogetherConfig::new("key").with_endpoint("ftp://example.com/complete");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_debug_hides_key() {
        let config = TogetherConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}

#[cfg(test)]
mod converter_tests {
    use super::super::converter::TogetherConverter;
    use crate::traits::RequestConverter;
    use serde_json::json;
    use snail_core::{CompletionRequest, SamplingParameters, Turn};

    #[test]
    fn test_convert_request_defaults() {
        let request = CompletionRequest::new("p", vec![Turn::user("a"), Turn::bot("b")]);
        let body = TogetherConverter
            .convert_request("microsoft/phi-2", &request)
            .unwrap();

        assert_eq!(body["model"], "microsoft/phi-2");
        assert_eq!(body["prompt"], "p");
        assert_eq!(
            body["history"],
            json!([
                {"role": "user", "content": "a"},
                {"role": "bot", "content": "b"}
            ])
        );
        assert_eq!(body["top_k"], 42);
        assert_eq!(body["stop"].as_array().map(Vec::len), Some(6));
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_convert_request_empty_stop() {
        let params = SamplingParameters::builder()
            .stop(Vec::<String>::new())
            .max_tokens(8)
            .build();
        let request = CompletionRequest::new("p", vec![]).with_parameters(params);
        let body = TogetherConverter.convert_request("m", &request).unwrap();

        assert_eq!(body["stop"], json!([]));
        assert_eq!(body["max_tokens"], 8);
    }
}

#[cfg(test)]
mod parser_tests {
    use super::super::parser::TogetherParser;
    use crate::traits::ResponseParser;
    use serde_json::json;
    use snail_core::{Error, StopReason};

    #[test]
    fn test_top_level_stop_reason_wins() {
        let completion = TogetherParser
            .parse_response(json!({
                "choices": [{"content": "x", "finish_reason": "length"}],
                "stop_reason": "stop_sequence"
            }))
            .unwrap();
        assert_eq!(completion.stop_reason, Some(StopReason::StopSequence));
    }

    #[test]
    fn test_missing_content_is_an_error() {
        let err = TogetherParser
            .parse_response(json!({"choices": [{"index": 0}]}))
            .unwrap_err();
        match err {
            Error::Response { message } => assert_eq!(message, "choice has no content"),
            other => panic!("Expected Response error, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_content_is_kept() {
        let completion = TogetherParser
            .parse_response(json!({"choices": [{"content": ""}]}))
            .unwrap();
        assert_eq!(completion.text, "");
    }
}
