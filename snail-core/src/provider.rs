//! Core provider trait for completion calls

use crate::error::Result;
use crate::types::completion::Completion;
use crate::types::request::CompletionRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// The seam between a dialogue and the service that generates text
///
/// Implementations send the rendered prompt and sampling parameters to a
/// model and return the generated text with its stop reason. Failures are
/// returned as errors; deciding whether to absorb them is up to the caller.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a request and get the complete generated text
    async fn complete(&self, request: CompletionRequest) -> Result<Completion>;
}

#[async_trait]
impl<P: CompletionProvider + ?Sized> CompletionProvider for Arc<P> {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        (**self).complete(request).await
    }
}

#[async_trait]
impl<P: CompletionProvider + ?Sized> CompletionProvider for Box<P> {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        (**self).complete(request).await
    }
}
