//! A dialogue that several tasks can drive

use crate::dialogue::Dialogue;
use crate::options::InvokeOptions;
use snail_core::{CompletionProvider, Result, Turn};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// A [`Dialogue`] behind an async mutex
///
/// `invoke` holds the lock for the whole cycle, from appending the user
/// turn to recording the reply, so concurrent callers are served one at a
/// time and never render a prompt from a half-updated transcript.
pub struct SharedDialogue<P> {
    inner: Arc<Mutex<Dialogue<P>>>,
}

impl<P> Clone for SharedDialogue<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: CompletionProvider> SharedDialogue<P> {
    /// Wrap a dialogue
    pub fn new(dialogue: Dialogue<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dialogue)),
        }
    }

    /// Send a user message and record the reply under the lock
    pub async fn invoke(&self, message: impl Into<String>, options: &InvokeOptions) -> Result<Turn> {
        let mut dialogue = self.inner.lock().await;
        dialogue.invoke(message, options).await
    }

    /// A copy of the current transcript
    pub async fn transcript(&self) -> Vec<Turn> {
        self.inner.lock().await.transcript().to_vec()
    }

    /// Empty the transcript
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    /// Lock the dialogue for direct access
    pub async fn lock(&self) -> MutexGuard<'_, Dialogue<P>> {
        self.inner.lock().await
    }
}

impl<P: CompletionProvider> From<Dialogue<P>> for SharedDialogue<P> {
    fn from(dialogue: Dialogue<P>) -> Self {
        Self::new(dialogue)
    }
}
