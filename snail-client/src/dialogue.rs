//! A dialogue: transcript ownership plus one request/response cycle

use crate::options::InvokeOptions;
use snail_core::{
    Completion, CompletionProvider, CompletionRequest, DialogueId, Error, Formatter, Result,
    Turn,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Default bot name
pub const DEFAULT_BOT_NAME: &str = "bot";

/// Default user name
pub const DEFAULT_USER_NAME: &str = "user";

/// Default dialogue name
pub const DEFAULT_DIALOGUE_NAME: &str = "New Dialogue";

fn generate_dialogue_id() -> DialogueId {
    format!("dlg-{}", Uuid::new_v4().simple())
}

/// A conversation with a bot
///
/// The dialogue owns its transcript. Each [`Dialogue::invoke`] appends the
/// user's message, renders the whole transcript through the formatter, asks
/// the provider for a reply and records it as a bot turn.
///
/// # Examples
///
/// ```no_run
/// use snail_client::{Dialogue, InvokeOptions};
/// use snail_providers::Together;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = Together::from_env()?;
/// let mut dialogue = Dialogue::new(provider);
///
/// let reply = dialogue.invoke("Hello!", &InvokeOptions::default()).await?;
/// println!("{}", reply.content());
/// # Ok(())
/// # }
/// ```
pub struct Dialogue<P> {
    bot_name: String,
    user_name: String,
    dialogue_id: DialogueId,
    dialogue_name: String,
    transcript: Vec<Turn>,
    formatter: Arc<Formatter>,
    provider: P,
    last_completion: Option<Completion>,
}

impl<P: CompletionProvider> Dialogue<P> {
    /// Create a dialogue with default identity and formatter
    pub fn new(provider: P) -> Self {
        Self::builder(provider).build()
    }

    /// Create a new dialogue builder
    pub fn builder(provider: P) -> DialogueBuilder<P> {
        DialogueBuilder::new(provider)
    }

    /// The bot's name
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// The user's name
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The dialogue identifier
    pub fn dialogue_id(&self) -> &str {
        &self.dialogue_id
    }

    /// The human-readable dialogue name
    pub fn dialogue_name(&self) -> &str {
        &self.dialogue_name
    }

    /// The formatter used to render prompts
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// The completion provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The turns so far, in conversational order
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Number of turns in the transcript
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// The completion behind the most recent bot reply
    pub fn last_completion(&self) -> Option<&Completion> {
        self.last_completion.as_ref()
    }

    /// Append a user turn and return the stored turn
    pub fn append_user_turn(&mut self, content: impl Into<String>) -> &Turn {
        self.push(Turn::user(content))
    }

    /// Append a bot turn and return the stored turn
    pub fn append_bot_turn(&mut self, content: impl Into<String>) -> &Turn {
        self.push(Turn::bot(content))
    }

    fn push(&mut self, turn: Turn) -> &Turn {
        self.transcript.push(turn);
        &self.transcript[self.transcript.len() - 1]
    }

    /// Empty the transcript, keeping the dialogue's identity
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.last_completion = None;
        debug!(dialogue_id = %self.dialogue_id, "Cleared transcript");
    }

    /// Render the current transcript without calling the provider
    pub fn prompt(&self, stop_token: Option<&str>) -> String {
        self.formatter.render_prompt(&self.transcript, stop_token)
    }

    /// Send a user message and record the bot's reply
    ///
    /// Invalid options are rejected before the transcript is touched. After
    /// that the message is always appended. If the provider fails, times out
    /// or is cancelled, the error is logged and returned and the transcript
    /// keeps the unanswered user turn; `invoke(..).await.ok()` gives the
    /// "reply or nothing" view.
    pub async fn invoke(
        &mut self,
        message: impl Into<String>,
        options: &InvokeOptions,
    ) -> Result<Turn> {
        options.validate()?;

        if options.flush {
            self.clear();
        }
        self.append_user_turn(message);

        let prompt = self.prompt(options.stop_token());
        trace!(dialogue_id = %self.dialogue_id, prompt = %prompt, "Rendered prompt");

        let request = CompletionRequest {
            prompt,
            history: self.transcript.clone(),
            parameters: options.sampling_parameters(),
        };

        match self.complete(request, options).await {
            Ok(completion) => {
                let turn = self.append_bot_turn(completion.text.clone()).clone();
                debug!(
                    dialogue_id = %self.dialogue_id,
                    turns = self.transcript.len(),
                    stop_reason = ?completion.stop_reason,
                    "Recorded bot reply"
                );
                self.last_completion = Some(completion);
                Ok(turn)
            }
            Err(error) => {
                warn!(
                    dialogue_id = %self.dialogue_id,
                    error = %error,
                    "Completion failed, user turn left unanswered"
                );
                Err(error)
            }
        }
    }

    async fn complete(
        &self,
        request: CompletionRequest,
        options: &InvokeOptions,
    ) -> Result<Completion> {
        let call = async {
            match options.timeout {
                Some(limit) => tokio::time::timeout(limit, self.provider.complete(request))
                    .await
                    .unwrap_or(Err(Error::Timeout)),
                None => self.provider.complete(request).await,
            }
        };

        match &options.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::Cancelled),
                    result = call => result,
                }
            }
            None => call.await,
        }
    }
}

impl<P> std::fmt::Debug for Dialogue<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialogue")
            .field("bot_name", &self.bot_name)
            .field("user_name", &self.user_name)
            .field("dialogue_id", &self.dialogue_id)
            .field("dialogue_name", &self.dialogue_name)
            .field("transcript", &self.transcript)
            .finish_non_exhaustive()
    }
}

/// Builder for Dialogue
pub struct DialogueBuilder<P> {
    provider: P,
    bot_name: Option<String>,
    user_name: Option<String>,
    dialogue_id: Option<DialogueId>,
    dialogue_name: Option<String>,
    formatter: Option<Arc<Formatter>>,
}

impl<P: CompletionProvider> DialogueBuilder<P> {
    /// Create a builder around a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            bot_name: None,
            user_name: None,
            dialogue_id: None,
            dialogue_name: None,
            formatter: None,
        }
    }

    /// Set the bot's name
    pub fn bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = Some(name.into());
        self
    }

    /// Set the user's name
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Set the dialogue identifier
    pub fn dialogue_id(mut self, id: impl Into<String>) -> Self {
        self.dialogue_id = Some(id.into());
        self
    }

    /// Set the dialogue name
    pub fn dialogue_name(mut self, name: impl Into<String>) -> Self {
        self.dialogue_name = Some(name.into());
        self
    }

    /// Use a specific formatter
    ///
    /// Passing an `Arc` lets several dialogues share one formatter.
    pub fn formatter(mut self, formatter: impl Into<Arc<Formatter>>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    /// Build the dialogue
    pub fn build(self) -> Dialogue<P> {
        let dialogue = Dialogue {
            bot_name: self
                .bot_name
                .unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            user_name: self
                .user_name
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            dialogue_id: self.dialogue_id.unwrap_or_else(generate_dialogue_id),
            dialogue_name: self
                .dialogue_name
                .unwrap_or_else(|| DEFAULT_DIALOGUE_NAME.to_string()),
            transcript: Vec::new(),
            formatter: self.formatter.unwrap_or_default(),
            provider: self.provider,
            last_completion: None,
        };
        debug!(dialogue_id = %dialogue.dialogue_id, "Created dialogue");
        dialogue
    }
}
