//! Dialogue state and request orchestration
//!
//! A [`Dialogue`] owns a transcript, renders it through a
//! [`Formatter`](snail_core::Formatter) and hands the prompt to any
//! [`CompletionProvider`](snail_core::CompletionProvider).

mod dialogue;
mod options;
mod shared;

pub use dialogue::{
    Dialogue, DialogueBuilder, DEFAULT_BOT_NAME, DEFAULT_DIALOGUE_NAME, DEFAULT_USER_NAME,
};
pub use options::InvokeOptions;
pub use shared::SharedDialogue;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Dialogue, InvokeOptions, SharedDialogue};
    pub use snail_core::{Formatter, Role, Turn};
}
