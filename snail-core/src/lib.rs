//! Core traits and types for the snail dialogue library
//!
//! This crate holds everything that does not touch the network: transcript
//! types, sampling parameters, prompt templates, the [`Formatter`] and the
//! [`CompletionProvider`] trait that HTTP providers implement.

#![warn(missing_docs)]

pub mod error;
pub mod formatter;
pub mod provider;
pub mod template;
pub mod types;

#[cfg(test)]
mod proptests;

// Re-export commonly used items
pub use error::{Error, Result};
pub use formatter::{Formatter, FormatterBuilder};
pub use provider::CompletionProvider;
pub use template::{Placeholder, Template, TemplateKind};
pub use types::{
    completion::{Completion, StopReason},
    request::{
        default_stop_sequences, CompletionRequest, SamplingParameters,
        SamplingParametersBuilder, DEFAULT_PRESENCE_PENALTY, DEFAULT_STOP_SEQUENCES,
        DEFAULT_TEMPERATURE, DEFAULT_TOP_K, DEFAULT_TOP_P,
    },
    turn::{Role, Turn},
    DialogueId,
};
