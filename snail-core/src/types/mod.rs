//! Core types used throughout the snail library

pub mod completion;
pub mod request;
pub mod turn;

/// A dialogue identifier
pub type DialogueId = String;
