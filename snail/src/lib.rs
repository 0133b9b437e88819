//! snail - prompt formatting and dialogue state for hosted completion models
//!
//! This crate ties together the snail workspace: transcript types and the
//! prompt [`Formatter`] from `snail-core`, the together.xyz provider from
//! `snail-providers`, and the [`client::Dialogue`] from `snail-client`.
//!
//! # Quick Start
//!
//! ```no_run
//! # use snail::prelude::*;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), snail::Error> {
//! #     #[cfg(all(feature = "providers", feature = "client"))]
//! #     {
//!     // Create a provider from TOGETHER_API_KEY
//!     let provider = snail::providers::Together::from_env()?;
//!
//!     // Talk to it
//!     let mut dialogue = Dialogue::new(provider);
//!     let reply = dialogue.invoke("Hello, world!", &InvokeOptions::default()).await?;
//!     println!("{}", reply.content());
//! #     }
//! #     Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core types
pub use snail_core::*;

// Re-export feature-gated modules
#[cfg(feature = "providers")]
#[cfg_attr(docsrs, doc(cfg(feature = "providers")))]
pub mod providers {
    //! Provider implementations
    pub use snail_providers::*;
}

#[cfg(feature = "client")]
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
pub mod client {
    //! Dialogue state and orchestration
    pub use snail_client::*;
}

/// Prelude module for convenient imports
pub mod prelude {

    pub use snail_core::{
        Completion, CompletionProvider, CompletionRequest, Error, Formatter, Role,
        SamplingParameters, StopReason, Turn,
    };

    #[cfg(feature = "providers")]
    pub use snail_providers::{Together, TogetherConfig};

    #[cfg(feature = "client")]
    pub use snail_client::{Dialogue, InvokeOptions, SharedDialogue};
}
