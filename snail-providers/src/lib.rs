//! Provider implementations for hosted completion services

#![warn(missing_docs)]

pub mod builder;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;
pub mod utils;

// Provider implementations
pub mod together;

// Re-export provider types
pub use together::{Together, TogetherConfig};

// Re-export common traits
pub use builder::{ProviderBuilder, TogetherBuilder};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use traits::{RequestConverter, ResponseParser};
