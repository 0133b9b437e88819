//! together.xyz serverless completion provider

mod config;
mod converter;
mod parser;
mod provider;

#[cfg(test)]
mod tests;

pub use config::TogetherConfig;
pub use provider::Together;
