//! Constants for provider implementations

/// Provider name reported in errors and logs
pub const TOGETHER_PROVIDER_NAME: &str = "together";

/// Default together.xyz completion endpoint
pub const TOGETHER_DEFAULT_ENDPOINT: &str = "https://api.together.xyz/v1/complete";

/// Default together.xyz model
pub const TOGETHER_DEFAULT_MODEL: &str = "microsoft/phi-2";

/// Environment variable holding the together.xyz API key
pub const TOGETHER_API_KEY_ENV: &str = "TOGETHER_API_KEY";

/// Environment variable overriding the together.xyz endpoint
pub const TOGETHER_ENDPOINT_ENV: &str = "TOGETHER_ENDPOINT";

/// Environment variable overriding the together.xyz model
pub const TOGETHER_MODEL_ENV: &str = "TOGETHER_MODEL";

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
