mod credentials;
mod loader;
mod types;

pub use credentials::{RequestTarget, SecureString, API_KEY_ENV_VAR, ENDPOINT_ENV_VAR};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LayoutConfig, LoggingConfig, DEFAULT_ENDPOINT};
