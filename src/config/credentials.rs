//! Endpoint and credential resolution.
//!
//! Both values are resolved at request time: an explicit config value wins,
//! otherwise the process environment is consulted.

use super::types::{ApiConfig, DEFAULT_ENDPOINT};

/// Environment variable holding the generations endpoint.
pub const ENDPOINT_ENV_VAR: &str = "OPENAI_API_IMAGE_URL";
/// Environment variable holding the bearer credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Resolved target for one outbound request.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    pub endpoint: String,
    pub credential: Option<SecureString>,
}

impl ApiConfig {
    /// Resolve endpoint and credential against the process environment.
    pub fn resolve(&self) -> RequestTarget {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using a caller-supplied environment lookup.
    pub fn resolve_with<F>(&self, env: F) -> RequestTarget
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = non_empty(self.endpoint.clone())
            .or_else(|| non_empty(env(ENDPOINT_ENV_VAR)))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let credential = non_empty(self.api_key.clone())
            .or_else(|| non_empty(env(API_KEY_ENV_VAR)))
            .map(SecureString::new);

        RequestTarget {
            endpoint,
            credential,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
