use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default generations endpoint (OpenAI images API).
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/images/generations";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Outbound image API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Generations endpoint. Falls back to `OPENAI_API_IMAGE_URL`, then the
    /// OpenAI default, when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Bearer credential. Falls back to `OPENAI_API_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Value sent as the `User-Agent` client identifier.
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Total request timeout in seconds (default: 120).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Largest image body fetched for the preview (default: 16 MiB).
    #[serde(default = "default_max_download_bytes")]
    pub max_download_bytes: u64,
}

/// Responsive layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Terminal width (columns) at or above which the wide layout is used.
    #[serde(default = "default_breakpoint")]
    pub breakpoint_columns: u16,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<data_local_dir>/imagegen/imagegen.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_client_id() -> String {
    concat!("imagegen/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout() -> u32 {
    120
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_download_bytes() -> u64 {
    16 * 1024 * 1024
}

/// 768 logical pixels at 8 pixels per cell.
fn default_breakpoint() -> u16 {
    96
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            client_id: default_client_id(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_download_bytes: default_max_download_bytes(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_columns: default_breakpoint(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
