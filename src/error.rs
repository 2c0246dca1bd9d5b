//! Error types for image generation and preview loading.

use thiserror::Error;

/// Fallback when a non-success response carries no readable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Errors that can occur while generating an image.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No bearer credential in config or environment.
    #[error("no API key configured (set api.api_key or OPENAI_API_KEY)")]
    MissingCredential,

    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Success response without a usable image URL.
    #[error("No image returned from API")]
    NoImage,

    /// Success body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading the terminal preview of an image.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("download failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("download returned status {0}")]
    Status(u16),
    #[error("image exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
