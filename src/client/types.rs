//! Wire types for the image generations API.

use serde::{Deserialize, Serialize};

use crate::error::UNKNOWN_ERROR_MESSAGE;

/// Number of images requested per generation.
pub const IMAGE_COUNT: u32 = 1;
/// Requested image dimensions.
pub const IMAGE_SIZE: &str = "512x512";

/// Body of `POST /v1/images/generations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
        }
    }
}

/// Success body. Extra fields (`created`, `revised_prompt`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub data: Option<Vec<ImageData>>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageResponse {
    /// URL of the first result, if the API returned one.
    pub fn first_url(self) -> Option<String> {
        self.data?
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .filter(|url| !url.is_empty())
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extracts the human-readable message from an error body, falling back to
/// [`UNKNOWN_ERROR_MESSAGE`] when the body is missing, unparseable or empty.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}
