//! Outbound image generation.

mod openai;
pub mod types;

use async_trait::async_trait;

use crate::error::{PreviewError, Result};

pub use openai::OpenAiImageClient;
pub use types::{ImageRequest, ImageResponse, IMAGE_COUNT, IMAGE_SIZE};

/// Source of generated images.
///
/// `generate` issues exactly one request and yields the URL of the first
/// result. `download` fetches the bytes behind a URL for the terminal preview.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, PreviewError>;
}
