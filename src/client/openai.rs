//! HTTP client for the OpenAI-compatible generations endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use crate::client::types::{error_message, ImageRequest, ImageResponse};
use crate::client::ImageGenerator;
use crate::config::ApiConfig;
use crate::error::{GenerateError, PreviewError, Result};

/// Generator backed by a `reqwest` client.
///
/// The endpoint and credential are resolved on every call, so changes to the
/// environment between requests are picked up.
pub struct OpenAiImageClient {
    client: reqwest::Client,
    api: ApiConfig,
}

impl OpenAiImageClient {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .build()?;
        Ok(Self { client, api })
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let target = self.api.resolve();
        let credential = target
            .credential
            .ok_or(GenerateError::MissingCredential)?;

        tracing::debug!(endpoint = %target.endpoint, "sending generation request");

        let response = self
            .client
            .post(&target.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", credential.expose()))
            .header(USER_AGENT, self.api.client_id.as_str())
            .json(&ImageRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let text = response.text().await?;
        let body: ImageResponse = serde_json::from_str(&text)?;
        body.first_url().ok_or(GenerateError::NoImage)
    }

    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, PreviewError> {
        let limit = self.api.max_download_bytes;
        let mut response = self
            .client
            .get(url)
            .header(USER_AGENT, self.api.client_id.as_str())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PreviewError::Status(status.as_u16()));
        }
        if response.content_length().is_some_and(|len| len > limit) {
            return Err(PreviewError::TooLarge { limit });
        }

        // Content-Length may be absent, so the cap is enforced while reading too.
        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if (bytes.len() + chunk.len()) as u64 > limit {
                return Err(PreviewError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}
