//! HTTP client for an OpenAI-compatible `images/generations` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::generation::ImageGenerator;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/";

/// Client for the hosted image-generation API.
///
/// Use [`ImageClient::new`] for production or [`ImageClient::with_base_url`]
/// to point at a mock server in tests.
pub struct ImageClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'static str,
    quality: &'static str,
    style: &'static str,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

impl ImageClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GenerationError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GenerationError::InvalidEndpoint`] if the
    /// base URL is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("advision/0.1 (ad-analysis)")
            .build()?;

        let raw = format!("{}/v1/images/generations", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw)
            .map_err(|e| GenerationError::InvalidEndpoint(format!("'{raw}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint,
        })
    }

    /// Pulls `data[0].url` out of the response body.
    fn first_url(body: &str) -> Result<String, GenerationError> {
        let envelope: ImageResponse =
            serde_json::from_str(body).map_err(|e| GenerationError::Deserialize {
                context: "images/generations response".to_string(),
                source: e,
            })?;

        envelope
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .filter(|url| !url.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn render(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ImageRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: "1024x1024",
            quality: "standard",
            style: "natural",
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Self::first_url(&body)
    }
}
