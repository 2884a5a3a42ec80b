//! REST client for the fal.ai synchronous gateway.
//!
//! One [`FalClient`] serves all four capabilities. Rate-limit retries live
//! here and nowhere else: callers see each capability call as a single
//! attempt that either produces a result or a [`ProviderError`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use menugen_core::menu::{build_menu_prompt, content_prompt, food_image_prompt};
use menugen_core::types::{MenuContent, MenuItem};

use crate::capability::{MenuProvider, ProviderError};
use crate::config::FalConfig;
use crate::parse::parse_menu_content;

/// Text-generation route (LLM router).
const TEXT_ENDPOINT: &str = "openrouter/router";
/// Menu image generation route.
const MENU_IMAGE_ENDPOINT: &str = "fal-ai/alpha-image-232/text-to-image";
/// Image edit route.
const EDIT_IMAGE_ENDPOINT: &str = "fal-ai/alpha-image-232/edit-image";
/// Single food photograph route.
const FOOD_IMAGE_ENDPOINT: &str = "fal-ai/beta-image-232";

/// Model requested through the LLM router.
const TEXT_MODEL: &str = "google/gemini-2.5-flash";

/// Maximum attempts per request when the provider rate-limits.
const MAX_RETRIES: u32 = 3;
/// Base delay between retry attempts; grows linearly per attempt.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// HTTP client for the fal.ai gateway.
pub struct FalClient {
    client: reqwest::Client,
    config: FalConfig,
}

/// One image asset in a generation response.
#[derive(Debug, Deserialize)]
struct ImageAsset {
    url: String,
}

/// Response of the image generation and edit routes.
#[derive(Debug, Deserialize)]
struct ImageResponse {
    images: Vec<ImageAsset>,
}

/// Response of the LLM router route.
#[derive(Debug, Deserialize)]
struct TextResponse {
    output: String,
}

impl FalClient {
    /// Create a client from configuration. The underlying reqwest client
    /// pools connections across all capability calls.
    pub fn new(config: FalConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// POST a JSON body to an endpoint and parse the JSON response.
    ///
    /// Retries up to [`MAX_RETRIES`] times on HTTP 429 with a linearly
    /// growing delay, then gives up with [`ProviderError::RateLimited`].
    /// Any other non-2xx status fails immediately with the raw body.
    async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);

        for attempt in 1..=MAX_RETRIES {
            let mut request = self.client.post(&url).json(body);
            if let Some(key) = &self.config.api_key {
                request = request.header(reqwest::header::AUTHORIZATION, format!("Key {key}"));
            }

            let response = request.send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                if attempt < MAX_RETRIES {
                    let delay = RETRY_DELAY * attempt;
                    tracing::warn!(
                        endpoint,
                        attempt,
                        delay_secs = delay.as_secs(),
                        "Provider rate limit hit, retrying",
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
                return Err(ProviderError::RateLimited);
            }

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable body>".to_string());
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            return Ok(response.json::<T>().await?);
        }

        Err(ProviderError::RateLimited)
    }

    /// Pull the first image URL out of an image-route response.
    fn first_image(response: ImageResponse) -> Result<String, ProviderError> {
        response
            .images
            .into_iter()
            .next()
            .map(|asset| asset.url)
            .ok_or_else(|| ProviderError::Parse("Response contains no images".to_string()))
    }
}

#[async_trait]
impl MenuProvider for FalClient {
    async fn generate_content(&self, prompt: &str) -> Result<MenuContent, ProviderError> {
        let body = serde_json::json!({
            "prompt": content_prompt(prompt),
            "model": TEXT_MODEL,
            "temperature": 1,
        });

        let response: TextResponse = self.post_json(TEXT_ENDPOINT, &body).await?;
        parse_menu_content(&response.output)
    }

    async fn generate_menu_image(
        &self,
        restaurant_name: &str,
        items: &[MenuItem],
        style: &str,
    ) -> Result<String, ProviderError> {
        let prompt = build_menu_prompt(restaurant_name, items, style);
        let body = serde_json::json!({ "prompt": prompt });

        let response: ImageResponse = self.post_json(MENU_IMAGE_ENDPOINT, &body).await?;
        Self::first_image(response)
    }

    async fn generate_food_image(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "prompt": food_image_prompt(name, description),
            "image_size": "square",
            "num_images": 1,
        });

        let response: ImageResponse = self.post_json(FOOD_IMAGE_ENDPOINT, &body).await?;
        Self::first_image(response)
    }

    async fn edit_image(
        &self,
        image_url: &str,
        instruction: &str,
    ) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "image_urls": [image_url],
            "prompt": instruction,
        });

        let response: ImageResponse = self.post_json(EDIT_IMAGE_ENDPOINT, &body).await?;
        Self::first_image(response)
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
