//! Pollinations API client implementation.
//!
//! The service renders an image for `GET {base}/prompt/{prompt}` with the
//! dimensions, model, and seed passed as query parameters. Responses are
//! image bytes; the client converts them to a `data:` URL so callers can
//! hold the preview without another fetch.

use crate::error::GenerateError;
use crate::types::{GenerateFuture, GenerateRequest, GeneratedImage, ImageGenerator};
use base64::Engine;
use petal_runtime::RetryPolicy;
use reqwest::{StatusCode, Url};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";
const DEFAULT_MODEL: &str = "flux";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Pollinations image-generation client
#[derive(Clone)]
pub struct PollinationsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    retry: RetryPolicy,
}

impl PollinationsClient {
    /// Create a client against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRequest`] if the HTTP client cannot
    /// be constructed.
    pub fn new() -> Result<Self, GenerateError> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client against a specific endpoint with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRequest`] if the HTTP client cannot
    /// be constructed.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            retry: RetryPolicy::new(),
        })
    }

    /// Create a client, reading the optional API key from
    /// `POLLINATIONS_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidRequest`] if the HTTP client cannot
    /// be constructed.
    pub fn from_env() -> Result<Self, GenerateError> {
        let mut client = Self::new()?;
        client.api_key = std::env::var("POLLINATIONS_API_KEY").ok();
        Ok(client)
    }

    /// Use an explicit API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a specific retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn request_url(&self, request: &GenerateRequest) -> Result<Url, GenerateError> {
        let raw = format!(
            "{}/prompt/{}",
            self.base_url.trim_end_matches('/'),
            request.prompt
        );
        // Url::parse percent-encodes characters outside the path set
        // (spaces become %20); commas and parentheses pass through.
        let mut url =
            Url::parse(&raw).map_err(|e| GenerateError::InvalidRequest(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("width", &request.width.to_string());
            query.append_pair("height", &request.height.to_string());
            query.append_pair("model", &self.model);
            if let Some(negative) = &request.negative_prompt {
                query.append_pair("negative", negative);
            }
            if let Some(seed) = request.seed {
                query.append_pair("seed", &seed.to_string());
            }
            if let Some(key) = &self.api_key {
                // The key travels only in the request, never in logs.
                query.append_pair("key", key);
            }
        }

        Ok(url)
    }

    async fn attempt(&self, request: &GenerateRequest) -> Result<GeneratedImage, GenerateError> {
        let url = self.request_url(request)?;

        let response = self
            .client
            .get(url)
            .header("Accept", "image/*")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerateError::Timeout
                } else {
                    GenerateError::RequestFailed(e.to_string())
                }
            })?;

        match response.status() {
            StatusCode::OK => {
                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("image/png")
                    .to_string();

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| GenerateError::RequestFailed(e.to_string()))?;

                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

                Ok(GeneratedImage {
                    image_url: format!("data:{content_type};base64,{encoded}"),
                    cached: false,
                    width: request.width,
                    height: request.height,
                })
            },
            StatusCode::TOO_MANY_REQUESTS => Err(GenerateError::RateLimited),
            status => {
                let body = response.text().await.unwrap_or_default();
                let mut message = body;
                message.truncate(200);
                Err(GenerateError::ApiError {
                    status: status.as_u16(),
                    message,
                })
            },
        }
    }

    async fn generate_with_retries(
        &self,
        request: GenerateRequest,
    ) -> Result<GeneratedImage, GenerateError> {
        let mut attempt = 0;
        loop {
            match self.attempt(&request).await {
                Ok(image) => {
                    tracing::debug!(
                        width = request.width,
                        height = request.height,
                        prompt_len = request.prompt.len(),
                        "preview image generated"
                    );
                    return Ok(image);
                },
                Err(error) => {
                    attempt += 1;
                    if !error.is_retryable() || !self.retry.should_retry(attempt) {
                        return Err(error);
                    }
                    let delay = self.retry.delay_for_attempt(attempt - 1);
                    tracing::warn!(%error, attempt, ?delay, "generation attempt failed, retrying");
                    tokio::time::sleep(delay).await;
                },
            }
        }
    }
}

impl ImageGenerator for PollinationsClient {
    fn generate(&self, request: GenerateRequest) -> GenerateFuture<'_> {
        Box::pin(self.generate_with_retries(request))
    }
}
