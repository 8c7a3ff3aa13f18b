//! Generation request and response types, and the generator trait.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// A request to generate one preview image
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Positive prompt describing the desired image
    pub prompt: String,
    /// Negative prompt describing what to avoid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Generation seed; different seeds produce different variations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Stable key for the preview cache; uncached when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_key: Option<String>,
}

impl GenerateRequest {
    /// Creates a request with the given prompt and dimensions
    #[must_use]
    pub fn new(prompt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            width,
            height,
            seed: None,
            cache_key: None,
        }
    }

    /// Attach a negative prompt
    #[must_use]
    pub fn with_negative_prompt(mut self, negative: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative.into());
        self
    }

    /// Attach a generation seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attach a cache key
    #[must_use]
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }
}

/// A generated preview image reference
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Image reference: a data URL or a remote URL
    pub image_url: String,
    /// Whether the image was served from the preview cache
    pub cached: bool,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Type alias for the boxed futures returned by [`ImageGenerator`]
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GeneratedImage, GenerateError>> + Send + 'a>>;

/// The image-generation boundary.
///
/// Uses explicit `Pin<Box<dyn Future>>` returns so the trait stays
/// dyn-compatible (`Arc<dyn ImageGenerator>` in environments).
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for the request
    fn generate(&self, request: GenerateRequest) -> GenerateFuture<'_>;
}
