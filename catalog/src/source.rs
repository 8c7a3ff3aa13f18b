//! Catalog source boundary.
//!
//! The configurator consumes catalog records supplied by an external data
//! source. Three implementations are provided: the built-in data, a remote
//! HTTP fetch with a bounded timeout, and a fallback combinator that serves
//! the built-in data when the remote source fails.

use crate::data;
use crate::types::{Flower, PresetBouquet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network request failed (connect error, timeout, etc.)
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    /// Endpoint answered with a non-success status
    #[error("Catalog endpoint returned status {0}")]
    BadStatus(u16),

    /// Response body could not be decoded
    #[error("Catalog response could not be decoded: {0}")]
    DecodeFailed(String),
}

/// Type alias for the boxed futures returned by [`CatalogSource`]
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CatalogError>> + Send + 'a>>;

/// A source of catalog reference data.
///
/// Uses explicit `Pin<Box<dyn Future>>` returns so the trait stays
/// dyn-compatible (`Arc<dyn CatalogSource>`).
pub trait CatalogSource: Send + Sync {
    /// Fetch the flower catalog
    fn fetch_flowers(&self) -> CatalogFuture<'_, Vec<Flower>>;

    /// Fetch the preset bouquets
    fn fetch_presets(&self) -> CatalogFuture<'_, Vec<PresetBouquet>>;
}

/// Built-in catalog data, always available
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn fetch_flowers(&self) -> CatalogFuture<'_, Vec<Flower>> {
        Box::pin(async { Ok(data::builtin_flowers()) })
    }

    fn fetch_presets(&self) -> CatalogFuture<'_, Vec<PresetBouquet>> {
        Box::pin(async { Ok(data::builtin_presets()) })
    }
}

/// Remote catalog endpoint.
///
/// Expects `GET {base_url}/flowers` and `GET {base_url}/presets` to return
/// JSON arrays of the corresponding records.
#[derive(Clone, Debug)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    /// Creates a remote catalog client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RequestFailed`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn fetch_json<T>(&self, path: &str) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::BadStatus(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::DecodeFailed(e.to_string()))
    }
}

impl CatalogSource for RemoteCatalog {
    fn fetch_flowers(&self) -> CatalogFuture<'_, Vec<Flower>> {
        Box::pin(self.fetch_json("flowers"))
    }

    fn fetch_presets(&self) -> CatalogFuture<'_, Vec<PresetBouquet>> {
        Box::pin(self.fetch_json("presets"))
    }
}

/// Serves from a primary source and falls back on failure.
///
/// The usual composition is `RemoteCatalog` over `StaticCatalog`, giving
/// the bounded-timeout fetch with a local fallback.
#[derive(Clone)]
pub struct FallbackCatalog {
    primary: Arc<dyn CatalogSource>,
    fallback: Arc<dyn CatalogSource>,
}

impl FallbackCatalog {
    /// Creates a fallback composition
    #[must_use]
    pub fn new(primary: Arc<dyn CatalogSource>, fallback: Arc<dyn CatalogSource>) -> Self {
        Self { primary, fallback }
    }

    /// Remote source over the built-in data
    #[must_use]
    pub fn remote_or_builtin(remote: RemoteCatalog) -> Self {
        Self::new(Arc::new(remote), Arc::new(StaticCatalog))
    }
}

impl CatalogSource for FallbackCatalog {
    fn fetch_flowers(&self) -> CatalogFuture<'_, Vec<Flower>> {
        Box::pin(async {
            match self.primary.fetch_flowers().await {
                Ok(flowers) => Ok(flowers),
                Err(error) => {
                    tracing::warn!(%error, "primary catalog source failed, serving fallback flowers");
                    self.fallback.fetch_flowers().await
                },
            }
        })
    }

    fn fetch_presets(&self) -> CatalogFuture<'_, Vec<PresetBouquet>> {
        Box::pin(async {
            match self.primary.fetch_presets().await {
                Ok(presets) => Ok(presets),
                Err(error) => {
                    tracing::warn!(%error, "primary catalog source failed, serving fallback presets");
                    self.fallback.fetch_presets().await
                },
            }
        })
    }
}

/// Mock sources for tests
pub mod mock {
    use super::{CatalogError, CatalogFuture, CatalogSource};
    use crate::types::{Flower, PresetBouquet};

    /// A source that always fails, for exercising fallback paths
    #[derive(Clone, Copy, Debug, Default)]
    pub struct FailingCatalog;

    impl CatalogSource for FailingCatalog {
        fn fetch_flowers(&self) -> CatalogFuture<'_, Vec<Flower>> {
            Box::pin(async { Err(CatalogError::RequestFailed("mock failure".to_string())) })
        }

        fn fetch_presets(&self) -> CatalogFuture<'_, Vec<PresetBouquet>> {
            Box::pin(async { Err(CatalogError::RequestFailed("mock failure".to_string())) })
        }
    }
}
