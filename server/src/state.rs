//! Shared application state for handlers.

use petal_cart::OrderGateway;
use petal_catalog::CatalogSource;
use petal_imagegen::ImageGenerator;
use std::sync::Arc;

/// Dependencies shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog reference data source
    pub catalog: Arc<dyn CatalogSource>,
    /// Preview image generator (usually cache-wrapped)
    pub generator: Arc<dyn ImageGenerator>,
    /// Order submission gateway
    pub gateway: Arc<dyn OrderGateway>,
}

impl AppState {
    /// Creates application state from its collaborators
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        generator: Arc<dyn ImageGenerator>,
        gateway: Arc<dyn OrderGateway>,
    ) -> Self {
        Self {
            catalog,
            generator,
            gateway,
        }
    }
}
