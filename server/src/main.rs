//! Petal storefront backend server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin petal-server
//! ```
//!
//! Configuration is read from environment variables (see `config.rs`):
//! `POLLINATIONS_API_KEY` enables the keyed generation endpoint,
//! `CATALOG_URL` switches the catalog to a remote source with built-in
//! fallback, and `ORDER_API_URL` forwards orders to a remote order API.
//!
//! # API Endpoints
//!
//! - `GET  /health` - Liveness check
//! - `GET  /api/v1/catalog/flowers` - Flower catalog
//! - `GET  /api/v1/catalog/presets` - Preset bouquets
//! - `POST /api/v1/preview` - Generate a bouquet preview image
//! - `POST /api/v1/orders` - Submit a finalized order

use petal_cart::{HttpOrderGateway, LocalOrderGateway, OrderGateway};
use petal_catalog::{CatalogSource, FallbackCatalog, RemoteCatalog, StaticCatalog};
use petal_core::environment::SystemClock;
use petal_imagegen::{CachingGenerator, ImageGenerator, PollinationsClient};
use petal_runtime::RetryPolicy;
use petal_server::{router, AppState, Config};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog: Arc<dyn CatalogSource> = match &config.catalog.remote_url {
        Some(url) => {
            info!(%url, "using remote catalog with built-in fallback");
            let remote = RemoteCatalog::new(url.clone(), config.catalog.fetch_timeout)?;
            Arc::new(FallbackCatalog::remote_or_builtin(remote))
        },
        None => {
            info!("using built-in catalog");
            Arc::new(StaticCatalog)
        },
    };

    let mut client = PollinationsClient::with_base_url(
        config.imagegen.base_url.clone(),
        config.imagegen.timeout,
    )?
    .with_model(config.imagegen.model.clone())
    .with_retry_policy(RetryPolicy::new().with_max_attempts(config.imagegen.retry_attempts));
    if let Some(key) = &config.imagegen.api_key {
        info!("generation API key configured");
        client = client.with_api_key(key.clone());
    }
    let generator: Arc<dyn ImageGenerator> = Arc::new(CachingGenerator::new(
        Arc::new(client),
        config.imagegen.cache_capacity,
        config.imagegen.cache_ttl,
    ));

    let gateway: Arc<dyn OrderGateway> = match &config.checkout.submit_url {
        Some(url) => {
            info!(%url, "forwarding orders to remote order API");
            Arc::new(HttpOrderGateway::new(url.clone(), config.checkout.timeout)?)
        },
        None => {
            info!("no order API configured, accepting orders locally");
            Arc::new(LocalOrderGateway::new(Arc::new(SystemClock)))
        },
    };

    let state = AppState::new(catalog, generator, gateway);
    let app = router::app_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
