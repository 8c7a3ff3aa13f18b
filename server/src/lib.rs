//! # Petal Server
//!
//! The storefront's backend proxy: a thin axum surface over the catalog,
//! the preview generator, and the order gateway.
//!
//! The configurator itself runs client-side; this service supplies its
//! reference data, generates preview images (keeping the generation API
//! key server-side), and accepts finalized orders.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;
