//! # Petal Imagegen
//!
//! Client for the external image-generation service that renders bouquet
//! previews.
//!
//! The configurator serializes a configuration into a text prompt (see
//! `petal-builder`), and this crate turns that prompt into an image
//! reference: [`client::PollinationsClient`] talks to a Pollinations-style
//! HTTP API with bounded retries and timeouts, [`cache::CachingGenerator`]
//! serves repeated requests from an in-memory LRU+TTL cache, and
//! [`mock::MockGenerator`] keeps tests offline.

pub mod cache;
pub mod client;
pub mod error;
pub mod mock;
pub mod types;

pub use cache::{CachingGenerator, PreviewCache};
pub use client::PollinationsClient;
pub use error::GenerateError;
pub use types::{GenerateFuture, GenerateRequest, GeneratedImage, ImageGenerator};
