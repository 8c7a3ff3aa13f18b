//! # Petal Catalog
//!
//! Reference data for the Petal storefront: the flower catalog, flower
//! families, accessories, packaging options, and preset bouquets, plus the
//! [`source::CatalogSource`] boundary for loading that data from a remote
//! endpoint with a built-in fallback.
//!
//! Catalog records are immutable reference data: consumers (the bouquet
//! builder, the HTTP handlers) read them and never mutate them.

pub mod data;
pub mod money;
pub mod source;
pub mod types;

pub use money::Money;
pub use source::{CatalogError, CatalogSource, FallbackCatalog, RemoteCatalog, StaticCatalog};
pub use types::{
    Accessory, BoxShape, Flower, FlowerFamily, FlowerId, PackageKind, PackageSize, Placement,
    PresetBouquet, PresetFlower,
};
