//! Environment dependencies for the configurator reducer.

use crate::placement::PlacementSource;
use petal_catalog::{Flower, FlowerId};
use petal_core::environment::Clock;
use petal_imagegen::ImageGenerator;
use std::collections::HashMap;
use std::sync::Arc;

/// Injected dependencies for [`crate::BuilderReducer`].
///
/// The catalog is a loaded snapshot of reference data: the reducer reads
/// flowers from it (preset resolution) and never mutates it.
#[derive(Clone)]
pub struct BuilderEnvironment {
    /// Catalog reference data, keyed by flower id
    pub catalog: Arc<HashMap<FlowerId, Flower>>,
    /// Clock for preview request timestamps
    pub clock: Arc<dyn Clock>,
    /// Placement source for newly added flowers
    pub placements: Arc<dyn PlacementSource>,
    /// Image-generation boundary for previews
    pub generator: Arc<dyn ImageGenerator>,
}

impl BuilderEnvironment {
    /// Creates an environment from a catalog snapshot
    #[must_use]
    pub fn new(
        flowers: Vec<Flower>,
        clock: Arc<dyn Clock>,
        placements: Arc<dyn PlacementSource>,
        generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        let catalog = flowers
            .into_iter()
            .map(|flower| (flower.id.clone(), flower))
            .collect();

        Self {
            catalog: Arc::new(catalog),
            clock,
            placements,
            generator,
        }
    }

    /// Looks up a flower in the catalog snapshot
    #[must_use]
    pub fn lookup(&self, id: &FlowerId) -> Option<&Flower> {
        self.catalog.get(id)
    }
}
