//! Configurator state and actions.

use chrono::{DateTime, Utc};
use petal_catalog::{
    Accessory, BoxShape, Flower, FlowerId, Money, PackageKind, PackageSize, Placement,
    PresetBouquet,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog flower the user has selected, with quantity and canvas
/// placement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// The selected flower
    pub flower: Flower,
    /// How many stems; always at least 1 (quantity 0 removes the entry)
    pub quantity: u32,
    /// Where the flower sits on the canvas
    pub placement: Placement,
}

impl Selection {
    /// Creates a selection
    #[must_use]
    pub const fn new(flower: Flower, quantity: u32, placement: Placement) -> Self {
        Self {
            flower,
            quantity,
            placement,
        }
    }

    /// Price of this line (`unit price × quantity`)
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.flower.price.times(self.quantity)
    }
}

/// Canvas dimensions used for random placement bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Packaging options for the arrangement.
///
/// Packaging shapes the generated preview prompt; it never affects the
/// derived total, which is a function of the selection map alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Packaging {
    /// Box or hand-tied wrap
    pub kind: PackageKind,
    /// Box shape; for wraps, `Heart` selects the heart-shaped arrangement
    pub shape: BoxShape,
    /// Arrangement size
    pub size: PackageSize,
    /// Box material / wrapping paper color
    pub color: String,
    /// Glitter dust on the petals
    pub glitter: bool,
    /// Satin ribbon around the box
    pub ribbon: bool,
    /// Small add-ons placed with the arrangement
    pub accessories: Vec<Accessory>,
}

impl Default for Packaging {
    fn default() -> Self {
        Self {
            kind: PackageKind::Wrap,
            shape: BoxShape::Square,
            size: PackageSize::Medium,
            color: "white".to_string(),
            glitter: false,
            ribbon: false,
            accessories: Vec::new(),
        }
    }
}

/// Where the preview image stands.
///
/// `Pending` doubles as the re-submission lock: while a generation is in
/// flight, further preview requests are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum PreviewStatus {
    /// No preview requested yet
    #[default]
    Idle,
    /// Generation in flight
    Pending {
        /// When the request was dispatched
        requested_at: DateTime<Utc>,
    },
    /// Preview available
    Ready {
        /// Image reference (data URL or remote URL)
        image_url: String,
        /// Whether it came from the preview cache
        cached: bool,
    },
    /// Generation failed; the configuration itself is untouched
    Failed {
        /// User-facing error description
        error: String,
    },
}

impl PreviewStatus {
    /// Whether a generation is currently in flight
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

/// State of the bouquet configurator
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderState {
    /// Current selections, keyed by flower id
    pub selections: HashMap<FlowerId, Selection>,
    /// Derived total price; always `Σ price × quantity` over `selections`
    pub total: Money,
    /// Canvas bounds for placement generation
    pub canvas: CanvasSize,
    /// Packaging options
    pub packaging: Packaging,
    /// Preview image status
    pub preview: PreviewStatus,
    /// Last validation error (if any)
    pub last_error: Option<String>,
}

impl BuilderState {
    /// Creates an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct flowers selected
    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Total number of stems across all selections
    #[must_use]
    pub fn stem_count(&self) -> u32 {
        self.selections.values().map(|s| s.quantity).sum()
    }

    /// Returns a selection by flower id
    #[must_use]
    pub fn get(&self, id: &FlowerId) -> Option<&Selection> {
        self.selections.get(id)
    }

    /// Checks whether a flower is selected
    #[must_use]
    pub fn exists(&self, id: &FlowerId) -> bool {
        self.selections.contains_key(id)
    }

    /// The total derived from the current selection map.
    ///
    /// Every mutating reducer arm assigns `state.total = state.derived_total()`
    /// after touching the map.
    #[must_use]
    pub fn derived_total(&self) -> Money {
        self.selections.values().map(Selection::line_total).sum()
    }
}

/// Actions accepted by the configurator reducer.
///
/// User commands plus the two feedback actions produced by the preview
/// generation effect.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BuilderAction {
    /// Add one stem of a flower (or bump an existing selection by 1)
    AddFlower {
        /// The flower to add
        flower: Flower,
    },
    /// Remove a selection entirely, whatever its quantity
    RemoveFlower {
        /// Flower to remove
        id: FlowerId,
    },
    /// Overwrite a selection's quantity; 0 removes the selection
    SetQuantity {
        /// Flower to update
        id: FlowerId,
        /// New quantity
        quantity: u32,
    },
    /// Reset the arrangement
    ClearAll,
    /// Replace all selections with a preset bouquet
    LoadPreset {
        /// The preset to load
        preset: PresetBouquet,
    },
    /// Move a selected flower on the canvas
    Reposition {
        /// Flower to move
        id: FlowerId,
        /// New placement
        placement: Placement,
    },
    /// Change packaging options
    SetPackaging {
        /// New packaging
        packaging: Packaging,
    },
    /// Ask for an AI preview of the current arrangement
    RequestPreview {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Generation seed; also part of the cache key
        seed: u64,
    },
    /// Feedback: the preview arrived
    PreviewGenerated {
        /// Image reference
        image_url: String,
        /// Whether it came from the preview cache
        cached: bool,
    },
    /// Feedback: preview generation failed
    PreviewFailed {
        /// User-facing error description
        error: String,
    },
}
