//! Domain types shared across the storefront.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a catalog flower (e.g. `rose-red`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowerId(String);

impl FlowerId {
    /// Creates a `FlowerId` from a string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FlowerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single flower in the catalog.
///
/// Immutable reference data; the builder reads prices from here and never
/// stores a price anywhere else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// Catalog identifier
    pub id: FlowerId,
    /// Display name
    pub name: String,
    /// Family identifier (e.g. `roses`, `tulips`)
    pub family: String,
    /// Color name used for prompt rendering (e.g. `red`, `peach`)
    pub color: String,
    /// Price per stem
    pub price: Money,
    /// Shop category (e.g. `roses`, `seasonal`, `exotic`)
    pub category: String,
    /// Product image path
    pub image_url: String,
    /// Short description
    pub description: String,
}

/// A flower family offered in the configurator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowerFamily {
    /// Family identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Emoji shown in the family picker
    pub icon: String,
}

/// Small add-ons that can accompany an arrangement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessory {
    /// Tiny golden crown
    Crown,
    /// Graduation cap
    GraduationCap,
    /// Plush bear
    Bear,
    /// Chocolate box
    Chocolate,
}

impl Accessory {
    /// Stable slug used in cache keys and wire formats
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Crown => "crown",
            Self::GraduationCap => "graduation-hat",
            Self::Bear => "bear",
            Self::Chocolate => "chocolate",
        }
    }
}

impl fmt::Display for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// How the arrangement is packaged
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Luxury gift box
    Box,
    /// Hand-tied wrapped bouquet
    #[default]
    Wrap,
}

/// Shape of a gift box (or of a heart-shaped wrap arrangement)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxShape {
    /// Circular hatbox
    Round,
    /// Square box
    #[default]
    Square,
    /// Heart-shaped box
    Heart,
    /// Rectangular box
    Rectangle,
}

impl BoxShape {
    /// Stable slug used in prompts and cache keys
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Square => "square",
            Self::Heart => "heart",
            Self::Rectangle => "rectangle",
        }
    }
}

/// Arrangement size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSize {
    /// Compact arrangement
    Small,
    /// Standard arrangement
    #[default]
    Medium,
    /// Grand arrangement
    Large,
}

impl PackageSize {
    /// Stable slug used in prompts and cache keys
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// On-canvas placement of a selected flower.
///
/// Purely cosmetic: placements never affect pricing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Horizontal position in canvas pixels
    pub x: f32,
    /// Vertical position in canvas pixels
    pub y: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Scale factor
    pub scale: f32,
}

impl Placement {
    /// Creates a placement
    #[must_use]
    pub const fn new(x: f32, y: f32, rotation: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            rotation,
            scale,
        }
    }
}

/// One entry of a preset bouquet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetFlower {
    /// Catalog flower to include
    pub flower_id: FlowerId,
    /// How many stems
    pub quantity: u32,
    /// Optional fixed placement; fresh placements are drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

impl PresetFlower {
    /// Creates a preset entry without a fixed placement
    #[must_use]
    pub fn new(flower_id: impl Into<FlowerId>, quantity: u32) -> Self {
        Self {
            flower_id: flower_id.into(),
            quantity,
            placement: None,
        }
    }
}

/// A pre-designed bouquet offered as a shortcut in the configurator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetBouquet {
    /// Preset identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Flowers and quantities making up the bouquet
    pub flowers: Vec<PresetFlower>,
    /// Occasion or season category
    pub category: String,
}
