//! Cart state and actions.

use petal_catalog::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A purchasable product as it enters the cart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Money,
    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Chosen size variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Gift note attached by the customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_note: Option<String>,
    /// Variant description (e.g. a custom bouquet summary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CartProduct {
    /// The line identity of this product
    #[must_use]
    pub fn line_key(&self) -> LineKey {
        LineKey {
            product_id: self.id.clone(),
            size: self.size.clone(),
            personal_note: self.personal_note.clone(),
            description: self.description.clone(),
        }
    }
}

/// Cart line identity.
///
/// The same product with a different size, note, or description is a
/// separate line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product identifier
    pub product_id: String,
    /// Size variant
    pub size: Option<String>,
    /// Gift note
    pub personal_note: Option<String>,
    /// Variant description
    pub description: Option<String>,
}

/// One cart line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product in this line
    pub product: CartProduct,
    /// How many; always at least 1
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line (`unit price × quantity`)
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// State of the shopping cart
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    /// Cart lines, keyed by line identity
    pub items: HashMap<LineKey, CartItem>,
}

impl CartState {
    /// Creates an empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of items (sum of all quantities)
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.values().map(|i| i.quantity).sum()
    }

    /// Total price of all lines; always derived, never stored
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.items.values().map(CartItem::line_total).sum()
    }
}

/// Actions accepted by the cart reducer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CartAction {
    /// Add a product (or bump the matching line by 1)
    AddItem {
        /// Product to add
        product: CartProduct,
    },
    /// Remove a line entirely
    RemoveItem {
        /// Line to remove
        key: LineKey,
    },
    /// Overwrite a line's quantity; 0 removes the line
    SetQuantity {
        /// Line to update
        key: LineKey,
        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}
