//! Server-authoritative shopping cart.
//!
//! The cart held in memory is always exactly the last value the backend
//! returned for the most recent cart-affecting call. Nothing here merges or
//! patches partial updates; every response replaces the aggregate in full.

use crate::catalog::Money;
use serde::{Deserialize, Serialize};

/// One product+quantity entry within a cart. Existence and quantity are fully
/// controlled by server responses to add/update/remove calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub line_total: Money,
}

/// The cart aggregate as the backend reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_unique_items: u32,
    #[serde(default)]
    pub subtotal: Money,
}

impl Cart {
    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Find a line item by its id.
    #[must_use]
    pub fn find_line(&self, line_id: &str) -> Option<&LineItem> {
        self.line_items.iter().find(|line| line.id == line_id)
    }
}
