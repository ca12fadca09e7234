//! Product catalog types mirrored from the commerce backend.

use serde::{Deserialize, Serialize};

/// A monetary amount as the backend reports it.
///
/// The client never computes amounts itself; `raw` is carried only so
/// responses round-trip, while display always uses the preformatted string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub raw: f64,
    #[serde(default)]
    pub formatted_with_symbol: String,
}

/// A single product in the catalog. Read-only snapshot from the backend;
/// the whole catalog is replaced wholesale on fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Description HTML as delivered by the backend.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub permalink: String,
}
