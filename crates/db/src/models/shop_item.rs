//! Shop item entity model and DTOs.

use serde::{Deserialize, Serialize};
use shipwrecked_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A shop item row from the `shop_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// Price in shells.
    pub price: f64,
    pub usd_cost: f64,
    pub cost_type: String,
    /// Item-specific configuration, opaque to this service.
    pub config: Option<serde_json::Value>,
    pub use_randomized_pricing: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/admin/shop-items`. Presence of `name`,
/// `description` and `price` is enforced by validation, not by the type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub usd_cost: Option<f64>,
    pub cost_type: Option<String>,
    pub config: Option<serde_json::Value>,
    pub use_randomized_pricing: Option<bool>,
}

/// Validated insert input. Optional fields left `None` take their column
/// defaults in the repository.
#[derive(Debug, Clone)]
pub struct NewShopItem {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub price: f64,
    pub usd_cost: Option<f64>,
    pub cost_type: Option<String>,
    pub config: Option<serde_json::Value>,
    pub use_randomized_pricing: Option<bool>,
}
