//! Data access for the `shop_items` table.

use sqlx::PgPool;

use crate::models::shop_item::{NewShopItem, ShopItem};

/// Columns selected by every query that returns full rows.
const COLUMNS: &str = "id, name, description, image, price, usd_cost, cost_type, config, \
                       use_randomized_pricing, created_at, updated_at";

/// CRUD entry points for shop items.
pub struct ShopItemRepo;

impl ShopItemRepo {
    /// Insert an item and return the stored row.
    ///
    /// Optional pricing fields fall back to the catalogue defaults:
    /// `usd_cost` 0, `cost_type` `'fixed'`, `use_randomized_pricing` true.
    pub async fn create(pool: &PgPool, input: &NewShopItem) -> Result<ShopItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO shop_items (name, description, image, price, usd_cost, cost_type, \
             config, use_randomized_pricing)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 'fixed'), $7, \
             COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShopItem>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.price)
            .bind(input.usd_cost)
            .bind(&input.cost_type)
            .bind(&input.config)
            .bind(input.use_randomized_pricing)
            .fetch_one(pool)
            .await
    }

    /// List all items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShopItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shop_items ORDER BY created_at DESC");
        sqlx::query_as::<_, ShopItem>(&query).fetch_all(pool).await
    }
}
