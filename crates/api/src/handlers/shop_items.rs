//! Handlers for the admin-only `/admin/shop-items` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use shipwrecked_core::audit::EVENT_SHOP_ITEM_CREATED;
use shipwrecked_core::shop::validate_new_shop_item;
use shipwrecked_db::models::audit::CreateAuditLog;
use shipwrecked_db::models::shop_item::{CreateShopItem, NewShopItem, ShopItem};
use shipwrecked_db::repositories::{AuditLogRepo, ShopItemRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /api/admin/shop-items`.
#[derive(Debug, Serialize)]
pub struct ShopItemsResponse {
    pub items: Vec<ShopItem>,
}

/// Response body for `POST /api/admin/shop-items`.
#[derive(Debug, Serialize)]
pub struct ShopItemResponse {
    pub item: ShopItem,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/shop-items
///
/// List the full catalogue, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<ShopItemsResponse>> {
    let items = ShopItemRepo::list(&state.pool).await?;
    Ok(Json(ShopItemsResponse { items }))
}

/// POST /api/admin/shop-items
///
/// Create a catalogue item and record an audit entry for it.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateShopItem>,
) -> AppResult<(StatusCode, Json<ShopItemResponse>)> {
    // 1. Validate the required fields before touching the store.
    validate_new_shop_item(
        input.name.as_deref(),
        input.description.as_deref(),
        input.price,
    )?;

    // 2. Build the insert input; validation guarantees the unwrapped fields
    //    are present. Unset pricing fields take the catalogue defaults.
    let new_item = NewShopItem {
        name: input.name.unwrap_or_default(),
        description: input.description.unwrap_or_default(),
        image: input.image,
        price: input.price.unwrap_or_default(),
        usd_cost: input.usd_cost,
        cost_type: input.cost_type,
        config: input.config,
        use_randomized_pricing: input.use_randomized_pricing,
    };

    let item = ShopItemRepo::create(&state.pool, &new_item).await?;

    // 3. Audit the creation with the admin as both actor and target. A
    //    failed audit write fails the request; the item row remains.
    let audit_input = CreateAuditLog {
        event_type: EVENT_SHOP_ITEM_CREATED.to_string(),
        description: format!("Created shop item: {}", item.name),
        actor_user_id: Some(admin.user_id),
        target_user_id: Some(admin.user_id),
        metadata: Some(json!({
            "itemId": item.id,
            "itemName": item.name,
            "price": item.price,
        })),
    };
    AuditLogRepo::insert(&state.pool, &audit_input).await?;

    Ok((StatusCode::CREATED, Json(ShopItemResponse { item })))
}
