//! The user entity and its creation DTO.

use serde::{Deserialize, Serialize};
use shipwrecked_core::types::Timestamp;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `users` table.
///
/// Shell-economy balances live here rather than in a separate table: the
/// calculator reads them as plain inputs and never mutates them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Role name (`"admin"` or `"user"`).
    pub role: String,
    /// Lifetime shells spent in the shop.
    pub total_shells_spent: i32,
    /// Progress hours bought with shells.
    pub purchased_progress_hours: f64,
    /// Manual correction applied by an admin; may be negative.
    pub admin_shell_adjustment: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Creation payload for a user.
///
/// Users are provisioned by the external auth callback (and by tests);
/// no public endpoint creates them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    /// Defaults to `"user"` if omitted.
    pub role: Option<String>,
}
