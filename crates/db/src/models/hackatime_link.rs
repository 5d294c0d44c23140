//! Tracked-time link model and DTOs.
//!
//! Each row associates a project with one Hackatime tracked-project name.
//! Synced raw hours and an optional reviewer override live on the link;
//! the calculator takes the override when present.

use serde::{Deserialize, Serialize};
use shipwrecked_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A link row from the `hackatime_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HackatimeLink {
    pub id: DbId,
    #[serde(rename = "projectID")]
    pub project_id: Uuid,
    pub hackatime_name: String,
    pub raw_hours: f64,
    pub hours_override: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HackatimeLink {
    /// Hours this link contributes: the override when set, raw otherwise.
    pub fn effective_hours(&self) -> f64 {
        shipwrecked_core::progress::effective_link_hours(self.raw_hours, self.hours_override)
    }
}

/// DTO for creating a new link. Hours start at zero until the next sync.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHackatimeLink {
    pub project_id: Uuid,
    pub hackatime_name: String,
}
