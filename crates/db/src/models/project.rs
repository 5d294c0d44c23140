//! The project entity and its create/update DTOs.

use serde::{Deserialize, Serialize};
use shipwrecked_core::types::Timestamp;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `projects` table.
///
/// The primary key serializes as `projectID` and the review flag as
/// `in_review`; both spellings predate this service and clients rely
/// on them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "projectID")]
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub code_url: String,
    pub playable_url: String,
    pub screenshot: String,
    pub submitted: bool,
    pub shipped: bool,
    pub viral: bool,
    #[serde(rename = "in_review")]
    pub in_review: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/projects`. Every field is optional; textual
/// fields default to empty strings and flags to `false`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub code_url: Option<String>,
    pub playable_url: Option<String>,
    pub screenshot: Option<String>,
    pub shipped: Option<bool>,
    pub viral: Option<bool>,
    #[serde(rename = "in_review")]
    pub in_review: Option<bool>,
    /// Legacy single tracked-project name; merged into `hackatime_projects`.
    pub hackatime_name: Option<String>,
    /// Tracked-project names to link after the insert.
    pub hackatime_projects: Option<Vec<String>>,
}

/// Fully resolved insert input. Built by the create handler after applying
/// defaults and generating the id; `submitted` is always false on insert.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub code_url: String,
    pub playable_url: String,
    pub screenshot: String,
    pub shipped: bool,
    pub viral: bool,
    pub in_review: bool,
}

/// Request body for `PUT /api/projects/{projectID}`. Only non-`None` fields
/// are applied; identity, ownership, and `submitted` are never updatable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub code_url: Option<String>,
    pub playable_url: Option<String>,
    pub screenshot: Option<String>,
    pub shipped: Option<bool>,
    pub viral: Option<bool>,
    #[serde(rename = "in_review")]
    pub in_review: Option<bool>,
}
