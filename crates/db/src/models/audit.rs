//! Audit log entity model and DTO.
//!
//! Audit logs are append-only and have no `updated_at` (immutable records).
//! Actor and target ids are plain UUIDs, not foreign keys, so the trail
//! survives user deletion.

use serde::{Deserialize, Serialize};
use shipwrecked_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A single audit log entry.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: DbId,
    pub event_type: String,
    pub description: String,
    pub actor_user_id: Option<Uuid>,
    pub target_user_id: Option<Uuid>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// Insertion payload for an audit entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditLog {
    pub event_type: String,
    pub description: String,
    pub actor_user_id: Option<Uuid>,
    pub target_user_id: Option<Uuid>,
    pub metadata: Option<serde_json::Value>,
}
