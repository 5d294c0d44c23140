//! Session model and DTO.

use serde::Deserialize;
use shipwrecked_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A session row from the `sessions` table.
///
/// Holds the token hash -- never serialize this to API responses. Rows are
/// written by the external auth callback; this service only resolves them.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: Uuid,
    /// SHA-256 hex of the opaque bearer token. The plaintext is never stored.
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSession {
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
