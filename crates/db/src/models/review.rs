//! Review record model and DTO.

use serde::{Deserialize, Serialize};
use shipwrecked_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A review request row from the `reviews` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    #[serde(rename = "projectID")]
    pub project_id: Uuid,
    pub requester_user_id: Option<Uuid>,
    /// One of the `ReviewType` wire strings (e.g. `"ShippedApproval"`).
    pub review_type: String,
    pub comment: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new review request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub project_id: Uuid,
    pub requester_user_id: Option<Uuid>,
    pub review_type: String,
    pub comment: String,
}
