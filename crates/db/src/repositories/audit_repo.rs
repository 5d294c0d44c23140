//! Data access for the `audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::{AuditLog, CreateAuditLog};

/// Columns selected by every query that returns full rows.
const COLUMNS: &str =
    "id, event_type, description, actor_user_id, target_user_id, metadata, created_at";

/// Insert and query entry points for audit logs.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Insert an audit log entry and return the stored row.
    pub async fn insert(pool: &PgPool, input: &CreateAuditLog) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs (event_type, description, actor_user_id, target_user_id, \
             metadata)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(&input.event_type)
            .bind(&input.description)
            .bind(input.actor_user_id)
            .bind(input.target_user_id)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// List entries of one event type, newest first.
    pub async fn list_by_event_type(
        pool: &PgPool,
        event_type: &str,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs WHERE event_type = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(event_type)
            .fetch_all(pool)
            .await
    }
}
