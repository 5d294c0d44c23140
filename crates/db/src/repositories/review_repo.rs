//! Data access for the `reviews` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::review::{CreateReview, Review};

/// Columns selected by every query that returns full rows.
const COLUMNS: &str = "id, project_id, requester_user_id, review_type, comment, created_at";

/// Insert and query entry points for review requests.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review request and return the stored row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (project_id, requester_user_id, review_type, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.project_id)
            .bind(input.requester_user_id)
            .bind(&input.review_type)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List the review requests of one project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
