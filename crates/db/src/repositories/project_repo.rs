//! Data access for the `projects` table.
//!
//! Update and delete are scoped by `(project_id, user_id)` so an owner
//! mismatch is indistinguishable from a missing row; this keeps other
//! users' project ids unguessable through this API.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{NewProject, Project, UpdateProject};

/// Columns selected by every query that returns full rows.
const COLUMNS: &str = "project_id, user_id, name, description, code_url, playable_url, \
                       screenshot, submitted, shipped, viral, in_review, created_at, updated_at";

/// CRUD entry points for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project and return the stored row.
    ///
    /// The caller supplies the generated `project_id`; a primary-key
    /// collision surfaces as a database error so the caller can retry
    /// with a fresh id.
    pub async fn insert(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_id, user_id, name, description, code_url, \
             playable_url, screenshot, shipped, viral, in_review)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.project_id)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.code_url)
            .bind(&input.playable_url)
            .bind(&input.screenshot)
            .bind(input.shipped)
            .bind(input.viral)
            .bind(input.in_review)
            .fetch_one(pool)
            .await
    }

    /// List a user's projects, most recently created first.
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a project by its composite `(project_id, user_id)` key.
    pub async fn find_scoped(
        pool: &PgPool,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE project_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a project scoped to its owner. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if no row matches the `(project_id, user_id)` pair.
    pub async fn update_scoped(
        pool: &PgPool,
        project_id: Uuid,
        user_id: Uuid,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                code_url = COALESCE($5, code_url),
                playable_url = COALESCE($6, playable_url),
                screenshot = COALESCE($7, screenshot),
                shipped = COALESCE($8, shipped),
                viral = COALESCE($9, viral),
                in_review = COALESCE($10, in_review),
                updated_at = NOW()
             WHERE project_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.code_url)
            .bind(&input.playable_url)
            .bind(&input.screenshot)
            .bind(input.shipped)
            .bind(input.viral)
            .bind(input.in_review)
            .fetch_optional(pool)
            .await
    }

    /// Mark a project as in review, scoped to its owner.
    ///
    /// Returns `None` if no row matches the `(project_id, user_id)` pair.
    pub async fn mark_in_review(
        pool: &PgPool,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET in_review = TRUE, updated_at = NOW()
             WHERE project_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project scoped to its owner. Returns `true` if a row was
    /// removed; links cascade at the schema level.
    pub async fn delete_scoped(
        pool: &PgPool,
        project_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE project_id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
