//! Data access for the `hackatime_links` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::hackatime_link::{CreateHackatimeLink, HackatimeLink};

/// Columns selected by every query that returns full rows.
const COLUMNS: &str =
    "id, project_id, hackatime_name, raw_hours, hours_override, created_at, updated_at";

/// Same columns qualified with the `l` alias for joined queries.
const ALIASED_COLUMNS: &str = "l.id, l.project_id, l.hackatime_name, l.raw_hours, \
                               l.hours_override, l.created_at, l.updated_at";

/// CRUD entry points for tracked-time links.
pub struct HackatimeLinkRepo;

impl HackatimeLinkRepo {
    /// Insert a link with zero hours and return the stored row.
    ///
    /// `(project_id, hackatime_name)` is unique; linking the same name
    /// twice surfaces as a constraint violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHackatimeLink,
    ) -> Result<HackatimeLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO hackatime_links (project_id, hackatime_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HackatimeLink>(&query)
            .bind(input.project_id)
            .bind(&input.hackatime_name)
            .fetch_one(pool)
            .await
    }

    /// List the links of one project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Vec<HackatimeLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hackatime_links WHERE project_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, HackatimeLink>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all links across a user's projects in a single query. Callers
    /// group the rows by `project_id`.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<HackatimeLink>, sqlx::Error> {
        let query = format!(
            "SELECT {ALIASED_COLUMNS} FROM hackatime_links l
             JOIN projects p ON p.project_id = l.project_id
             WHERE p.user_id = $1
             ORDER BY l.created_at"
        );
        sqlx::query_as::<_, HackatimeLink>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set the synced raw hours of a link. Used by the external time-sync
    /// job and by tests seeding calculator inputs.
    pub async fn set_hours(
        pool: &PgPool,
        id: i64,
        raw_hours: f64,
        hours_override: Option<f64>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE hackatime_links SET raw_hours = $2, hours_override = $3, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(raw_hours)
        .bind(hours_override)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
