//! Data access for the `users` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{CreateUser, User};

/// Columns selected by every query that returns full rows.
const COLUMNS: &str = "id, email, name, role, total_shells_spent, purchased_progress_hours, \
                       admin_shell_adjustment, created_at, updated_at";

/// CRUD entry points for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user and return the stored row.
    ///
    /// If `role` is `None` in the input, defaults to `"user"`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, role)
             VALUES ($1, $2, COALESCE($3, 'user'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a user exists without materializing the row.
    pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let found: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// Overwrite a user's shell-economy balances. Used by the external shop
    /// checkout and admin tooling, and by tests seeding calculator inputs.
    pub async fn set_shell_balances(
        pool: &PgPool,
        id: Uuid,
        total_shells_spent: i32,
        purchased_progress_hours: f64,
        admin_shell_adjustment: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET
                total_shells_spent = $2,
                purchased_progress_hours = $3,
                admin_shell_adjustment = $4,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(total_shells_spent)
        .bind(purchased_progress_hours)
        .bind(admin_shell_adjustment)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
