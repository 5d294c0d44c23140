use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shipwrecked_core::error::CoreError;

/// Error type returned by every HTTP handler in this crate.
///
/// Domain failures arrive as [`CoreError`] and keep their meaning; the
/// remaining variants cover failures that only exist at the HTTP layer.
/// The [`IntoResponse`] impl renders all of them as `{"error", "code"}`
/// JSON bodies so clients never see a bare status line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure surfaced by `shipwrecked_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Database failure that was not translated into a domain error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed input detected at the HTTP layer.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Catch-all for failures with no better home.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Shorthand for handler signatures.
pub type AppResult<T> = Result<T, AppError>;

/// The opaque 500 tuple. Details go to the log, never to the client.
fn opaque_internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map a [`CoreError`] onto its HTTP response parts.
fn core_response(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Connection(msg) => {
            tracing::error!(error = %msg, "Store liveness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "CONNECTION_ERROR",
                "Database connection failed".to_string(),
            )
        }
        CoreError::CreationFailed(msg) => {
            tracing::error!(error = %msg, "Creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CREATION_FAILED",
                "Failed to create the record".to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            opaque_internal()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                opaque_internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Turn a raw sqlx error into a status, code, and message.
///
/// `RowNotFound` becomes a 404. A Postgres unique violation is a 409
/// when its constraint name carries the `uq_` prefix used throughout
/// the schema. Anything else is logged and reported as an opaque 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // 23505 is Postgres for unique_violation.
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            opaque_internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            opaque_internal()
        }
    }
}
