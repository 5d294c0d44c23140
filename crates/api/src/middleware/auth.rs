//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shipwrecked_core::error::CoreError;
use shipwrecked_db::repositories::{SessionRepo, UserRepo};
use uuid::Uuid;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from a Bearer session token in the
/// `Authorization` header.
///
/// The presented token is hashed and looked up in the `sessions` table;
/// expired or unknown tokens reject with 401. Taking this as a handler
/// parameter is all it takes to make a route require authentication:
///
/// ```ignore
/// async fn whoami(user: AuthUser) -> AppResult<Json<String>> {
///     Ok(Json(user.user_id.to_string()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's id from the resolved session.
    pub user_id: Uuid,
    /// The user's role name (`"admin"` or `"user"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let token_hash = hash_session_token(token);
        let session = SessionRepo::find_by_token_hash(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        // The CASCADE on sessions.user_id makes a dangling session
        // impossible, but a concurrent user deletion can still race us.
        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
            })?;

        Ok(AuthUser {
            user_id: user.id,
            role: user.role,
        })
    }
}
