//! Role gates layered on top of session auth.
//!
//! Wrapping [`AuthUser`] moves the role check into the handler signature,
//! so a glance at the route table shows which endpoints are admin-only.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shipwrecked_core::error::CoreError;
use shipwrecked_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Admits only users with the `admin` role; everyone else gets a 403.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user.role is ROLE_ADMIN here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
