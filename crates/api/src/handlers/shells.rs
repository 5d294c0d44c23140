//! Handler for the `/users/me/shells` resource.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use shipwrecked_core::error::CoreError;
use shipwrecked_core::progress::{
    calculate_progress_metrics, ProgressMetrics, ProjectHours, TOTAL_HOURS_REQUIRED,
};
use shipwrecked_db::repositories::{HackatimeLinkRepo, ProjectRepo, UserRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /api/users/me/shells`.
///
/// `shells` and `earnedShells` are aliases of `availableShells`; older
/// clients read different fields for the same number.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellsResponse {
    pub shells: f64,
    pub earned_shells: f64,
    pub total_spent: i32,
    pub admin_shell_adjustment: i32,
    pub available_shells: f64,
    pub progress: ProgressBreakdown,
}

/// Earned, purchased, and combined progress toward the hour goal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBreakdown {
    pub earned: EarnedProgress,
    pub purchased: PurchasedProgress,
    pub total: TotalProgress,
}

/// Progress from tracked hours alone, split by project status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedProgress {
    pub total_hours: f64,
    pub total_percentage: f64,
    pub shipped_hours: f64,
    pub viral_hours: f64,
    pub other_hours: f64,
}

/// Progress bought through the shop.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedProgress {
    pub hours: f64,
    pub percentage: f64,
}

/// Earned plus purchased progress.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalProgress {
    pub hours: f64,
    pub percentage: f64,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/users/me/shells
///
/// Shell balance plus the full progress breakdown for the session user.
pub async fn get_shells(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ShellsResponse>> {
    // 1. Load the user row for the stored balances.
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id.to_string(),
        }))?;

    // 2. Load all projects and all links in two queries, then sum each
    //    project's effective link hours.
    let projects = ProjectRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    let links = HackatimeLinkRepo::list_for_user(&state.pool, auth_user.user_id).await?;

    let mut hours_by_project: HashMap<Uuid, f64> = HashMap::new();
    for link in &links {
        *hours_by_project.entry(link.project_id).or_default() += link.effective_hours();
    }

    let project_hours: Vec<ProjectHours> = projects
        .iter()
        .map(|project| ProjectHours {
            shipped: project.shipped,
            viral: project.viral,
            hours: hours_by_project
                .get(&project.project_id)
                .copied()
                .unwrap_or_default(),
        })
        .collect();

    // 3. Run the calculator with the configured conversion rate.
    let metrics = calculate_progress_metrics(
        &project_hours,
        user.purchased_progress_hours,
        user.total_shells_spent,
        user.admin_shell_adjustment,
        state.config.shell_rate(),
    );

    Ok(Json(build_response(
        &metrics,
        user.total_shells_spent,
        user.admin_shell_adjustment,
    )))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shape the calculator output into the wire response.
fn build_response(
    metrics: &ProgressMetrics,
    total_spent: i32,
    admin_shell_adjustment: i32,
) -> ShellsResponse {
    let purchased_percentage =
        (metrics.purchased_progress_hours / TOTAL_HOURS_REQUIRED * 100.0).min(100.0);

    ShellsResponse {
        shells: metrics.available_shells,
        earned_shells: metrics.available_shells,
        total_spent,
        admin_shell_adjustment,
        available_shells: metrics.available_shells,
        progress: ProgressBreakdown {
            earned: EarnedProgress {
                total_hours: metrics.total_hours,
                total_percentage: metrics.total_percentage,
                shipped_hours: metrics.shipped_hours,
                viral_hours: metrics.viral_hours,
                other_hours: metrics.other_hours,
            },
            purchased: PurchasedProgress {
                hours: metrics.purchased_progress_hours,
                percentage: purchased_percentage,
            },
            total: TotalProgress {
                hours: metrics.total_progress_with_purchased,
                percentage: metrics.total_percentage_with_purchased,
            },
        },
    }
}
