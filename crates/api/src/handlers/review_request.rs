//! Handler for the review-request flow on `/projects/review-request`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shipwrecked_core::error::CoreError;
use shipwrecked_core::project::missing_metadata;
use shipwrecked_core::review::{default_review_type, validate_review_request, ReviewType};
use shipwrecked_db::models::project::Project;
use shipwrecked_db::models::review::{CreateReview, Review};
use shipwrecked_db::repositories::{ProjectRepo, ReviewRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request and response bodies
// ---------------------------------------------------------------------------

/// Request body for `POST /api/projects/review-request`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequestBody {
    #[serde(rename = "projectID")]
    pub project_id: Uuid,
    pub comment: String,
    /// Defaults from the project's shipped flag when omitted.
    pub review_type: Option<String>,
}

/// Response body: the recorded review plus the project as updated by it.
#[derive(Debug, Serialize)]
pub struct ReviewRequestResponse {
    pub project: Project,
    pub review: Review,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /api/projects/review-request
///
/// Submit a review request for one of the session user's projects and place
/// the project in review.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ReviewRequestBody>,
) -> AppResult<(StatusCode, Json<ReviewRequestResponse>)> {
    // 1. Load the project scoped to the requester; someone else's project
    //    reads as not found.
    let project = ProjectRepo::find_scoped(&state.pool, input.project_id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id.to_string(),
        }))?;

    // 2. One open request at a time.
    if project.in_review {
        return Err(AppError::Core(CoreError::Conflict(
            "Project is already in review".to_string(),
        )));
    }

    // 3. Required metadata must be complete before a request can be made.
    let missing = missing_metadata(&project.code_url, &project.playable_url, &project.screenshot);
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Missing required metadata: {}",
            missing.join(", ")
        ))));
    }

    // 4. Resolve the requested type and validate it with the comment.
    let review_type = match &input.review_type {
        Some(raw) => raw.parse::<ReviewType>()?,
        None => default_review_type(project.shipped),
    };
    validate_review_request(project.shipped, project.viral, review_type, &input.comment)?;

    // 5. Two single-statement writes: record the request, then flag the
    //    project.
    let review_input = CreateReview {
        project_id: project.project_id,
        requester_user_id: Some(auth_user.user_id),
        review_type: review_type.as_str().to_string(),
        comment: input.comment.clone(),
    };
    let review = ReviewRepo::create(&state.pool, &review_input).await?;

    let project = ProjectRepo::mark_in_review(&state.pool, project.project_id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id.to_string(),
        }))?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewRequestResponse { project, review }),
    ))
}
