//! Handlers for project CRUD under `/projects`.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use futures::future::join_all;
use serde::Serialize;
use shipwrecked_core::error::CoreError;
use shipwrecked_core::project::merge_hackatime_projects;
use shipwrecked_db::models::hackatime_link::{CreateHackatimeLink, HackatimeLink};
use shipwrecked_db::models::project::{CreateProject, NewProject, Project, UpdateProject};
use shipwrecked_db::repositories::{HackatimeLinkRepo, ProjectRepo, UserRepo};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A project with its tracked-time links, as returned by `GET /api/projects`.
///
/// The project fields are flattened so the shape stays a project object with
/// an extra `hackatimeLinks` array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithLinks {
    #[serde(flatten)]
    pub project: Project,
    pub hackatime_links: Vec<HackatimeLink>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/projects
///
/// Create a project owned by the session user, then link each requested
/// tracked-time name to it.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    // 1. Probe the database before writing anything.
    shipwrecked_db::health_check(&state.pool)
        .await
        .map_err(|e| AppError::Core(CoreError::Connection(e.to_string())))?;

    // 2. Check the owner exists up front instead of relying on the FK.
    if !UserRepo::exists(&state.pool, auth_user.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id.to_string(),
        }));
    }

    // 3. Merge the legacy single tracked name into the list form.
    let hackatime_names = merge_hackatime_projects(
        input.hackatime_name.clone(),
        input.hackatime_projects.clone().unwrap_or_default(),
    );

    // 4. Resolve the insert input. Text fields default to empty strings,
    //    flags to false; `submitted` is always false on creation.
    let new_project = NewProject {
        project_id: Uuid::new_v4(),
        user_id: auth_user.user_id,
        name: input.name.unwrap_or_default(),
        description: input.description.unwrap_or_default(),
        code_url: input.code_url.unwrap_or_default(),
        playable_url: input.playable_url.unwrap_or_default(),
        screenshot: input.screenshot.unwrap_or_default(),
        shipped: input.shipped.unwrap_or_default(),
        viral: input.viral.unwrap_or_default(),
        in_review: input.in_review.unwrap_or_default(),
    };

    // 5. Insert, retrying once with a fresh id on a primary-key collision.
    let project = insert_with_retry(&state, new_project).await?;

    // 6. Link tracked names concurrently. A failed link never fails the
    //    created project; it is logged and skipped.
    create_links_best_effort(&state, project.project_id, hackatime_names).await;

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
///
/// List the session user's projects, newest first, each with its
/// tracked-time links.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<ProjectWithLinks>>> {
    let projects = ProjectRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    let links = HackatimeLinkRepo::list_for_user(&state.pool, auth_user.user_id).await?;

    // Group links by project in one pass instead of a query per project.
    let mut links_by_project: HashMap<Uuid, Vec<HackatimeLink>> = HashMap::new();
    for link in links {
        links_by_project
            .entry(link.project_id)
            .or_default()
            .push(link);
    }

    let result = projects
        .into_iter()
        .map(|project| {
            let hackatime_links = links_by_project
                .remove(&project.project_id)
                .unwrap_or_default();
            ProjectWithLinks {
                project,
                hackatime_links,
            }
        })
        .collect();

    Ok(Json(result))
}

/// PUT /api/projects/{projectID}
///
/// Partially update a project. Scoped to the session user; a project owned
/// by someone else reads as not found.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(project_id): Path<Uuid>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update_scoped(&state.pool, project_id, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id.to_string(),
        }))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{projectID}
///
/// Delete a project and, via the schema, its links. Scoped to the session
/// user. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(project_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete_scoped(&state.pool, project_id, auth_user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id.to_string(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a project, retrying exactly once with a regenerated id if the
/// primary key collides. Any other failure, or a second collision, surfaces
/// as a creation error.
async fn insert_with_retry(state: &AppState, mut input: NewProject) -> AppResult<Project> {
    match ProjectRepo::insert(&state.pool, &input).await {
        Ok(project) => Ok(project),
        Err(err) if is_project_id_collision(&err) => {
            tracing::warn!(
                project_id = %input.project_id,
                "Project id collision, retrying with a fresh id"
            );
            input.project_id = Uuid::new_v4();
            ProjectRepo::insert(&state.pool, &input)
                .await
                .map_err(|e| AppError::Core(CoreError::CreationFailed(e.to_string())))
        }
        Err(err) => Err(AppError::Core(CoreError::CreationFailed(err.to_string()))),
    }
}

/// True only for a unique violation on the projects primary key.
fn is_project_id_collision(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("projects_pkey")
        }
        _ => false,
    }
}

/// Create one link per tracked name, all concurrently. Failures (for
/// example a duplicate name) are logged and swallowed.
async fn create_links_best_effort(state: &AppState, project_id: Uuid, names: Vec<String>) {
    let attempts = names.into_iter().map(|hackatime_name| {
        let input = CreateHackatimeLink {
            project_id,
            hackatime_name,
        };
        async move {
            let result = HackatimeLinkRepo::create(&state.pool, &input).await;
            (input.hackatime_name, result)
        }
    });

    for (hackatime_name, result) in join_all(attempts).await {
        if let Err(err) = result {
            tracing::warn!(
                %project_id,
                %hackatime_name,
                error = %err,
                "Failed to link tracked project"
            );
        }
    }
}
