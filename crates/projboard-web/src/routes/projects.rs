//! Project JSON route handlers.

use axum::{extract::State, http::StatusCode, Json};
use projboard_core::Project;

use crate::state::AppState;

/// GET /api/projects - Current snapshot of every project, in creation order.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, (StatusCode, String)> {
    let projects = state
        .board
        .projects()
        .await
        .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    Ok(Json(projects))
}
