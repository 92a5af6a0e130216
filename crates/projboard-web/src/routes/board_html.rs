//! Board page and browser event handlers.
//!
//! The page script posts form submissions and drops here; list updates
//! reach every browser through the WebSocket.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use projboard_core::view::FormFields;
use projboard_core::{BoardError, ProjectId, ProjectStatus};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate {
    app_html: String,
}

// ============================================================
// REQUEST / RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct CreateProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub people: String,
}

impl From<CreateProjectForm> for FormFields {
    fn from(form: CreateProjectForm) -> Self {
        FormFields {
            title: form.title,
            description: form.description,
            people: form.people,
        }
    }
}

#[derive(Deserialize)]
pub struct DropForm {
    #[serde(default)]
    pub payload: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedProject {
    pub id: ProjectId,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the full board page.
pub async fn index(State(state): State<AppState>) -> Response {
    let app_html = match state.board.page().await {
        Ok(html) => html,
        Err(e) => return (StatusCode::SERVICE_UNAVAILABLE, Html(e.to_string())).into_response(),
    };

    match (BoardTemplate { app_html }).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}

/// POST /projects - Submit the project form.
///
/// Rejected input answers 422 with the alert text for the page to show.
pub async fn create_project(
    State(state): State<AppState>,
    Form(form): Form<CreateProjectForm>,
) -> Response {
    match state.board.submit(form.into()).await {
        Ok(Ok(id)) => (StatusCode::CREATED, Json(CreatedProject { id })).into_response(),
        Ok(Err(e @ BoardError::InvalidInput)) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
        Ok(Err(e)) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
    }
}

/// POST /lists/{status}/drop - Drop a dragged project onto a list.
/// Returns both lists as rendered after the drop.
pub async fn drop_project(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Form(form): Form<DropForm>,
) -> Response {
    let status = match ProjectStatus::parse(&status) {
        Ok(s) => s,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state.board.drop_on(status, form.payload).await {
        Ok(lists) => Json(lists).into_response(),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
    }
}
