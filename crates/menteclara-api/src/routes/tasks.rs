use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use menteclara_core::models::task::Task;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub content: String,
}

pub async fn add_task(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<NewTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .store
        .lock()
        .await
        .add_task(&session.actor, id, &req.content)?;
    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path((id, task_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .store
        .lock()
        .await
        .toggle_task(&session.actor, id, task_id)?;
    Ok(Json(task))
}
