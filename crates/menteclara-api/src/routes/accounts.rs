use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menteclara_core::models::account::AccountStatus;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: AccountStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: Uuid,
    pub status: AccountStatus,
}

pub async fn set_status(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<StatusRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let status = state
        .store
        .lock()
        .await
        .set_account_status(&session.actor, id, req.status)?;
    Ok(Json(StatusResponse { id, status }))
}

pub async fn toggle_status(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusResponse>, ApiError> {
    let status = state
        .store
        .lock()
        .await
        .toggle_account_status(&session.actor, id)?;
    Ok(Json(StatusResponse { id, status }))
}
