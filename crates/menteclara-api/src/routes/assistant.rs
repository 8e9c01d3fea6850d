use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use menteclara_core::models::exercise::{Exercise, ExerciseDraft};

use crate::assistant;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub symptoms: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssignRequest {
    #[serde(default)]
    pub patient_id: Option<Uuid>,
}

pub async fn generate(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ApiJson(req): ApiJson<GenerateRequest>,
) -> Result<Json<ExerciseDraft>, ApiError> {
    let draft = assistant::generate_preview(&state, &session, &req.symptoms).await?;
    Ok(Json(draft))
}

pub async fn assign(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ApiJson(req): ApiJson<AssignRequest>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = assistant::assign_preview(&state, &session, req.patient_id).await?;
    Ok(Json(exercise))
}
