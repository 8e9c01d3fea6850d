use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use menteclara_core::models::exercise::{Exercise, ExerciseDraft};

use crate::assistant::{self, SpeechClip};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub notes: Option<String>,
    pub mood_rating: i64,
}

pub async fn assign_exercise(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(id): Path<Uuid>,
    ApiJson(draft): ApiJson<ExerciseDraft>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state
        .store
        .lock()
        .await
        .assign_exercise(&session.actor, Some(id), draft)?;
    Ok(Json(exercise))
}

pub async fn complete_exercise(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path((id, exercise_id)): Path<(Uuid, Uuid)>,
    ApiJson(req): ApiJson<CompleteRequest>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = state.store.lock().await.complete_exercise(
        &session.actor,
        id,
        exercise_id,
        req.notes,
        req.mood_rating,
    )?;
    Ok(Json(exercise))
}

pub async fn speak_exercise(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path((id, exercise_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SpeechClip>, ApiError> {
    let clip = assistant::speak_exercise(&state, &session, id, exercise_id).await?;
    Ok(Json(clip))
}
