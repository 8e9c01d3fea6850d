use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use menteclara_core::models::account::NewAccount;
use menteclara_core::models::dashboard::PatientOverview;
use menteclara_core::models::patient::Patient;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

pub async fn list_patients(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<Vec<PatientOverview>>, ApiError> {
    let rows = state.store.lock().await.list_patients(&session.actor)?;
    Ok(Json(rows))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ApiJson(new): ApiJson<NewAccount>,
) -> Result<Json<Patient>, ApiError> {
    let patient = state
        .store
        .lock()
        .await
        .create_patient(&session.actor, new)?;
    Ok(Json(patient))
}

/// Always read fresh from the store, so assignments made by anyone are
/// visible on the next fetch.
pub async fn get_patient(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, ApiError> {
    let patient = state
        .store
        .lock()
        .await
        .view_patient(&session.actor, id)?
        .clone();
    Ok(Json(patient))
}
