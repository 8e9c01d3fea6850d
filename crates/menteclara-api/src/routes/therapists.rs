use axum::extract::State;
use axum::{Extension, Json};

use menteclara_core::models::account::{Account, NewAccount};
use menteclara_core::models::dashboard::TherapistOverview;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

pub async fn list_therapists(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<Vec<TherapistOverview>>, ApiError> {
    let rows = state.store.lock().await.list_therapists(&session.actor)?;
    Ok(Json(rows))
}

pub async fn create_therapist(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ApiJson(new): ApiJson<NewAccount>,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .store
        .lock()
        .await
        .create_therapist(&session.actor, new)?;
    Ok(Json(account))
}
