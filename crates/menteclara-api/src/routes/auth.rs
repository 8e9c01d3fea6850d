use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menteclara_core::models::account::{Account, Actor};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::CurrentSession;
use crate::session::{self, Session};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub actor: Actor,
    pub account: Account,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub actor: Actor,
    pub account: Account,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (actor, account) = {
        let mut store = state.store.lock().await;
        let actor = store.authenticate(&req.email, &req.password)?;
        let account = store
            .account(actor.id())
            .cloned()
            .ok_or_else(|| ApiError::Internal(format!("account vanished: {}", actor.id())))?;
        (actor, account)
    };

    let token = Uuid::new_v4();
    let mut sessions = state.sessions.lock().await;
    let purged = session::purge_expired(&mut sessions, state.session_idle);
    if purged > 0 {
        tracing::info!(purged, "expired sessions dropped");
    }
    sessions.insert(token, Session::new(actor));
    drop(sessions);

    Ok(Json(LoginResponse {
        token,
        actor,
        account,
    }))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Json<()> {
    state.sessions.lock().await.remove(&session.token);
    tracing::info!(account_id = %session.actor.id(), "logged out");
    Json(())
}

pub async fn me(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<MeResponse>, ApiError> {
    let account = state
        .store
        .lock()
        .await
        .account(session.actor.id())
        .cloned()
        .ok_or_else(|| ApiError::Unauthorized("account no longer exists".to_string()))?;
    Ok(Json(MeResponse {
        actor: session.actor,
        account,
    }))
}
