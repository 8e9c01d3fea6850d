use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;
use uuid::Uuid;

use menteclara_core::models::account::Actor;

use crate::error::ApiError;
use crate::state::AppState;

/// Session middleware.
///
/// Resolves `Authorization: Bearer <token>` to a live session and re-checks
/// the account against the store, so a deactivation takes effect on the
/// next request. A session that fails the check is dropped.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&req)?;

    let actor = {
        let mut sessions = state.sessions.lock().await;
        let session = sessions
            .get_mut(&token)
            .ok_or_else(|| ApiError::Unauthorized("unknown session".to_string()))?;
        if session.is_expired(state.session_idle) {
            let actor = session.actor;
            sessions.remove(&token);
            info!(account_id = %actor.id(), "session expired");
            return Err(ApiError::Unauthorized("session expired".to_string()));
        }
        session.last_seen = Instant::now();
        session.actor
    };

    let check = state.store.lock().await.revalidate(&actor);
    if let Err(e) = check {
        state.sessions.lock().await.remove(&token);
        info!(account_id = %actor.id(), reason = %e, "session revoked");
        return Err(e.into());
    }

    req.extensions_mut().insert(CurrentSession { token, actor });
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Result<Uuid, ApiError> {
    let header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    Uuid::parse_str(token).map_err(|_| ApiError::Unauthorized("malformed token".to_string()))
}

/// The authenticated caller, inserted into request extensions.
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession {
    pub token: Uuid,
    pub actor: Actor,
}
