//! The exercise assistant: generate a preview, assign it, read it aloud.
//!
//! External calls happen with no store or session lock held. Each session
//! may run one generation and one synthesis at a time.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use menteclara_auth::access;
use menteclara_core::models::exercise::{Exercise, ExerciseDraft};
use menteclara_genai::speech::decode_pcm;

use crate::busy::BusyKind;
use crate::error::ApiError;
use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechClip {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_ms: u64,
    pub audio_base64: String,
}

/// Generate an exercise for `symptoms` and keep it as the session's preview.
///
/// On failure the previous preview and the store are left as they were.
pub async fn generate_preview(
    state: &AppState,
    session: &CurrentSession,
    symptoms: &str,
) -> Result<ExerciseDraft, ApiError> {
    access::can_use_assistant(&session.actor)?;
    let symptoms = symptoms.trim();
    if symptoms.is_empty() {
        return Err(ApiError::MissingField("symptoms".to_string()));
    }

    let _guard = state
        .busy
        .try_acquire(session.token, BusyKind::Generation)
        .ok_or(ApiError::Busy)?;

    let content = state
        .generator
        .generate_exercise(symptoms)
        .await
        .map_err(|e| {
            warn!(account_id = %session.actor.id(), error = %e, "exercise generation failed");
            ApiError::GenerationFailed(e.to_string())
        })?;

    let draft = ExerciseDraft {
        content,
        symptoms: symptoms.to_string(),
    };
    let mut sessions = state.sessions.lock().await;
    let entry = sessions
        .get_mut(&session.token)
        .ok_or_else(|| ApiError::Unauthorized("session ended".to_string()))?;
    entry.preview = Some(draft.clone());

    info!(account_id = %session.actor.id(), title = %draft.content.title, "exercise preview ready");
    Ok(draft)
}

/// Assign the session's preview, consuming it on success.
pub async fn assign_preview(
    state: &AppState,
    session: &CurrentSession,
    patient_id: Option<Uuid>,
) -> Result<Exercise, ApiError> {
    access::can_use_assistant(&session.actor)?;
    let draft = state
        .sessions
        .lock()
        .await
        .get(&session.token)
        .and_then(|s| s.preview.clone())
        .ok_or(ApiError::NoExerciseGenerated)?;

    let exercise = state
        .store
        .lock()
        .await
        .assign_exercise(&session.actor, patient_id, draft.clone())?;

    // A newer preview generated meanwhile is kept.
    if let Some(entry) = state.sessions.lock().await.get_mut(&session.token) {
        if entry.preview.as_ref() == Some(&draft) {
            entry.preview = None;
        }
    }
    Ok(exercise)
}

/// Read an assigned exercise aloud.
pub async fn speak_exercise(
    state: &AppState,
    session: &CurrentSession,
    patient_id: Uuid,
    exercise_id: Uuid,
) -> Result<SpeechClip, ApiError> {
    let script = {
        let store = state.store.lock().await;
        let patient = store.view_patient(&session.actor, patient_id)?;
        patient
            .exercise(exercise_id)
            .ok_or_else(|| ApiError::NotFound(format!("exercise not found: {exercise_id}")))?
            .speech_script()
    };

    let _guard = state
        .busy
        .try_acquire(session.token, BusyKind::Speech)
        .ok_or(ApiError::Busy)?;

    let audio_base64 = state
        .speech
        .synthesize_speech(&script)
        .await
        .map_err(|e| {
            warn!(exercise_id = %exercise_id, error = %e, "speech synthesis failed");
            ApiError::SpeechFailed(e.to_string())
        })?;
    let pcm = decode_pcm(&audio_base64).map_err(|e| ApiError::SpeechFailed(e.to_string()))?;

    Ok(SpeechClip {
        sample_rate: pcm.sample_rate,
        channels: pcm.channels,
        duration_ms: pcm.duration_ms(),
        audio_base64,
    })
}
