use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use menteclara_auth::error::AuthError;
use menteclara_core::error::CoreError;
use menteclara_store::error::StoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Auth(AuthError),
    DuplicateEmail(String),
    MissingField(String),
    InvalidMoodRating(i64),
    NotFound(String),
    AlreadyCompleted(Uuid),
    NoPatientSelected,
    NoExerciseGenerated,
    GenerationFailed(String),
    SpeechFailed(String),
    Busy,
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    /// Stable machine-readable kind, sent as `error` in the body.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Auth(AuthError::InvalidCredentials) => "invalid_credentials",
            ApiError::Auth(AuthError::AccountDisabled) => "account_disabled",
            ApiError::Auth(AuthError::GuardianDisabled) => "guardian_disabled",
            ApiError::Auth(AuthError::Forbidden(_)) => "forbidden",
            ApiError::Auth(AuthError::UnknownAccount) => "unauthorized",
            ApiError::DuplicateEmail(_) => "duplicate_email",
            ApiError::MissingField(_) => "missing_field",
            ApiError::InvalidMoodRating(_) => "invalid_mood_rating",
            ApiError::NotFound(_) => "not_found",
            ApiError::AlreadyCompleted(_) => "already_completed",
            ApiError::NoPatientSelected => "no_patient_selected",
            ApiError::NoExerciseGenerated => "no_exercise_generated",
            ApiError::GenerationFailed(_) => "generation_failed",
            ApiError::SpeechFailed(_) => "speech_failed",
            ApiError::Busy => "busy",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_)
            | ApiError::Auth(AuthError::InvalidCredentials)
            | ApiError::Auth(AuthError::UnknownAccount) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicateEmail(_) | ApiError::AlreadyCompleted(_) | ApiError::Busy => {
                StatusCode::CONFLICT
            }
            ApiError::MissingField(_)
            | ApiError::InvalidMoodRating(_)
            | ApiError::NoPatientSelected
            | ApiError::NoExerciseGenerated
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::GenerationFailed(_) | ApiError::SpeechFailed(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> String {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg) => msg,
            ApiError::Auth(e) => e.to_string(),
            ApiError::DuplicateEmail(email) => format!("email already registered: {email}"),
            ApiError::MissingField(field) => format!("missing required field: {field}"),
            ApiError::InvalidMoodRating(v) => format!("mood rating {v} is outside the range 1-10"),
            ApiError::AlreadyCompleted(id) => format!("exercise already completed: {id}"),
            ApiError::NoPatientSelected => "select a patient before assigning".to_string(),
            ApiError::NoExerciseGenerated => "generate an exercise before assigning".to_string(),
            ApiError::GenerationFailed(msg) => format!("exercise generation failed: {msg}"),
            ApiError::SpeechFailed(msg) => format!("speech synthesis failed: {msg}"),
            ApiError::Busy => "a request of this kind is already in progress".to_string(),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                "internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.kind();
        let message = self.message();

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Auth(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Auth(e) => ApiError::Auth(e),
            StoreError::Core(CoreError::InvalidMoodRating(v)) => ApiError::InvalidMoodRating(v),
            StoreError::DuplicateEmail { email } => ApiError::DuplicateEmail(email),
            StoreError::MissingField(field) => ApiError::MissingField(field.to_string()),
            e @ (StoreError::AccountNotFound(_)
            | StoreError::PatientNotFound(_)
            | StoreError::ExerciseNotFound { .. }
            | StoreError::TaskNotFound { .. }) => ApiError::NotFound(e.to_string()),
            StoreError::AlreadyCompleted(id) => ApiError::AlreadyCompleted(id),
            StoreError::NoPatientSelected => ApiError::NoPatientSelected,
            StoreError::Seed(msg) => ApiError::Internal(msg),
        }
    }
}
