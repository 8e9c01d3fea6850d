use thiserror::Error;
use uuid::Uuid;

use menteclara_auth::error::AuthError;
use menteclara_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("patient not found: {0}")]
    PatientNotFound(Uuid),

    #[error("exercise {exercise_id} not found for patient {patient_id}")]
    ExerciseNotFound { patient_id: Uuid, exercise_id: Uuid },

    #[error("exercise already completed: {0}")]
    AlreadyCompleted(Uuid),

    #[error("task {task_id} not found for patient {patient_id}")]
    TaskNotFound { patient_id: Uuid, task_id: Uuid },

    #[error("no patient selected")]
    NoPatientSelected,

    #[error("invalid seed data: {0}")]
    Seed(String),
}
