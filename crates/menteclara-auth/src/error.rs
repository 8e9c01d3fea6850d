use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account is disabled")]
    AccountDisabled,

    #[error("access denied while the assigned therapist is disabled")]
    GuardianDisabled,

    #[error("not permitted: {0}")]
    Forbidden(Action),

    #[error("account no longer exists")]
    UnknownAccount,
}

/// Operations gated by a capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateTherapist,
    CreatePatient,
    SetStatus,
    ViewPatient,
    ListTherapists,
    ListPatients,
    AssignExercise,
    CompleteExercise,
    AddTask,
    ToggleTask,
    UseAssistant,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::CreateTherapist => "create therapist",
            Action::CreatePatient => "create patient",
            Action::SetStatus => "change account status",
            Action::ViewPatient => "view patient",
            Action::ListTherapists => "list therapists",
            Action::ListPatients => "list patients",
            Action::AssignExercise => "assign exercise",
            Action::CompleteExercise => "complete exercise",
            Action::AddTask => "add task",
            Action::ToggleTask => "toggle task",
            Action::UseAssistant => "use the exercise assistant",
        };
        f.write_str(s)
    }
}
