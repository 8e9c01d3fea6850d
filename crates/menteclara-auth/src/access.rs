//! Capability checks, one per operation.
//!
//! Each check takes the acting [`Actor`] and the records the operation
//! touches, and returns `Forbidden` naming the operation when the actor may
//! not perform it.

use uuid::Uuid;

use menteclara_core::models::account::{Account, Actor, Role};
use menteclara_core::models::patient::Patient;

use crate::error::{Action, AuthError};

/// The record whose status an actor wants to change.
#[derive(Debug, Clone, Copy)]
pub enum StatusTarget<'a> {
    Account(&'a Account),
    Patient(&'a Patient),
}

fn deny(action: Action) -> AuthError {
    AuthError::Forbidden(action)
}

fn is_treating_therapist(actor: &Actor, patient: &Patient) -> bool {
    matches!(*actor, Actor::Therapist(id) if id == patient.therapist_id)
}

fn is_self(actor: &Actor, patient: &Patient) -> bool {
    matches!(*actor, Actor::Patient(id) if id == patient.id())
}

pub fn can_create_therapist(actor: &Actor) -> Result<(), AuthError> {
    match actor {
        Actor::Admin(_) => Ok(()),
        _ => Err(deny(Action::CreateTherapist)),
    }
}

/// Returns the therapist id new patients are bound to.
pub fn can_create_patient(actor: &Actor) -> Result<Uuid, AuthError> {
    match *actor {
        Actor::Therapist(id) => Ok(id),
        _ => Err(deny(Action::CreatePatient)),
    }
}

/// Administrators toggle therapists; therapists toggle their own patients.
pub fn can_set_status(actor: &Actor, target: StatusTarget<'_>) -> Result<(), AuthError> {
    let allowed = match (actor, target) {
        (Actor::Admin(_), StatusTarget::Account(account)) => account.role == Role::Therapist,
        (Actor::Therapist(_), StatusTarget::Patient(patient)) => {
            is_treating_therapist(actor, patient)
        }
        _ => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(deny(Action::SetStatus))
    }
}

pub fn can_list_therapists(actor: &Actor) -> Result<(), AuthError> {
    match actor {
        Actor::Admin(_) => Ok(()),
        _ => Err(deny(Action::ListTherapists)),
    }
}

pub fn can_list_patients(actor: &Actor) -> Result<(), AuthError> {
    match actor {
        Actor::Admin(_) | Actor::Therapist(_) => Ok(()),
        Actor::Patient(_) => Err(deny(Action::ListPatients)),
    }
}

pub fn can_view_patient(actor: &Actor, patient: &Patient) -> Result<(), AuthError> {
    let allowed = matches!(actor, Actor::Admin(_))
        || is_treating_therapist(actor, patient)
        || is_self(actor, patient);
    if allowed {
        Ok(())
    } else {
        Err(deny(Action::ViewPatient))
    }
}

/// Therapists assign to their own patients; patients self-assign.
pub fn can_assign_exercise(actor: &Actor, patient: &Patient) -> Result<(), AuthError> {
    if is_treating_therapist(actor, patient) || is_self(actor, patient) {
        Ok(())
    } else {
        Err(deny(Action::AssignExercise))
    }
}

pub fn can_complete_exercise(actor: &Actor, patient: &Patient) -> Result<(), AuthError> {
    if is_self(actor, patient) {
        Ok(())
    } else {
        Err(deny(Action::CompleteExercise))
    }
}

pub fn can_add_task(actor: &Actor, patient: &Patient) -> Result<(), AuthError> {
    if is_treating_therapist(actor, patient) || is_self(actor, patient) {
        Ok(())
    } else {
        Err(deny(Action::AddTask))
    }
}

pub fn can_toggle_task(actor: &Actor, patient: &Patient) -> Result<(), AuthError> {
    if is_self(actor, patient) {
        Ok(())
    } else {
        Err(deny(Action::ToggleTask))
    }
}

pub fn can_use_assistant(actor: &Actor) -> Result<(), AuthError> {
    match actor {
        Actor::Therapist(_) | Actor::Patient(_) => Ok(()),
        Actor::Admin(_) => Err(deny(Action::UseAssistant)),
    }
}
