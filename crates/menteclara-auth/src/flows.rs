use tracing::{info, warn};
use uuid::Uuid;

use menteclara_core::models::account::{Account, Actor};
use menteclara_core::models::patient::Patient;

use crate::error::AuthError;

/// Read access to every login-capable record.
pub trait Directory {
    fn admins(&self) -> &[Account];
    fn therapists(&self) -> &[Account];
    fn patients(&self) -> &[Patient];

    fn therapist(&self, id: Uuid) -> Option<&Account> {
        self.therapists().iter().find(|t| t.id == id)
    }

    fn patient(&self, id: Uuid) -> Option<&Patient> {
        self.patients().iter().find(|p| p.id() == id)
    }
}

/// Canonical form for stored and submitted emails.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The cascading deactivation rule.
///
/// A patient may enter only while both the patient and the referenced
/// therapist are active. A therapist reference that no longer resolves does
/// not block access.
pub fn guardian_gate(patient: &Patient, therapist: Option<&Account>) -> Result<(), AuthError> {
    if !patient.account.is_active() {
        return Err(AuthError::AccountDisabled);
    }
    match therapist {
        Some(t) if !t.is_active() => Err(AuthError::GuardianDisabled),
        _ => Ok(()),
    }
}

/// Resolve credentials to an actor.
///
/// Administrators are matched first, then therapists, then patients.
pub fn authenticate<D: Directory + ?Sized>(
    directory: &D,
    email: &str,
    password: &str,
) -> Result<Actor, AuthError> {
    let email = normalize_email(email);
    let password = password.trim();

    let matches = |account: &Account| account.email == email && account.password.matches(password);

    if let Some(admin) = directory.admins().iter().find(|a| matches(*a)) {
        info!(account_id = %admin.id, "admin authenticated");
        return Ok(Actor::Admin(admin.id));
    }

    if let Some(therapist) = directory.therapists().iter().find(|t| matches(*t)) {
        if !therapist.is_active() {
            warn!(account_id = %therapist.id, "login rejected: therapist disabled");
            return Err(AuthError::AccountDisabled);
        }
        info!(account_id = %therapist.id, "therapist authenticated");
        return Ok(Actor::Therapist(therapist.id));
    }

    if let Some(patient) = directory.patients().iter().find(|p| matches(&p.account)) {
        if let Err(e) = guardian_gate(patient, directory.therapist(patient.therapist_id)) {
            warn!(account_id = %patient.id(), reason = %e, "login rejected");
            return Err(e);
        }
        info!(account_id = %patient.id(), "patient authenticated");
        return Ok(Actor::Patient(patient.id()));
    }

    warn!("login rejected: invalid credentials");
    Err(AuthError::InvalidCredentials)
}

/// Re-apply the admission rules to an already established session.
pub fn revalidate<D: Directory + ?Sized>(directory: &D, actor: &Actor) -> Result<(), AuthError> {
    match *actor {
        Actor::Admin(id) => directory
            .admins()
            .iter()
            .any(|a| a.id == id)
            .then_some(())
            .ok_or(AuthError::UnknownAccount),
        Actor::Therapist(id) => {
            let therapist = directory.therapist(id).ok_or(AuthError::UnknownAccount)?;
            if therapist.is_active() {
                Ok(())
            } else {
                Err(AuthError::AccountDisabled)
            }
        }
        Actor::Patient(id) => {
            let patient = directory.patient(id).ok_or(AuthError::UnknownAccount)?;
            guardian_gate(patient, directory.therapist(patient.therapist_id))
        }
    }
}
