use serde_json::json;
use tracing::info;
use uuid::Uuid;

use menteclara_auth::access::{self, StatusTarget};
use menteclara_auth::error::{Action, AuthError};
use menteclara_auth::flows::{self, Directory};
use menteclara_core::models::account::{
    Account, AccountStatus, Actor, NewAccount, Password, Role,
};
use menteclara_core::models::dashboard::{PatientOverview, TherapistOverview};
use menteclara_core::models::exercise::{Exercise, ExerciseCompletion, ExerciseDraft, MoodRating};
use menteclara_core::models::patient::Patient;
use menteclara_core::models::progress::ProgressEntry;
use menteclara_core::models::task::Task;

use crate::audit::AuditEvent;
use crate::error::StoreError;
use crate::progress;

/// The single source of truth for accounts and patient records.
#[derive(Debug)]
pub struct Store {
    admins: Vec<Account>,
    therapists: Vec<Account>,
    patients: Vec<Patient>,
    record_progress: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory for Store {
    fn admins(&self) -> &[Account] {
        &self.admins
    }

    fn therapists(&self) -> &[Account] {
        &self.therapists
    }

    fn patients(&self) -> &[Patient] {
        &self.patients
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            admins: Vec::new(),
            therapists: Vec::new(),
            patients: Vec::new(),
            record_progress: true,
        }
    }

    /// Whether completing an exercise appends a progress entry.
    pub fn with_progress_tracking(mut self, enabled: bool) -> Self {
        self.record_progress = enabled;
        self
    }

    // ── Lookups ──────────────────────────────────────────────────────────────

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.admins
            .iter()
            .chain(self.therapists.iter())
            .chain(self.patients.iter().map(|p| &p.account))
            .find(|a| a.id == id)
    }

    fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.admins
            .iter_mut()
            .chain(self.therapists.iter_mut())
            .chain(self.patients.iter_mut().map(|p| &mut p.account))
            .find(|a| a.id == id)
    }

    pub fn patient(&self, id: Uuid) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    fn patient_index(&self, id: Uuid) -> Result<usize, StoreError> {
        self.patients
            .iter()
            .position(|p| p.id() == id)
            .ok_or(StoreError::PatientNotFound(id))
    }

    pub fn email_taken(&self, email: &str) -> bool {
        let email = flows::normalize_email(email);
        self.admins
            .iter()
            .chain(self.therapists.iter())
            .chain(self.patients.iter().map(|p| &p.account))
            .any(|a| a.email == email)
    }

    // ── Authentication ───────────────────────────────────────────────────────

    /// Check credentials and stamp the account's last login.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<Actor, StoreError> {
        let actor = flows::authenticate(&*self, email, password)?;
        if let Some(account) = self.account_mut(actor.id()) {
            account.last_login_at = Some(jiff::Timestamp::now());
        }
        Ok(actor)
    }

    /// Re-apply the admission rules to an existing session.
    pub fn revalidate(&self, actor: &Actor) -> Result<(), StoreError> {
        flows::revalidate(self, actor)?;
        Ok(())
    }

    // ── Account creation ─────────────────────────────────────────────────────

    fn prepare_account(&self, role: Role, new: NewAccount) -> Result<Account, StoreError> {
        let name = new.name.trim();
        let email = flows::normalize_email(&new.email);
        let password = new.password.trim();

        if name.is_empty() {
            return Err(StoreError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(StoreError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(StoreError::MissingField("password"));
        }
        if self.email_taken(&email) {
            return Err(StoreError::DuplicateEmail { email });
        }

        Ok(Account::new(role, name, email, Password::new(password)))
    }

    /// Register an administrator. Used when bootstrapping the store.
    pub fn add_admin(&mut self, new: NewAccount) -> Result<Account, StoreError> {
        let account = self.prepare_account(Role::Admin, new)?;
        info!(account_id = %account.id, "admin registered");
        self.admins.push(account.clone());
        Ok(account)
    }

    /// Append historical progress rows. Used when bootstrapping the store.
    pub fn import_progress(
        &mut self,
        patient_id: Uuid,
        entries: impl IntoIterator<Item = ProgressEntry>,
    ) -> Result<(), StoreError> {
        let idx = self.patient_index(patient_id)?;
        self.patients[idx].progress.extend(entries);
        Ok(())
    }

    pub fn create_therapist(
        &mut self,
        actor: &Actor,
        new: NewAccount,
    ) -> Result<Account, StoreError> {
        access::can_create_therapist(actor)?;
        let account = self.prepare_account(Role::Therapist, new)?;

        AuditEvent::new("create", "therapist", account.id, *actor).emit();
        self.therapists.push(account.clone());
        Ok(account)
    }

    /// Register a patient bound to the acting therapist.
    pub fn create_patient(&mut self, actor: &Actor, new: NewAccount) -> Result<Patient, StoreError> {
        let therapist_id = access::can_create_patient(actor)?;
        let account = self.prepare_account(Role::Patient, new)?;
        let patient = Patient::new(account, therapist_id);

        AuditEvent::new("create", "patient", patient.id(), *actor)
            .with_details(json!({ "therapist_id": therapist_id }))
            .emit();
        self.patients.push(patient.clone());
        Ok(patient)
    }

    // ── Status ───────────────────────────────────────────────────────────────

    pub fn set_account_status(
        &mut self,
        actor: &Actor,
        target_id: Uuid,
        status: AccountStatus,
    ) -> Result<AccountStatus, StoreError> {
        let target = if let Some(patient) = self.patient(target_id) {
            StatusTarget::Patient(patient)
        } else {
            let account = self
                .account(target_id)
                .ok_or(StoreError::AccountNotFound(target_id))?;
            StatusTarget::Account(account)
        };
        access::can_set_status(actor, target)?;

        let account = self
            .account_mut(target_id)
            .ok_or(StoreError::AccountNotFound(target_id))?;
        account.status = status;

        AuditEvent::new("set_status", "account", target_id, *actor)
            .with_details(json!({ "status": status }))
            .emit();
        Ok(status)
    }

    pub fn toggle_account_status(
        &mut self,
        actor: &Actor,
        target_id: Uuid,
    ) -> Result<AccountStatus, StoreError> {
        let current = self
            .account(target_id)
            .ok_or(StoreError::AccountNotFound(target_id))?
            .status;
        self.set_account_status(actor, target_id, current.toggled())
    }

    // ── Views ────────────────────────────────────────────────────────────────

    pub fn view_patient(&self, actor: &Actor, patient_id: Uuid) -> Result<&Patient, StoreError> {
        let patient = self
            .patient(patient_id)
            .ok_or(StoreError::PatientNotFound(patient_id))?;
        access::can_view_patient(actor, patient)?;
        Ok(patient)
    }

    /// Admins see every patient, therapists only their own.
    pub fn list_patients(&self, actor: &Actor) -> Result<Vec<PatientOverview>, StoreError> {
        access::can_list_patients(actor)?;
        let rows = self
            .patients
            .iter()
            .filter(|p| match actor {
                Actor::Therapist(id) => p.therapist_id == *id,
                _ => true,
            })
            .map(PatientOverview::from_patient)
            .collect();
        Ok(rows)
    }

    pub fn list_therapists(&self, actor: &Actor) -> Result<Vec<TherapistOverview>, StoreError> {
        access::can_list_therapists(actor)?;
        let rows = self
            .therapists
            .iter()
            .map(|t| TherapistOverview {
                account: t.clone(),
                patient_count: self
                    .patients
                    .iter()
                    .filter(|p| p.therapist_id == t.id)
                    .count() as u32,
            })
            .collect();
        Ok(rows)
    }

    // ── Exercises ────────────────────────────────────────────────────────────

    /// Append a new pending exercise to a patient's list.
    ///
    /// Patients always assign to themselves; therapists must name a patient.
    pub fn assign_exercise(
        &mut self,
        actor: &Actor,
        target: Option<Uuid>,
        draft: ExerciseDraft,
    ) -> Result<Exercise, StoreError> {
        let patient_id = match *actor {
            Actor::Patient(id) => target.unwrap_or(id),
            Actor::Therapist(_) => target.ok_or(StoreError::NoPatientSelected)?,
            Actor::Admin(_) => return Err(AuthError::Forbidden(Action::AssignExercise).into()),
        };
        if draft.content.title.trim().is_empty() {
            return Err(StoreError::MissingField("title"));
        }

        let idx = self.patient_index(patient_id)?;
        access::can_assign_exercise(actor, &self.patients[idx])?;

        let exercise = Exercise::from_draft(draft);
        AuditEvent::new("assign", "exercise", exercise.id, *actor)
            .with_details(json!({ "patient_id": patient_id, "title": exercise.title }))
            .emit();
        self.patients[idx].exercises.push(exercise.clone());
        Ok(exercise)
    }

    /// Mark a pending exercise as completed.
    ///
    /// Re-completing fails with `AlreadyCompleted`. When progress tracking is
    /// on, a summary of the day's completions is appended to the history.
    pub fn complete_exercise(
        &mut self,
        actor: &Actor,
        patient_id: Uuid,
        exercise_id: Uuid,
        notes: Option<String>,
        mood_rating: i64,
    ) -> Result<Exercise, StoreError> {
        let idx = self.patient_index(patient_id)?;
        access::can_complete_exercise(actor, &self.patients[idx])?;
        let mood_rating_after = MoodRating::new(mood_rating)?;

        let record_progress = self.record_progress;
        let patient = &mut self.patients[idx];
        let exercise = patient
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or(StoreError::ExerciseNotFound {
                patient_id,
                exercise_id,
            })?;
        if exercise.is_completed() {
            return Err(StoreError::AlreadyCompleted(exercise_id));
        }

        let completed_at = jiff::Timestamp::now();
        exercise.completion = Some(ExerciseCompletion {
            completed_at,
            notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            mood_rating_after,
        });
        let completed = exercise.clone();

        if record_progress {
            let entry = progress::summarize_day(&patient.exercises, completed_at);
            patient.progress.push(entry);
        }

        AuditEvent::new("complete", "exercise", exercise_id, *actor)
            .with_details(json!({ "mood_rating": mood_rating }))
            .emit();
        Ok(completed)
    }

    // ── Tasks ────────────────────────────────────────────────────────────────

    pub fn add_task(
        &mut self,
        actor: &Actor,
        patient_id: Uuid,
        content: &str,
    ) -> Result<Task, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::MissingField("content"));
        }
        let idx = self.patient_index(patient_id)?;
        access::can_add_task(actor, &self.patients[idx])?;

        let task = Task::new(content);
        AuditEvent::new("create", "task", task.id, *actor).emit();
        self.patients[idx].tasks.push(task.clone());
        Ok(task)
    }

    pub fn toggle_task(
        &mut self,
        actor: &Actor,
        patient_id: Uuid,
        task_id: Uuid,
    ) -> Result<Task, StoreError> {
        let idx = self.patient_index(patient_id)?;
        access::can_toggle_task(actor, &self.patients[idx])?;

        let task = self.patients[idx]
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound {
                patient_id,
                task_id,
            })?;
        let completed = task.toggle();

        AuditEvent::new("toggle", "task", task_id, *actor)
            .with_details(json!({ "completed": completed }))
            .emit();
        Ok(task.clone())
    }
}
