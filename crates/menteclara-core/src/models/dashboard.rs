//! Read-only rows for the admin and therapist dashboards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::account::{Account, AccountStatus};
use super::patient::Patient;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientOverview {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: AccountStatus,
    pub therapist_id: Uuid,
    pub exercises_completed: u32,
    pub exercises_total: u32,
}

impl PatientOverview {
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            id: patient.id(),
            name: patient.account.name.clone(),
            email: patient.account.email.clone(),
            status: patient.account.status,
            therapist_id: patient.therapist_id,
            exercises_completed: patient.completed_count() as u32,
            exercises_total: patient.exercises.len() as u32,
        }
    }

    /// Completion ratio in percent, 0 when nothing is assigned.
    pub fn completion_percent(&self) -> f64 {
        if self.exercises_total == 0 {
            return 0.0;
        }
        f64::from(self.exercises_completed) / f64::from(self.exercises_total) * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapistOverview {
    pub account: Account,
    pub patient_count: u32,
}
