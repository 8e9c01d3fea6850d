use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::account::Account;
use super::exercise::Exercise;
use super::progress::ProgressEntry;
use super::task::Task;

/// A patient account together with everything the patient owns.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    #[serde(flatten)]
    pub account: Account,
    /// Assigned at creation and never reassigned. May dangle.
    pub therapist_id: Uuid,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
}

impl Patient {
    pub fn new(account: Account, therapist_id: Uuid) -> Self {
        Self {
            account,
            therapist_id,
            exercises: Vec::new(),
            tasks: Vec::new(),
            progress: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.account.id
    }

    pub fn exercise(&self, exercise_id: Uuid) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }

    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.is_completed()).count()
    }
}
