use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A to-do item on a patient's list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Task {
    pub id: Uuid,
    pub content: String,
    pub completed: bool,
}

impl Task {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
