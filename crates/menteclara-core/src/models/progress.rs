use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of a patient's progress history. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressEntry {
    pub date: jiff::Timestamp,
    /// 0-10, one decimal.
    pub mood_average: f64,
    pub exercises_completed: u32,
}
