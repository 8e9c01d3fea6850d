use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Post-exercise mood self-assessment, 1 (worst) to 10 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct MoodRating(u8);

impl MoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Accepts any integer so out-of-range input is reported as a rating error.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(CoreError::InvalidMoodRating(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MoodRating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<MoodRating> for u8 {
    fn from(rating: MoodRating) -> Self {
        rating.0
    }
}

/// Exercise content as produced by the generator or typed by a therapist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseContent {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
}

/// Everything needed to assign a new exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseDraft {
    #[serde(flatten)]
    pub content: ExerciseContent,
    /// The symptom or situation the exercise addresses.
    pub symptoms: String,
}

/// Completion metadata. Present only once the exercise is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseCompletion {
    pub completed_at: jiff::Timestamp,
    #[serde(default)]
    pub notes: Option<String>,
    pub mood_rating_after: MoodRating,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exercise {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub symptoms_addressed: String,
    pub steps: Vec<String>,
    pub assigned_at: jiff::Timestamp,
    #[serde(default)]
    pub completion: Option<ExerciseCompletion>,
}

impl Exercise {
    pub fn from_draft(draft: ExerciseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.content.title,
            description: draft.content.description,
            symptoms_addressed: draft.symptoms,
            steps: draft.content.steps,
            assigned_at: jiff::Timestamp::now(),
            completion: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Text read aloud by the speech collaborator.
    pub fn speech_script(&self) -> String {
        format!(
            "{}. {}. {}.",
            self.title,
            self.description,
            self.steps.join(". ")
        )
    }
}
