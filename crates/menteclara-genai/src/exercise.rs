use tracing::{info, warn};

use menteclara_core::models::exercise::ExerciseContent;

use crate::client::GeminiClient;
use crate::error::GenAiError;
use crate::prompt;

pub const MIN_STEPS: usize = 3;
pub const MAX_STEPS: usize = 5;

/// Validate a structured-output payload.
///
/// A blank title or an empty step list is a schema violation. Step counts
/// outside 3..=5 are accepted and logged.
pub fn parse_exercise(response_text: &str) -> Result<ExerciseContent, GenAiError> {
    let mut content: ExerciseContent = serde_json::from_str(response_text).map_err(|e| {
        GenAiError::SchemaViolation(format!(
            "failed to parse ExerciseContent: {e}. Response: {response_text}"
        ))
    })?;

    content.title = content.title.trim().to_string();
    content.description = content.description.trim().to_string();
    content.steps = content
        .steps
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if content.title.is_empty() {
        return Err(GenAiError::SchemaViolation("empty title".to_string()));
    }
    if content.steps.is_empty() {
        return Err(GenAiError::SchemaViolation("no steps".to_string()));
    }
    if !(MIN_STEPS..=MAX_STEPS).contains(&content.steps.len()) {
        warn!(steps = content.steps.len(), "exercise step count outside 3..=5");
    }
    Ok(content)
}

impl GeminiClient {
    /// Ask the exercise model for a CBT exercise addressing `symptoms`.
    pub async fn generate_exercise(&self, symptoms: &str) -> Result<ExerciseContent, GenAiError> {
        let model = self.config().exercise_model.clone();
        let response = self
            .generate_content(&model, &prompt::exercise_request(symptoms))
            .await?;
        let text = response
            .text()
            .ok_or_else(|| GenAiError::ResponseParse("no text in response".to_string()))?;

        let content = parse_exercise(&text)?;
        info!(model = %model, title = %content.title, steps = content.steps.len(), "exercise generated");
        Ok(content)
    }
}
