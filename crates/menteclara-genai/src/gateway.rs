//! Seams between the API and the model provider.

use async_trait::async_trait;

use menteclara_core::models::exercise::ExerciseContent;

use crate::client::GeminiClient;
use crate::error::GenAiError;

#[async_trait]
pub trait ExerciseGenerator: Send + Sync {
    async fn generate_exercise(&self, symptoms: &str) -> Result<ExerciseContent, GenAiError>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Base64 LE 16-bit PCM, mono, 24 kHz.
    async fn synthesize_speech(&self, text: &str) -> Result<String, GenAiError>;
}

#[async_trait]
impl ExerciseGenerator for GeminiClient {
    async fn generate_exercise(&self, symptoms: &str) -> Result<ExerciseContent, GenAiError> {
        GeminiClient::generate_exercise(self, symptoms).await
    }
}

#[async_trait]
impl SpeechSynthesizer for GeminiClient {
    async fn synthesize_speech(&self, text: &str) -> Result<String, GenAiError> {
        GeminiClient::synthesize_speech(self, text).await
    }
}
