use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("no Gemini API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("audio decoding failed: {0}")]
    AudioDecode(String),
}
