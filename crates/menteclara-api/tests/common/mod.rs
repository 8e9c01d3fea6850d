#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::sync::Notify;
use tower::ServiceExt;

use menteclara_api::state::AppState;
use menteclara_core::models::exercise::ExerciseContent;
use menteclara_genai::error::GenAiError;
use menteclara_genai::gateway::{ExerciseGenerator, SpeechSynthesizer};
use menteclara_store::seed::demo_store;

pub fn breathing() -> ExerciseContent {
    ExerciseContent {
        title: "Respiración Cuadrada".to_string(),
        description: "Regula la respuesta al estrés.".to_string(),
        steps: vec![
            "Inhala 4 segundos".to_string(),
            "Sostén 4 segundos".to_string(),
            "Exhala 4 segundos".to_string(),
        ],
    }
}

/// Returns a fixed exercise, or fails for symptoms containing "insomnio".
#[derive(Default)]
pub struct FakeGenerator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ExerciseGenerator for FakeGenerator {
    async fn generate_exercise(&self, symptoms: &str) -> Result<ExerciseContent, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if symptoms.contains("insomnio") {
            return Err(GenAiError::Api {
                status: 503,
                body: "overloaded".to_string(),
            });
        }
        Ok(breathing())
    }
}

/// Blocks until released, signalling once the call has started.
#[derive(Default)]
pub struct GatedGenerator {
    pub started: Notify,
    pub release: Notify,
}

#[async_trait]
impl ExerciseGenerator for GatedGenerator {
    async fn generate_exercise(&self, _symptoms: &str) -> Result<ExerciseContent, GenAiError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(breathing())
    }
}

/// One second of silence at 24 kHz.
pub struct FakeSpeech;

#[async_trait]
impl SpeechSynthesizer for FakeSpeech {
    async fn synthesize_speech(&self, _text: &str) -> Result<String, GenAiError> {
        use base64::Engine;
        Ok(base64::engine::general_purpose::STANDARD.encode(vec![0u8; 48_000]))
    }
}

/// Fails at the provider, or returns a payload with an odd byte count.
pub struct BrokenSpeech {
    pub odd_payload: bool,
}

#[async_trait]
impl SpeechSynthesizer for BrokenSpeech {
    async fn synthesize_speech(&self, _text: &str) -> Result<String, GenAiError> {
        if self.odd_payload {
            // three bytes
            return Ok("AAAB".to_string());
        }
        Err(GenAiError::Api {
            status: 503,
            body: "tts unavailable".to_string(),
        })
    }
}

pub fn state_with(generator: Arc<dyn ExerciseGenerator>) -> AppState {
    state_with_speech(generator, Arc::new(FakeSpeech))
}

pub fn state_with_speech(
    generator: Arc<dyn ExerciseGenerator>,
    speech: Arc<dyn SpeechSynthesizer>,
) -> AppState {
    let store = demo_store(true).unwrap();
    AppState::new(store, generator, speech)
}

pub fn app() -> Router {
    menteclara_api::app(state_with(Arc::new(FakeGenerator::default())))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Log in and return `(token, account id)`.
pub async fn login(app: &Router, email: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": "123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {email}: {body}");
    (
        body["token"].as_str().unwrap().to_string(),
        body["account"]["id"].as_str().unwrap().to_string(),
    )
}
