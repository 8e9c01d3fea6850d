use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use menteclara_genai::gateway::{ExerciseGenerator, SpeechSynthesizer};
use menteclara_store::store::Store;

use crate::busy::BusyGate;
use crate::session::{DEFAULT_IDLE_TIMEOUT, Sessions};

/// Shared application state, injected into all route handlers via Axum state.
///
/// The store lock is never held across a call to the generator or the
/// synthesizer.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    pub sessions: Arc<Mutex<Sessions>>,
    pub generator: Arc<dyn ExerciseGenerator>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub busy: BusyGate,
    /// Sessions unused for this long are dropped.
    pub session_idle: Duration,
}

impl AppState {
    pub fn new(
        store: Store,
        generator: Arc<dyn ExerciseGenerator>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            generator,
            speech,
            busy: BusyGate::default(),
            session_idle: DEFAULT_IDLE_TIMEOUT,
        }
    }

    pub fn with_session_idle(mut self, idle: Duration) -> Self {
        self.session_idle = idle;
        self
    }
}
