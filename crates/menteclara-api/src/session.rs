use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

use menteclara_core::models::account::Actor;
use menteclara_core::models::exercise::ExerciseDraft;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(8 * 60 * 60);

/// Per-login state. Only ids are kept; account data is always read from the
/// store.
#[derive(Debug, Clone)]
pub struct Session {
    pub actor: Actor,
    /// The last exercise generated by the assistant, awaiting assignment.
    pub preview: Option<ExerciseDraft>,
    pub last_seen: Instant,
}

impl Session {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            preview: None,
            last_seen: Instant::now(),
        }
    }

    pub fn is_expired(&self, idle: Duration) -> bool {
        self.last_seen.elapsed() >= idle
    }
}

/// Bearer token to session.
pub type Sessions = HashMap<Uuid, Session>;

/// Drop sessions idle for at least `idle`. Returns how many were removed.
pub fn purge_expired(sessions: &mut Sessions, idle: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, s| !s.is_expired(idle));
    before - sessions.len()
}
