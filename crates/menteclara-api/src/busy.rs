//! At most one in-flight external call of each kind per session.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusyKind {
    Generation,
    Speech,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusyKey {
    pub session: Uuid,
    pub kind: BusyKind,
}

#[derive(Debug, Clone, Default)]
pub struct BusyGate {
    held: Arc<Mutex<HashSet<BusyKey>>>,
}

impl BusyGate {
    /// Claim `key`, or `None` if it is already held.
    pub fn try_acquire(&self, session: Uuid, kind: BusyKind) -> Option<BusyGuard> {
        let key = BusyKey { session, kind };
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        held.insert(key).then(|| BusyGuard {
            held: Arc::clone(&self.held),
            key,
        })
    }

    pub fn is_held(&self, session: Uuid, kind: BusyKind) -> bool {
        self.held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&BusyKey { session, kind })
    }
}

/// Releases its key on drop.
#[derive(Debug)]
pub struct BusyGuard {
    held: Arc<Mutex<HashSet<BusyKey>>>,
    key: BusyKey,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
