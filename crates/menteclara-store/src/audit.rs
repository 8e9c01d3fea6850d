use tracing::info;
use uuid::Uuid;

use menteclara_core::models::account::Actor;

/// A structured audit event for a store mutation.
///
/// Emitted through `tracing`, so it lands wherever the subscriber sends
/// logs.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub action: &'static str,
    pub resource_type: &'static str,
    pub resource_id: Uuid,
    pub actor: Actor,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: &'static str,
        resource_type: &'static str,
        resource_id: Uuid,
        actor: Actor,
    ) -> Self {
        Self {
            action,
            resource_type,
            resource_id,
            actor,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        info!(
            audit.action = self.action,
            audit.resource_type = self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor_id = %self.actor.id(),
            audit.actor_role = ?self.actor.role(),
            audit.details = ?self.details,
            "audit event"
        );
    }
}
