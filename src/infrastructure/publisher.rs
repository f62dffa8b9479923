// src/infrastructure/publisher.rs
use async_trait::async_trait;
use tracing::info;

use crate::application::Publisher;
use crate::constants::NOTIFICATION_LOG_TARGET;
use crate::domain::{BackendError, Note, RequestContext};

/// Publishes notifications as structured log events on a dedicated target.
///
/// Stands in for a message broker when the gateway runs locally.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Publisher for LogPublisher {
    async fn publish(&self, ctx: &RequestContext, topic: &str, note: &Note) -> Result<(), BackendError> {
        let payload = serde_json::to_string(note).map_err(|e| BackendError::Other(e.to_string()))?;
        info!(
            target: NOTIFICATION_LOG_TARGET,
            topic,
            note_id = %note.id,
            caller = ctx.caller().map(|c| c.email()).unwrap_or(""),
            %payload,
            "Published note"
        );
        Ok(())
    }
}
