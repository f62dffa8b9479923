// src/application/notifier.rs
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ports::Publisher;
use crate::constants::{DEFAULT_CREATE_TOPIC, DEFAULT_DELETE_TOPIC, DEFAULT_UPDATE_TOPIC};
use crate::domain::{GatewayError, Note, RequestContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Notification channel name per mutation kind.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Topics {
    #[serde(default = "default_create_topic")]
    pub create: String,
    #[serde(default = "default_update_topic")]
    pub update: String,
    #[serde(default = "default_delete_topic")]
    pub delete: String,
}

fn default_create_topic() -> String { DEFAULT_CREATE_TOPIC.to_string() }
fn default_update_topic() -> String { DEFAULT_UPDATE_TOPIC.to_string() }
fn default_delete_topic() -> String { DEFAULT_DELETE_TOPIC.to_string() }

impl Default for Topics {
    fn default() -> Self {
        Self {
            create: default_create_topic(),
            update: default_update_topic(),
            delete: default_delete_topic(),
        }
    }
}

impl Topics {
    pub fn for_kind(&self, kind: MutationKind) -> &str {
        match kind {
            MutationKind::Create => &self.create,
            MutationKind::Update => &self.update,
            MutationKind::Delete => &self.delete,
        }
    }
}

/// Publishes mutated notes after the backend has accepted the mutation.
///
/// Creates are not published unless `notify_on_create` is set.
pub struct Notifier<P: Publisher> {
    publisher: P,
    topics: Topics,
    notify_on_create: bool,
}

impl<P: Publisher> Notifier<P> {
    pub fn new(publisher: P, topics: Topics) -> Self {
        Self {
            publisher,
            topics,
            notify_on_create: false,
        }
    }

    pub fn with_notify_on_create(mut self, enabled: bool) -> Self {
        self.notify_on_create = enabled;
        self
    }

    pub async fn notify(
        &self,
        ctx: &RequestContext,
        kind: MutationKind,
        note: &Note,
    ) -> Result<(), GatewayError> {
        if kind == MutationKind::Create && !self.notify_on_create {
            debug!(note_id = %note.id, "Create notifications disabled, skipping publish");
            return Ok(());
        }

        let topic = self.topics.for_kind(kind);
        debug!(topic, note_id = %note.id, "Publishing mutation notification");
        self.publisher
            .publish(ctx, topic, note)
            .await
            .map_err(|source| {
                warn!(topic, note_id = %note.id, error = %source, "Publish failed after mutation");
                GatewayError::Publish {
                    topic: topic.to_string(),
                    source,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::RecordingPublisher;
    use std::sync::Arc;

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn given_update_when_notifying_then_publishes_on_update_topic() {
        // Arrange
        let publisher = Arc::new(RecordingPublisher::new());
        let notifier = Notifier::new(publisher.clone(), Topics::default());

        // Act
        notifier
            .notify(&RequestContext::new(), MutationKind::Update, &note("1"))
            .await
            .expect("publish should succeed");

        // Assert
        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].0, DEFAULT_UPDATE_TOPIC);
        assert_eq!(published[0].1.id, "1");
    }

    #[tokio::test]
    async fn given_create_with_default_settings_when_notifying_then_nothing_is_published() {
        let publisher = Arc::new(RecordingPublisher::new());
        let notifier = Notifier::new(publisher.clone(), Topics::default());

        notifier
            .notify(&RequestContext::new(), MutationKind::Create, &note("1"))
            .await
            .expect("skip should succeed");

        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn given_create_notifications_enabled_when_notifying_then_publishes_on_create_topic() {
        let publisher = Arc::new(RecordingPublisher::new());
        let notifier = Notifier::new(publisher.clone(), Topics::default()).with_notify_on_create(true);

        notifier
            .notify(&RequestContext::new(), MutationKind::Create, &note("1"))
            .await
            .expect("publish should succeed");

        assert_eq!(publisher.published_on(DEFAULT_CREATE_TOPIC).len(), 1);
    }

    #[tokio::test]
    async fn given_failing_topic_when_notifying_then_returns_publish_error() {
        let publisher = Arc::new(RecordingPublisher::new().failing_on(DEFAULT_DELETE_TOPIC));
        let notifier = Notifier::new(publisher.clone(), Topics::default());

        let result = notifier
            .notify(&RequestContext::new(), MutationKind::Delete, &note("1"))
            .await;

        match result {
            Err(GatewayError::Publish { topic, .. }) => assert_eq!(topic, DEFAULT_DELETE_TOPIC),
            other => panic!("Expected Publish error, got {other:?}"),
        }
    }
}
