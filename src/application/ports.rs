// src/application/ports.rs
//
// Collaborator contracts the gateway calls into. The request context is
// forwarded unchanged to every call.
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{BackendError, Note, Query, RequestContext, SearchQuery};

#[async_trait]
pub trait NoteService: Send + Sync {
    async fn list_notes(&self, ctx: &RequestContext, query: &Query) -> Result<Vec<Note>, BackendError>;

    /// Returns the stored note, which may differ from the input (e.g. an assigned id).
    async fn create_note(&self, ctx: &RequestContext, note: &Note) -> Result<Note, BackendError>;

    async fn update_note(&self, ctx: &RequestContext, note: &Note) -> Result<Note, BackendError>;

    async fn delete_note(&self, ctx: &RequestContext, note: &Note) -> Result<Note, BackendError>;
}

#[async_trait]
pub trait NoteSearcher: Send + Sync {
    async fn search(&self, ctx: &RequestContext, query: &SearchQuery) -> Result<Vec<Note>, BackendError>;
}

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, ctx: &RequestContext, topic: &str, note: &Note) -> Result<(), BackendError>;
}

#[async_trait]
impl<T: NoteService + ?Sized> NoteService for Arc<T> {
    async fn list_notes(&self, ctx: &RequestContext, query: &Query) -> Result<Vec<Note>, BackendError> {
        (**self).list_notes(ctx, query).await
    }

    async fn create_note(&self, ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        (**self).create_note(ctx, note).await
    }

    async fn update_note(&self, ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        (**self).update_note(ctx, note).await
    }

    async fn delete_note(&self, ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        (**self).delete_note(ctx, note).await
    }
}

#[async_trait]
impl<T: NoteSearcher + ?Sized> NoteSearcher for Arc<T> {
    async fn search(&self, ctx: &RequestContext, query: &SearchQuery) -> Result<Vec<Note>, BackendError> {
        (**self).search(ctx, query).await
    }
}

#[async_trait]
impl<T: Publisher + ?Sized> Publisher for Arc<T> {
    async fn publish(&self, ctx: &RequestContext, topic: &str, note: &Note) -> Result<(), BackendError> {
        (**self).publish(ctx, topic, note).await
    }
}
