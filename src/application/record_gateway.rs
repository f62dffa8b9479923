// src/application/record_gateway.rs
use tracing::{debug, info, instrument, warn};

use crate::application::arguments::{DeleteNoteArgs, NoteArgs, NotesArgs};
use crate::application::identity::{resolve_author, resolve_authors};
use crate::application::normalize::{
    image_bytes, present_strings, string_or_empty, time_arg_or_zero,
};
use crate::application::notifier::{MutationKind, Notifier};
use crate::application::ports::{NoteService, Publisher};
use crate::application::time_range::to_range;
use crate::domain::{GatewayError, Note, Query, RequestContext};

/// Builds the record service filter for `notes`.
///
/// `dateCreated` is accepted but not part of the backend filter.
pub fn build_query(args: NotesArgs, ctx: &RequestContext) -> Result<Query, GatewayError> {
    let (fromdate, todate) = to_range(args.fromdate, args.todate);
    Ok(Query {
        ids: present_strings(args.ids),
        title: string_or_empty(args.title),
        authors: resolve_authors(present_strings(args.authors), ctx)?,
        team: string_or_empty(args.team),
        fromdate,
        todate,
    })
}

/// Builds the full note payload for `createNote` and `updateNote`.
pub fn build_note(args: NoteArgs, ctx: &RequestContext) -> Result<Note, GatewayError> {
    Ok(Note {
        id: string_or_empty(args.id),
        title: string_or_empty(args.title),
        body: string_or_empty(args.body),
        author: resolve_author(string_or_empty(args.author), ctx)?,
        team: string_or_empty(args.team),
        note_type: string_or_empty(args.note_type),
        link: string_or_empty(args.link),
        image: image_bytes(args.image),
        tags: present_strings(args.tags).unwrap_or_default(),
        date_created: time_arg_or_zero(args.date_created)?,
        date_modified: time_arg_or_zero(args.date_modified)?,
    })
}

/// Builds the minimal delete payload: team and link are not sent.
pub fn build_delete_note(args: DeleteNoteArgs, ctx: &RequestContext) -> Result<Note, GatewayError> {
    Ok(Note {
        id: string_or_empty(args.id),
        title: string_or_empty(args.title),
        body: string_or_empty(args.body),
        author: resolve_author(string_or_empty(args.author), ctx)?,
        note_type: string_or_empty(args.note_type),
        date_created: time_arg_or_zero(args.date_created)?,
        date_modified: time_arg_or_zero(args.date_modified)?,
        ..Default::default()
    })
}

/// Record service adapter: normalizes arguments, calls the backend and
/// notifies downstream subscribers after successful mutations.
pub struct RecordGateway<S: NoteService, P: Publisher> {
    service: S,
    notifier: Notifier<P>,
}

impl<S: NoteService, P: Publisher> RecordGateway<S, P> {
    pub fn new(service: S, notifier: Notifier<P>) -> Self {
        Self { service, notifier }
    }

    /// Backend order is kept as returned.
    #[instrument(level = "debug", skip(self, ctx))]
    pub async fn list(&self, ctx: &RequestContext, args: NotesArgs) -> Result<Vec<Note>, GatewayError> {
        let query = build_query(args, ctx)?;
        debug!(?query, "Listing notes");

        let notes = self.service.list_notes(ctx, &query).await.map_err(|e| {
            warn!(error = %e, "Record service failed to list notes");
            GatewayError::backend("listNotes", e)
        })?;

        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self, ctx))]
    pub async fn create(&self, ctx: &RequestContext, args: NoteArgs) -> Result<Note, GatewayError> {
        let input = build_note(args, ctx)?;

        let created = self.service.create_note(ctx, &input).await.map_err(|e| {
            warn!(error = %e, "Record service failed to create note");
            GatewayError::backend("createNote", e)
        })?;

        info!(note_id = %created.id, author = %created.author, "Created note");
        self.notifier.notify(ctx, MutationKind::Create, &created).await?;
        Ok(created)
    }

    /// Publishes the request note, not the one returned by the backend.
    /// A publish failure does not roll back the update.
    #[instrument(level = "debug", skip(self, ctx))]
    pub async fn update(&self, ctx: &RequestContext, args: NoteArgs) -> Result<Note, GatewayError> {
        let input = build_note(args, ctx)?;

        let updated = self.service.update_note(ctx, &input).await.map_err(|e| {
            warn!(note_id = %input.id, error = %e, "Record service failed to update note");
            GatewayError::backend("updateNote", e)
        })?;

        info!(note_id = %updated.id, "Updated note");
        self.notifier.notify(ctx, MutationKind::Update, &input).await?;
        Ok(updated)
    }

    /// Publishes the note returned by the backend.
    #[instrument(level = "debug", skip(self, ctx))]
    pub async fn delete(&self, ctx: &RequestContext, args: DeleteNoteArgs) -> Result<Note, GatewayError> {
        let input = build_delete_note(args, ctx)?;

        let deleted = self.service.delete_note(ctx, &input).await.map_err(|e| {
            warn!(note_id = %input.id, error = %e, "Record service failed to delete note");
            GatewayError::backend("deleteNote", e)
        })?;

        info!(note_id = %deleted.id, "Deleted note");
        self.notifier.notify(ctx, MutationKind::Delete, &deleted).await?;
        Ok(deleted)
    }
}
