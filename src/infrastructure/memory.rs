// src/infrastructure/memory.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::application::{NoteSearcher, NoteService};
use crate::domain::{BackendError, Note, Query, RequestContext, SearchQuery};

/// In-process record store, used when no remote record service is wired in.
///
/// Also serves as the search index with a case-insensitive substring match.
/// Notes keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }

    /// Load a JSON snapshot written by [`MemoryNoteStore::save_json`]
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read note store {}", path.display()))?;
        let notes: Vec<Note> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse note store {}", path.display()))?;

        info!(?path, count = notes.len(), "Loaded note store");
        Ok(Self::with_notes(notes))
    }

    pub async fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (content, count) = {
            let notes = self.notes.read().await;
            let content = serde_json::to_string_pretty(&*notes).context("Failed to serialize note store")?;
            (content, notes.len())
        };
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write note store {}", path.display()))?;

        debug!(?path, count, "Saved note store");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: &str) -> Option<Note> {
        self.notes.read().await.iter().find(|n| n.id == id).cloned()
    }
}

fn matches_query(note: &Note, query: &Query) -> bool {
    if let Some(ids) = &query.ids {
        if !ids.is_empty() && !ids.contains(&note.id) {
            return false;
        }
    }
    if !query.title.is_empty() && !note.title.contains(&query.title) {
        return false;
    }
    if !query.authors.is_empty() && !query.authors.contains(&note.author) {
        return false;
    }
    if !query.team.is_empty() && note.team != query.team {
        return false;
    }
    if query.fromdate.is_some_and(|from| note.date_created < from) {
        return false;
    }
    if query.todate.is_some_and(|to| note.date_created > to) {
        return false;
    }
    true
}

#[async_trait]
impl NoteService for MemoryNoteStore {
    #[instrument(level = "debug", skip(self, _ctx))]
    async fn list_notes(&self, _ctx: &RequestContext, query: &Query) -> Result<Vec<Note>, BackendError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| matches_query(n, query)).cloned().collect())
    }

    #[instrument(level = "debug", skip(self, _ctx, note), fields(note_id = %note.id))]
    async fn create_note(&self, _ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        let mut notes = self.notes.write().await;
        let mut created = note.clone();
        if created.id.is_empty() {
            created.id = Uuid::new_v4().to_string();
        } else if notes.iter().any(|n| n.id == created.id) {
            return Err(BackendError::AlreadyExists(created.id));
        }

        notes.push(created.clone());
        Ok(created)
    }

    #[instrument(level = "debug", skip(self, _ctx, note), fields(note_id = %note.id))]
    async fn update_note(&self, _ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        let mut notes = self.notes.write().await;
        let existing = notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| BackendError::NotFound(note.id.clone()))?;

        *existing = note.clone();
        Ok(existing.clone())
    }

    #[instrument(level = "debug", skip(self, _ctx, note), fields(note_id = %note.id))]
    async fn delete_note(&self, _ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        let mut notes = self.notes.write().await;
        let index = notes
            .iter()
            .position(|n| n.id == note.id)
            .ok_or_else(|| BackendError::NotFound(note.id.clone()))?;

        Ok(notes.remove(index))
    }
}

#[async_trait]
impl NoteSearcher for MemoryNoteStore {
    #[instrument(level = "debug", skip(self, _ctx))]
    async fn search(&self, _ctx: &RequestContext, query: &SearchQuery) -> Result<Vec<Note>, BackendError> {
        let needle = query.query.to_lowercase();
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle) || n.body.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}
