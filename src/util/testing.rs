// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteSearcher, NoteService, Publisher};
use crate::domain::{BackendError, Note, Query, RequestContext, SearchQuery};

/// Id handed out by [`MockNoteService`] when a note is created without one.
pub const MOCK_ASSIGNED_ID: &str = "mock-assigned-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockCall {
    List,
    Create,
    Update,
    Delete,
}

/// A call as received by [`MockNoteService`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List(Query),
    Create(Note),
    Update(Note),
    Delete(Note),
}

/// Shared mock record service for testing gateway operations.
///
/// Keeps stored notes so that mutations are visible to later reads,
/// records every request it receives and can be told to fail per call kind.
///
/// # Examples
///
/// ```
/// use notegate::util::testing::{MockCall, MockNoteService};
/// use notegate::domain::{BackendError, Note};
///
/// let mock = MockNoteService::builder()
///     .with_note(Note { id: "1".to_string(), ..Default::default() })
///     .with_failure(MockCall::Delete, BackendError::Unavailable("down".to_string()))
///     .build();
/// ```
pub struct MockNoteService {
    notes: Mutex<Vec<Note>>,
    list_result: Option<Vec<Note>>,
    failures: HashMap<MockCall, BackendError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockNoteService {
    pub fn builder() -> MockNoteServiceBuilder {
        MockNoteServiceBuilder::new()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn list_queries(&self) -> Vec<Query> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::List(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    pub fn created_notes(&self) -> Vec<Note> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Create(note) => Some(note),
                _ => None,
            })
            .collect()
    }

    pub fn stored_note(&self, id: &str) -> Option<Note> {
        self.notes
            .lock()
            .expect("notes lock")
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    async fn enter(&self, kind: MockCall, call: RecordedCall) -> Result<(), BackendError> {
        self.calls.lock().expect("calls lock").push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.failures.get(&kind) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NoteService for MockNoteService {
    async fn list_notes(&self, _ctx: &RequestContext, query: &Query) -> Result<Vec<Note>, BackendError> {
        self.enter(MockCall::List, RecordedCall::List(query.clone())).await?;

        if let Some(result) = &self.list_result {
            return Ok(result.clone());
        }

        let notes = self.notes.lock().expect("notes lock");
        Ok(notes
            .iter()
            .filter(|n| query.ids.as_ref().map_or(true, |ids| ids.contains(&n.id)))
            .cloned()
            .collect())
    }

    async fn create_note(&self, _ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        self.enter(MockCall::Create, RecordedCall::Create(note.clone())).await?;

        let mut created = note.clone();
        if created.id.is_empty() {
            created.id = MOCK_ASSIGNED_ID.to_string();
        }
        self.notes.lock().expect("notes lock").push(created.clone());
        Ok(created)
    }

    async fn update_note(&self, _ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        self.enter(MockCall::Update, RecordedCall::Update(note.clone())).await?;

        let mut notes = self.notes.lock().expect("notes lock");
        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => {
                *existing = note.clone();
                Ok(note.clone())
            }
            None => Err(BackendError::NotFound(note.id.clone())),
        }
    }

    async fn delete_note(&self, _ctx: &RequestContext, note: &Note) -> Result<Note, BackendError> {
        self.enter(MockCall::Delete, RecordedCall::Delete(note.clone())).await?;

        let mut notes = self.notes.lock().expect("notes lock");
        match notes.iter().position(|n| n.id == note.id) {
            Some(index) => Ok(notes.remove(index)),
            None => Err(BackendError::NotFound(note.id.clone())),
        }
    }
}

/// Builder for MockNoteService
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteServiceBuilder {
    notes: Vec<Note>,
    list_result: Option<Vec<Note>>,
    failures: HashMap<MockCall, BackendError>,
    delay: Option<Duration>,
}

impl MockNoteServiceBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_result: None,
            failures: HashMap::new(),
            delay: None,
        }
    }

    /// Add a stored note, visible to list, update and delete
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Return exactly these notes from list_notes, ignoring the query
    pub fn with_list_result(mut self, notes: Vec<Note>) -> Self {
        self.list_result = Some(notes);
        self
    }

    /// Make every call of this kind fail with `error`
    pub fn with_failure(mut self, call: MockCall, error: BackendError) -> Self {
        self.failures.insert(call, error);
        self
    }

    /// Sleep before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> MockNoteService {
        MockNoteService {
            notes: Mutex::new(self.notes),
            list_result: self.list_result,
            failures: self.failures,
            delay: self.delay,
            calls: Mutex::new(vec![]),
        }
    }
}

impl Default for MockNoteServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock search index returning fixed results or a fixed error.
pub struct MockSearcher {
    result: Result<Vec<Note>, BackendError>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl MockSearcher {
    pub fn with_results(notes: Vec<Note>) -> Self {
        Self {
            result: Ok(notes),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn failing(error: BackendError) -> Self {
        Self {
            result: Err(error),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().expect("queries lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().expect("queries lock").len()
    }
}

#[async_trait]
impl NoteSearcher for MockSearcher {
    async fn search(&self, _ctx: &RequestContext, query: &SearchQuery) -> Result<Vec<Note>, BackendError> {
        self.queries.lock().expect("queries lock").push(query.clone());
        self.result.clone()
    }
}

/// Publisher that records every publish attempt, optionally failing on some topics.
#[derive(Default)]
pub struct RecordingPublisher {
    failing_topics: Vec<String>,
    published: Mutex<Vec<(String, Note)>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, topic: &str) -> Self {
        self.failing_topics.push(topic.to_string());
        self
    }

    pub fn published(&self) -> Vec<(String, Note)> {
        self.published.lock().expect("published lock").clone()
    }

    pub fn published_on(&self, topic: &str) -> Vec<Note> {
        self.published()
            .into_iter()
            .filter(|(t, _)| t == topic)
            .map(|(_, note)| note)
            .collect()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, _ctx: &RequestContext, topic: &str, note: &Note) -> Result<(), BackendError> {
        self.published
            .lock()
            .expect("published lock")
            .push((topic.to_string(), note.clone()));

        if self.failing_topics.iter().any(|t| t == topic) {
            return Err(BackendError::Unavailable(format!("broker rejected {topic}")));
        }
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["tokio", "runtime", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
