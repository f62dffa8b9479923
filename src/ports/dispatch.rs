// src/ports/dispatch.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

use crate::application::{
    DeleteNoteArgs, NoteArgs, NoteSearcher, NoteService, NotesArgs, Publisher, RecordGateway,
    SearchArgs, SearchGateway,
};
use crate::domain::{GatewayError, RequestContext};
use crate::ports::resolver::{NoteField, NoteResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// Named entry points, keyed by their schema field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Notes,
    Search,
    CreateNote,
    UpdateNote,
    DeleteNote,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Notes,
        Operation::Search,
        Operation::CreateNote,
        Operation::UpdateNote,
        Operation::DeleteNote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Search => "search",
            Self::CreateNote => "createNote",
            Self::UpdateNote => "updateNote",
            Self::DeleteNote => "deleteNote",
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Notes | Self::Search => OperationKind::Query,
            Self::CreateNote | Self::UpdateNote | Self::DeleteNote => OperationKind::Mutation,
        }
    }
}

impl FromStr for Operation {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| GatewayError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an entry point resolved to: a list for queries, one note for mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Many(Vec<NoteResolver>),
    One(NoteResolver),
}

impl Resolved {
    pub fn project(&self, fields: &[NoteField]) -> Value {
        match self {
            Self::Many(notes) => Value::Array(notes.iter().map(|n| n.project(fields)).collect()),
            Self::One(note) => note.project(fields),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Many(notes) => notes.len(),
            Self::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseError {
    pub message: String,
    pub code: &'static str,
}

impl From<&GatewayError> for ResponseError {
    fn from(err: &GatewayError) -> Self {
        Self {
            message: err.to_string(),
            code: err.code(),
        }
    }
}

/// `{"data": {"<operation>": ...}, "errors": [...]}`; `errors` is omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, GatewayError> {
    let args = if args.is_null() { Value::Object(Map::new()) } else { args };
    serde_json::from_value(args).map_err(|e| GatewayError::InvalidArguments(e.to_string()))
}

/// Entry points of the gateway. Each call is a single, stateless transaction:
/// normalize, call the backend, notify (mutations only), wrap the result.
pub struct Gateway<S, X, P>
where
    S: NoteService,
    X: NoteSearcher,
    P: Publisher,
{
    records: RecordGateway<S, P>,
    search: SearchGateway<X>,
}

impl<S, X, P> Gateway<S, X, P>
where
    S: NoteService,
    X: NoteSearcher,
    P: Publisher,
{
    pub fn new(records: RecordGateway<S, P>, search: SearchGateway<X>) -> Self {
        Self { records, search }
    }

    pub async fn notes(&self, ctx: &RequestContext, args: NotesArgs) -> Result<Vec<NoteResolver>, GatewayError> {
        let notes = self.records.list(ctx, args).await?;
        Ok(notes.into_iter().map(NoteResolver::new).collect())
    }

    pub async fn search(&self, ctx: &RequestContext, args: SearchArgs) -> Result<Vec<NoteResolver>, GatewayError> {
        let notes = self.search.search(ctx, args).await?;
        Ok(notes.into_iter().map(NoteResolver::new).collect())
    }

    pub async fn create_note(&self, ctx: &RequestContext, args: NoteArgs) -> Result<NoteResolver, GatewayError> {
        self.records.create(ctx, args).await.map(NoteResolver::new)
    }

    pub async fn update_note(&self, ctx: &RequestContext, args: NoteArgs) -> Result<NoteResolver, GatewayError> {
        self.records.update(ctx, args).await.map(NoteResolver::new)
    }

    pub async fn delete_note(
        &self,
        ctx: &RequestContext,
        args: DeleteNoteArgs,
    ) -> Result<NoteResolver, GatewayError> {
        self.records.delete(ctx, args).await.map(NoteResolver::new)
    }

    async fn dispatch(&self, operation: Operation, args: Value, ctx: &RequestContext) -> Result<Resolved, GatewayError> {
        match operation {
            Operation::Notes => self.notes(ctx, parse_args(args)?).await.map(Resolved::Many),
            Operation::Search => self.search(ctx, parse_args(args)?).await.map(Resolved::Many),
            Operation::CreateNote => self.create_note(ctx, parse_args(args)?).await.map(Resolved::One),
            Operation::UpdateNote => self.update_note(ctx, parse_args(args)?).await.map(Resolved::One),
            Operation::DeleteNote => self.delete_note(ctx, parse_args(args)?).await.map(Resolved::One),
        }
    }

    /// Runs one operation from raw JSON arguments, honouring the context deadline.
    #[instrument(level = "debug", skip(self, operation, args, ctx), fields(operation = %operation))]
    pub async fn execute(
        &self,
        operation: Operation,
        args: Value,
        ctx: &RequestContext,
    ) -> Result<Resolved, GatewayError> {
        let call = self.dispatch(operation, args, ctx);
        match ctx.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, call)
                .await
                .map_err(|_| GatewayError::DeadlineExceeded)?,
            None => call.await,
        }
    }

    /// Executes and renders the response envelope. Failures are reported in
    /// `errors` with a null result; they never escape as a panic.
    pub async fn respond(
        &self,
        operation: Operation,
        args: Value,
        fields: Option<&[NoteField]>,
        ctx: &RequestContext,
    ) -> Response {
        let fields = fields.unwrap_or(&NoteField::ALL);
        let mut data = Map::new();

        match self.execute(operation, args, ctx).await {
            Ok(resolved) => {
                info!(%operation, results = resolved.len(), "Operation succeeded");
                data.insert(operation.as_str().to_string(), resolved.project(fields));
                Response { data, errors: vec![] }
            }
            Err(err) => {
                warn!(%operation, code = err.code(), error = %err, "Operation failed");
                debug!(?err, "Operation error detail");
                data.insert(operation.as_str().to_string(), Value::Null);
                Response {
                    data,
                    errors: vec![ResponseError::from(&err)],
                }
            }
        }
    }
}
