// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::application::{NoteSearcher, NoteService, Notifier, Publisher, RecordGateway, SearchGateway};
use crate::cli::args::{Args, Command};
use crate::domain::RequestContext;
use crate::infrastructure::{Config, LogPublisher, MemoryNoteStore};
use crate::ports::{Gateway, NoteField, Operation};

/// Wire a gateway from configuration and collaborators
///
/// `searcher` is only used when search is enabled in the config.
pub fn build_gateway<S, X, P>(config: &Config, service: S, searcher: X, publisher: P) -> Gateway<S, X, P>
where
    S: NoteService,
    X: NoteSearcher,
    P: Publisher,
{
    let notifier = Notifier::new(publisher, config.topics.clone())
        .with_notify_on_create(config.gateway.notify_on_create);
    let searcher = config.gateway.search_enabled.then_some(searcher);

    Gateway::new(RecordGateway::new(service, notifier), SearchGateway::new(searcher))
}

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notegate with arguments");

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    match args.command {
        Command::Operations => {
            for op in Operation::ALL {
                println!("{}\t{}", op, op.kind());
            }
            Ok(())
        }
        Command::InitConfig { path } => {
            Config::create_default(&path)?;
            info!(?path, "Wrote default config");
            Ok(())
        }
        Command::Exec {
            operation,
            args: raw_args,
            email,
            fields,
            store,
        } => {
            let response = execute(&config, &operation, raw_args.as_deref(), email, &fields, store.as_deref()).await?;
            println!("{}", response);
            Ok(())
        }
    }
}

/// Run one operation against the local store and render the JSON envelope
pub async fn execute(
    config: &Config,
    operation: &str,
    raw_args: Option<&str>,
    email: Option<String>,
    fields: &[String],
    store_path: Option<&Path>,
) -> Result<String> {
    let operation: Operation = operation.parse()?;
    let arguments: Value = match raw_args {
        Some(raw) => serde_json::from_str(raw).context("Failed to parse --args as JSON")?,
        None => Value::Null,
    };
    let selection = fields
        .iter()
        .map(|f| f.trim().parse::<NoteField>())
        .collect::<Result<Vec<_>, _>>()?;

    let store = Arc::new(open_store(store_path)?);
    let gateway = build_gateway(config, store.clone(), store.clone(), LogPublisher::new());

    let mut ctx = match email {
        Some(email) => RequestContext::for_caller(email),
        None => RequestContext::new(),
    };
    if let Some(timeout) = config.gateway.request_timeout() {
        ctx = ctx.with_timeout(timeout);
    }

    info!(%operation, "Executing operation");
    let fields = (!selection.is_empty()).then_some(selection.as_slice());
    let response = gateway.respond(operation, arguments, fields, &ctx).await;

    if let Some(path) = store_path {
        store.save_json(path).await?;
    }

    serde_json::to_string_pretty(&response).context("Failed to render response")
}

fn open_store(path: Option<&Path>) -> Result<MemoryNoteStore> {
    match path {
        Some(path) if path.exists() => MemoryNoteStore::load_json(path),
        Some(path) => {
            debug!(path = %path.display(), "Note store does not exist yet, starting empty");
            Ok(MemoryNoteStore::new())
        }
        None => Ok(MemoryNoteStore::new()),
    }
}
