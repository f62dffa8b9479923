// src/application/mod.rs
pub mod arguments;
pub mod identity;
pub mod normalize;
pub mod notifier;
pub mod ports;
pub mod record_gateway;
pub mod search_gateway;
pub mod time_range;

pub use arguments::{DeleteNoteArgs, NoteArgs, NotesArgs, SearchArgs, TimeArg};
pub use notifier::{MutationKind, Notifier, Topics};
pub use ports::{NoteSearcher, NoteService, Publisher};
pub use record_gateway::RecordGateway;
pub use search_gateway::SearchGateway;
