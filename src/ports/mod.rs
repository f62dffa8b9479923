// src/ports/mod.rs
pub mod dispatch;
pub mod resolver;

pub use dispatch::{Gateway, Operation, OperationKind, Resolved, Response, ResponseError};
pub use resolver::{NoteField, NoteResolver};
