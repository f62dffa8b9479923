// src/domain/mod.rs
pub mod context;
pub mod error;
pub mod note;
pub mod query;

pub use context::{CallerIdentity, RequestContext};
pub use error::{BackendError, GatewayError};
pub use note::{Note, Timestamp};
pub use query::{Query, SearchQuery};
