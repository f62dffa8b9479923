// src/constants.rs
//
// Application-wide constants shared by configuration, notification and CLI code.

/// Channel notified after a note is created (only when `notify_on_create` is set).
///
/// Used in: `application/notifier.rs`
pub const DEFAULT_CREATE_TOPIC: &str = "notes.create";

/// Channel notified with the request note after a successful update.
///
/// Used in: `application/notifier.rs`
pub const DEFAULT_UPDATE_TOPIC: &str = "notes.update";

/// Channel notified with the backend-returned note after a successful delete.
///
/// Used in: `application/notifier.rs`
pub const DEFAULT_DELETE_TOPIC: &str = "notes.delete";

/// Tracing target used by the log-backed publisher, so notifications can be
/// filtered separately (`RUST_LOG=notegate::notifications=info`).
///
/// Used in: `infrastructure/publisher.rs`
pub const NOTIFICATION_LOG_TARGET: &str = "notegate::notifications";
