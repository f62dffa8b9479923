// src/application/identity.rs
use crate::domain::{GatewayError, RequestContext};

fn caller_email(ctx: &RequestContext) -> Result<String, GatewayError> {
    ctx.caller()
        .map(|caller| caller.email().to_string())
        .ok_or(GatewayError::MissingCallerIdentity)
}

/// Explicit authors win, even when empty; otherwise the caller is the only author.
pub fn resolve_authors(
    explicit: Option<Vec<String>>,
    ctx: &RequestContext,
) -> Result<Vec<String>, GatewayError> {
    match explicit {
        Some(authors) => Ok(authors),
        None => Ok(vec![caller_email(ctx)?]),
    }
}

/// An empty author is replaced by the caller.
pub fn resolve_author(explicit: String, ctx: &RequestContext) -> Result<String, GatewayError> {
    if explicit.is_empty() {
        caller_email(ctx)
    } else {
        Ok(explicit)
    }
}
