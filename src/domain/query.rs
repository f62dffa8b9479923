// src/domain/query.rs
use super::note::Timestamp;

/// List filter sent to the record service. Built fresh for every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub ids: Option<Vec<String>>,
    pub title: String,
    pub authors: Vec<String>,
    pub team: String,
    pub fromdate: Option<Timestamp>,
    pub todate: Option<Timestamp>,
}

/// Free-text request sent to the search index.
///
/// Only `query` is populated by the gateway today; the filter fields are
/// part of the collaborator contract but are left at their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub authors: Vec<String>,
    pub team: String,
    pub fromdate: Option<Timestamp>,
    pub todate: Option<Timestamp>,
}

impl SearchQuery {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}
