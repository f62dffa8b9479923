// src/application/arguments.rs
//
// Typed field arguments for each entry point, as handed over by the
// field-resolution engine. Every field is optional; list arguments may
// contain null entries.
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotesArgs {
    pub ids: Option<Vec<Option<String>>>,
    pub title: Option<String>,
    pub authors: Option<Vec<Option<String>>>,
    pub team: Option<String>,
    pub date_created: Option<f64>,
    pub todate: Option<f64>,
    pub fromdate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub authors: Option<Vec<Option<String>>>,
    pub team: Option<String>,
    pub date_created: Option<f64>,
    pub todate: Option<f64>,
    pub fromdate: Option<f64>,
}

/// Timestamp argument of a mutation: seconds as a number, or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimeArg {
    Seconds(f64),
    Text(String),
}

/// Arguments of `createNote` and `updateNote`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NoteArgs {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub team: Option<String>,
    pub date_created: Option<TimeArg>,
    pub date_modified: Option<TimeArg>,
    #[serde(rename = "type")]
    pub note_type: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<Option<String>>>,
}

/// Arguments of `deleteNote`; no image or tags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteNoteArgs {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub team: Option<String>,
    pub date_created: Option<TimeArg>,
    pub date_modified: Option<TimeArg>,
    #[serde(rename = "type")]
    pub note_type: Option<String>,
    pub link: Option<String>,
}
