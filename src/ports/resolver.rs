// src/ports/resolver.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::domain::{GatewayError, Note};

/// Fields of the external `Note` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    Id,
    Title,
    Body,
    Author,
    Team,
    DateCreated,
    DateModified,
    Type,
    Link,
    Image,
    Tags,
}

impl NoteField {
    pub const ALL: [NoteField; 11] = [
        NoteField::Id,
        NoteField::Title,
        NoteField::Body,
        NoteField::Author,
        NoteField::Team,
        NoteField::DateCreated,
        NoteField::DateModified,
        NoteField::Type,
        NoteField::Link,
        NoteField::Image,
        NoteField::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Body => "body",
            Self::Author => "author",
            Self::Team => "team",
            Self::DateCreated => "dateCreated",
            Self::DateModified => "dateModified",
            Self::Type => "type",
            Self::Link => "link",
            Self::Image => "image",
            Self::Tags => "tags",
        }
    }
}

impl FromStr for NoteField {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| GatewayError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of one note, exposing each schema field on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteResolver {
    note: Note,
}

impl NoteResolver {
    pub fn new(note: Note) -> Self {
        Self { note }
    }

    pub fn id(&self) -> &str {
        &self.note.id
    }

    pub fn title(&self) -> &str {
        &self.note.title
    }

    pub fn body(&self) -> &str {
        &self.note.body
    }

    pub fn author(&self) -> &str {
        &self.note.author
    }

    pub fn team(&self) -> &str {
        &self.note.team
    }

    /// Seconds since the epoch; sub-second precision is not carried.
    pub fn date_created(&self) -> f64 {
        self.note.date_created.as_f64_seconds()
    }

    pub fn date_modified(&self) -> f64 {
        self.note.date_modified.as_f64_seconds()
    }

    pub fn note_type(&self) -> &str {
        &self.note.note_type
    }

    pub fn link(&self) -> &str {
        &self.note.link
    }

    /// A lossy string view of the image payload.
    ///
    /// Valid UTF-8 is borrowed as-is. Invalid sequences are not rejected but
    /// replaced with U+FFFD, so this is not a byte-for-byte copy.
    /// Use [`NoteResolver::image_bytes`] for the untouched payload.
    pub fn image(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.note.image)
    }

    pub fn image_bytes(&self) -> &[u8] {
        &self.note.image
    }

    /// Always empty, whatever the wrapped note carries.
    // TODO: project `self.note.tags` once clients handle non-empty tag lists.
    pub fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    pub fn field(&self, field: NoteField) -> Value {
        match field {
            NoteField::Id => Value::from(self.id()),
            NoteField::Title => Value::from(self.title()),
            NoteField::Body => Value::from(self.body()),
            NoteField::Author => Value::from(self.author()),
            NoteField::Team => Value::from(self.team()),
            NoteField::DateCreated => Value::from(self.date_created()),
            NoteField::DateModified => Value::from(self.date_modified()),
            NoteField::Type => Value::from(self.note_type()),
            NoteField::Link => Value::from(self.link()),
            NoteField::Image => Value::from(self.image().into_owned()),
            NoteField::Tags => Value::from(self.tags()),
        }
    }

    /// Resolves only the selected fields, in selection order.
    pub fn project(&self, fields: &[NoteField]) -> Value {
        let map: Map<String, Value> = fields
            .iter()
            .map(|field| (field.as_str().to_string(), self.field(*field)))
            .collect();
        Value::Object(map)
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn into_note(self) -> Note {
        self.note
    }
}

impl Serialize for NoteResolver {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NoteField::ALL.len()))?;
        for field in NoteField::ALL {
            map.serialize_entry(field.as_str(), &self.field(field))?;
        }
        map.end()
    }
}
