use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single field value as delivered by the data service.
///
/// Records arrive as plain JSON objects; the value domain is deliberately
/// small (the service never nests objects inside a record). `Null` maps to
/// JSON `null` and renders the same as an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::TextList(v)
    }
}

/// Stable identifier of a record, used as the editing and rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId(v.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId(v)
    }
}

/// One row of a collection: a field-name → value mapping.
///
/// Records are immutable from the engine's point of view. Edits go through
/// collaborator mutations and come back in the next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// The `id` field, if present and id-shaped.
    pub fn id(&self) -> Option<RecordId> {
        match self.get("id") {
            Some(FieldValue::Int(n)) => Some(RecordId::from(*n)),
            Some(FieldValue::Text(s)) => Some(RecordId::from(s.as_str())),
            _ => None,
        }
    }

    /// Text content of a field, when it holds text.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Boolean content of a field, defaulting to false when absent.
    pub fn flag(&self, field: &str) -> bool {
        matches!(self.get(field), Some(FieldValue::Bool(true)))
    }
}
