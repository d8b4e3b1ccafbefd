//! Editable record shapes and the field-level edit protocol the section
//! editors drive them through.
//!
//! Every shape implements [`Record`]: where it is persisted, what the page
//! starts with, what a freshly added row looks like, how a posted field value
//! is applied, and which records survive a save.

pub mod project;
pub mod skill;
pub mod testimonial;
pub mod timeline;

use std::collections::BTreeSet;
use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub use project::Project;
pub use skill::Skill;
pub use testimonial::Testimonial;
pub use timeline::{TimelineEvent, TimelineKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },

    #[error("field '{0}' is not a list")]
    NotAList(String),

    #[error("field '{0}' cannot be edited")]
    ReadOnly(String),
}

/// A value posted for a single record field, as it arrives over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn into_text(self, field: &str) -> Result<String, FieldError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            _ => Err(invalid(field, "a string")),
        }
    }

    /// Numbers pass through; numeric strings are parsed, and a string that is
    /// not a number yields `fallback`, the way a cleared number input does.
    pub fn into_number(self, field: &str, fallback: i64) -> Result<i64, FieldError> {
        match self {
            FieldValue::Number(n) => Ok(n),
            FieldValue::Text(text) => Ok(text.trim().parse().unwrap_or(fallback)),
            FieldValue::List(_) => Err(invalid(field, "a number")),
        }
    }

    pub fn into_list(self, field: &str) -> Result<Vec<String>, FieldError> {
        match self {
            FieldValue::List(items) => Ok(items),
            _ => Err(invalid(field, "a list of strings")),
        }
    }
}

/// One editable record shape.
pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Key of the serialized sequence in the key-value store.
    const STORAGE_KEY: &'static str;

    /// The sequence shown before anything has been saved.
    fn defaults() -> Vec<Self>;

    /// The row appended by "add". Shapes without identifiers ignore `next_id`.
    fn blank(next_id: u32) -> Self;

    fn id(&self) -> Option<u32> {
        None
    }

    /// Reassigns the identifier. A no-op for identifier-free shapes.
    fn set_id(&mut self, _id: u32) {}

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError>;

    fn list_mut(&mut self, field: &str) -> Result<&mut Vec<String>, FieldError> {
        Err(FieldError::NotAList(field.to_string()))
    }

    /// Applies the entity invariant. `None` drops the record; `Some` carries
    /// the normalized record that may be persisted.
    fn sanitize(self) -> Option<Self>;
}

/// One greater than the largest identifier present, or 1 for an empty or
/// identifier-free sequence. When the largest identifier is `u32::MAX` the
/// smallest unused one is taken instead.
pub fn next_id<R: Record>(records: &[R]) -> u32 {
    let used: BTreeSet<u32> = records.iter().filter_map(Record::id).collect();
    match used.last() {
        None => 1,
        Some(max) => max.checked_add(1).unwrap_or_else(|| {
            // Only exhausted with every u32 in use.
            (1..=u32::MAX).find(|id| !used.contains(id)).unwrap_or(0)
        }),
    }
}

/// Gives every record whose identifier repeats an earlier one a fresh
/// identifier. The first occurrence keeps its id. Returns how many records
/// were renumbered.
pub fn renumber_duplicate_ids<R: Record>(records: &mut [R]) -> usize {
    let mut seen = BTreeSet::new();
    let clashes: Vec<usize> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.id().filter(|id| !seen.insert(*id)).map(|_| i))
        .collect();
    for &i in &clashes {
        let id = next_id(records);
        records[i].set_id(id);
    }
    clashes.len()
}

pub fn sanitize_all<R: Record>(records: Vec<R>) -> Vec<R> {
    records.into_iter().filter_map(Record::sanitize).collect()
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub(crate) fn drop_blank(items: Vec<String>) -> Vec<String> {
    items.into_iter().filter(|item| !is_blank(item)).collect()
}

pub(crate) fn saturate_i32(n: i64) -> i32 {
    n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub(crate) fn invalid(field: &str, expected: &'static str) -> FieldError {
    FieldError::InvalidValue {
        field: field.to_string(),
        expected,
    }
}
