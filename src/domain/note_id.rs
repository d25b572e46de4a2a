//! Integer identifier for notes and note groups.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique identifier for notes and note groups.
///
/// Ids are millisecond timestamps taken when the record was created, bumped
/// forward when two records would otherwise share a millisecond. They are
/// persisted as plain JSON numbers.
///
/// # Examples
///
/// ```
/// use daybook::domain::NoteId;
///
/// let id: NoteId = "1718000000000".parse().unwrap();
/// assert_eq!(id.value(), 1_718_000_000_000);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw id value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid id string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected an integer", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

/// Error returned when no id is left above the highest one in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdsExhausted {
    last: NoteId,
}

impl IdsExhausted {
    /// Returns the highest id already in use.
    pub fn last(&self) -> NoteId {
        self.last
    }
}

impl fmt::Display for IdsExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no note ids left above {}", self.last)
    }
}

impl std::error::Error for IdsExhausted {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}

/// Hands out strictly increasing ids.
///
/// Each id is the millisecond value of `now`, or one past the last id issued,
/// whichever is larger.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    /// Seeds the generator so that every future id is above all of `seen`.
    pub(crate) fn seeded(seen: impl IntoIterator<Item = NoteId>) -> Self {
        Self {
            last: seen.into_iter().map(NoteId::value).max(),
        }
    }

    /// Issues the next id, failing once the id after the last one would
    /// overflow.
    pub(crate) fn next(&mut self, now: NaiveDateTime) -> Result<NoteId, IdsExhausted> {
        let candidate = now.and_utc().timestamp_millis();
        let value = match self.last {
            Some(last) => {
                let bumped = last
                    .checked_add(1)
                    .ok_or(IdsExhausted { last: NoteId(last) })?;
                candidate.max(bumped)
            }
            None => candidate,
        };
        self.last = Some(value);
        Ok(NoteId(value))
    }
}
