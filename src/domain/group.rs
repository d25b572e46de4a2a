//! Notes filed together under one calendar date.

use crate::domain::{Note, NoteId};
use serde::{Deserialize, Serialize};

/// A set of notes sharing a creation date, newest first.
///
/// Serialized with the field names `id`, `date`, `data` and `lastUpdated`.
/// `lastUpdated` is stamped when the group is created and is not refreshed
/// when its notes change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteGroup {
    id: NoteId,
    date: String,
    data: Vec<Note>,
    last_updated: String,
}

impl NoteGroup {
    /// Creates a group holding `notes` in the given order.
    pub fn new(
        id: NoteId,
        date: impl Into<String>,
        notes: Vec<Note>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            data: notes,
            last_updated: last_updated.into(),
        }
    }

    /// Returns the group's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the date key the group is filed under.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the group's notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.data
    }

    /// Returns when the group was created, as display text.
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    /// Returns the number of notes in the group.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the group holds no notes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn position_of(&self, id: NoteId) -> Option<usize> {
        self.data.iter().position(|n| n.id() == id)
    }

    pub(crate) fn prepend(&mut self, note: Note) {
        self.data.insert(0, note);
    }

    pub(crate) fn note_mut(&mut self, index: usize) -> &mut Note {
        &mut self.data[index]
    }

    pub(crate) fn remove(&mut self, index: usize) -> Note {
        self.data.remove(index)
    }
}
