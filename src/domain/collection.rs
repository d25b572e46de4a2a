//! In-memory grouping of notes by date, with add/update/delete/find.

use crate::domain::note_id::{IdGenerator, IdsExhausted};
use crate::domain::stamp::{date_key, timestamp};
use crate::domain::{Note, NoteGroup, NoteId};
use chrono::NaiveDateTime;
use std::fmt;

/// Error returned when an operation names a note that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNotFound {
    id: NoteId,
}

impl NoteNotFound {
    /// Returns the id that was looked up.
    pub fn id(&self) -> NoteId {
        self.id
    }
}

impl fmt::Display for NoteNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note not found: {}", self.id)
    }
}

impl std::error::Error for NoteNotFound {}

/// The ordered sequence of note groups held for a session.
///
/// Invariants kept by every operation:
/// - no group is left empty; deleting a group's last note removes the group
/// - each note lives in exactly one group
/// - ids handed out are unique across notes and groups
///
/// Groups stay in creation order. A new date's group goes to the end.
#[derive(Debug, Clone, Default)]
pub struct NoteCollection {
    groups: Vec<NoteGroup>,
    ids: IdGenerator,
}

impl NoteCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from previously persisted groups.
    ///
    /// Empty groups are dropped. The id generator is seeded past every id
    /// present in the data.
    pub fn from_groups(groups: Vec<NoteGroup>) -> Self {
        let groups: Vec<NoteGroup> = groups
            .into_iter()
            .filter(|group| {
                if group.is_empty() {
                    tracing::warn!(group = %group.id(), date = group.date(), "dropping empty note group");
                    false
                } else {
                    true
                }
            })
            .collect();

        let ids = IdGenerator::seeded(
            groups
                .iter()
                .flat_map(|g| std::iter::once(g.id()).chain(g.notes().iter().map(Note::id))),
        );

        Self { groups, ids }
    }

    /// Returns the groups in sequence order.
    pub fn groups(&self) -> &[NoteGroup] {
        &self.groups
    }

    /// Consumes the collection, returning its groups.
    pub fn into_groups(self) -> Vec<NoteGroup> {
        self.groups
    }

    /// Returns the total number of notes across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(NoteGroup::len).sum()
    }

    /// Returns true if there are no notes.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Files a new note under the date of `now`.
    ///
    /// If a group for that date exists the note is put at its front and the
    /// group keeps its position. Otherwise a new group is appended.
    ///
    /// # Errors
    ///
    /// Returns `IdsExhausted` if no unused id remains; the collection is
    /// untouched.
    pub fn add_note(
        &mut self,
        title: &str,
        content: &str,
        now: NaiveDateTime,
    ) -> Result<&Note, IdsExhausted> {
        let today = date_key(now);
        let stamp = timestamp(now);
        let note = Note::new(self.ids.next(now)?, title, content, stamp.clone());

        let index = match self.groups.iter().position(|g| g.date() == today) {
            Some(index) => {
                self.groups[index].prepend(note);
                index
            }
            None => {
                let group = NoteGroup::new(self.ids.next(now)?, today, vec![note], stamp);
                self.groups.push(group);
                self.groups.len() - 1
            }
        };

        Ok(&self.groups[index].notes()[0])
    }

    /// Replaces a note's title and content and restamps it.
    ///
    /// The note keeps its id and its place. Nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has `id`; the collection is untouched.
    pub fn update_note(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        now: NaiveDateTime,
    ) -> Result<&Note, NoteNotFound> {
        let (group_index, note_index) = self.locate(id).ok_or(NoteNotFound { id })?;
        let note = self.groups[group_index].note_mut(note_index);
        note.revise(title, content, timestamp(now));
        Ok(note)
    }

    /// Removes a note, and its group if the group becomes empty.
    ///
    /// # Errors
    ///
    /// Returns `NoteNotFound` if no note has `id`; the collection is untouched.
    pub fn delete_note(&mut self, id: NoteId) -> Result<Note, NoteNotFound> {
        let (group_index, note_index) = self.locate(id).ok_or(NoteNotFound { id })?;
        let removed = self.groups[group_index].remove(note_index);
        if self.groups[group_index].is_empty() {
            self.groups.remove(group_index);
        }
        Ok(removed)
    }

    /// Looks up a note by id.
    pub fn find_note(&self, id: NoteId) -> Option<&Note> {
        self.locate(id)
            .map(|(g, n)| &self.groups[g].notes()[n])
    }

    /// Returns the group that holds the note with `id`.
    pub fn group_of(&self, id: NoteId) -> Option<&NoteGroup> {
        self.locate(id).map(|(g, _)| &self.groups[g])
    }

    fn locate(&self, id: NoteId) -> Option<(usize, usize)> {
        self.groups
            .iter()
            .enumerate()
            .find_map(|(g, group)| group.position_of(id).map(|n| (g, n)))
    }
}
