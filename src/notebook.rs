//! A note-taking session: one in-memory collection bound to one store.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::{IdsExhausted, Note, NoteCollection, NoteGroup, NoteId, NoteNotFound};
use crate::infra::{NoteStore, StoreError};

/// Errors from notebook operations.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    NoteNotFound(#[from] NoteNotFound),

    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),
}

/// Owns the note collection for a session and keeps the store in sync.
///
/// The collection is loaded once by [`Notebook::open`]. Every successful
/// mutation writes the whole collection back. When that write fails the
/// error is returned and the in-memory change is kept, so the next
/// successful save persists it.
#[derive(Debug)]
pub struct Notebook {
    store: NoteStore,
    notes: NoteCollection,
}

impl Notebook {
    /// Loads the collection from `store`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the existing notes file is unreadable or corrupt.
    pub fn open(store: NoteStore) -> Result<Self, StoreError> {
        let groups = store.load()?;
        let notes = NoteCollection::from_groups(groups);
        tracing::info!(
            path = %store.path().display(),
            groups = notes.groups().len(),
            notes = notes.len(),
            "opened notebook"
        );
        Ok(Self { store, notes })
    }

    /// Returns the backing store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Returns the in-memory collection.
    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    /// Returns the groups in sequence order.
    pub fn groups(&self) -> &[NoteGroup] {
        self.notes.groups()
    }

    /// Looks up a note by id.
    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.find_note(id)
    }

    /// Adds a note dated `now` and saves.
    pub fn add(
        &mut self,
        title: &str,
        content: &str,
        now: NaiveDateTime,
    ) -> Result<Note, NotebookError> {
        let note = self.notes.add_note(title, content, now)?.clone();
        tracing::info!(id = %note.id(), "added note");
        self.persist()?;
        Ok(note)
    }

    /// Rewrites a note's title and content and saves.
    ///
    /// An unknown id returns `NotebookError::NoteNotFound` without saving.
    pub fn update(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
        now: NaiveDateTime,
    ) -> Result<Note, NotebookError> {
        let note = self.notes.update_note(id, title, content, now)?.clone();
        tracing::info!(id = %id, "updated note");
        self.persist()?;
        Ok(note)
    }

    /// Deletes a note and saves.
    ///
    /// An unknown id returns `NotebookError::NoteNotFound` without saving.
    pub fn delete(&mut self, id: NoteId) -> Result<Note, NotebookError> {
        let note = self.notes.delete_note(id)?;
        tracing::info!(id = %id, "deleted note");
        self.persist()?;
        Ok(note)
    }

    /// Removes the notes file and empties the collection.
    ///
    /// If the file cannot be removed the collection is left as it was.
    pub fn clear(&mut self) -> Result<(), NotebookError> {
        self.store.clear()?;
        self.notes = NoteCollection::new();
        tracing::info!("cleared notebook");
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(self.notes.groups())
    }
}
