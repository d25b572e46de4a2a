//! Core types: Note, NoteGroup, NoteId, and the date-grouped NoteCollection

mod collection;
mod group;
mod note;
mod note_id;
pub mod stamp;

pub use collection::{NoteCollection, NoteNotFound};
pub use group::NoteGroup;
pub use note::{DEFAULT_TITLE, Note};
pub use note_id::{IdsExhausted, NoteId, ParseNoteIdError};
