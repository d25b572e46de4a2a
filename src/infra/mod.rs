//! File I/O: the on-disk note store

mod store;

pub use store::{NOTES_FILE_NAME, NoteStore, StoreError};
