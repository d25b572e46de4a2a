//! Note record: a titled piece of text with a last-updated stamp.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to notes saved without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A single user-authored note.
///
/// Serialized with the field names `id`, `title`, `content` and
/// `lastUpdated`.
///
/// # Examples
///
/// ```
/// use daybook::domain::{Note, NoteId};
///
/// let note = Note::new(NoteId::new(1), "  ", "body", "6/10/2024, 9:15:00 AM");
/// assert_eq!(note.title(), "Untitled");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    title: String,
    #[serde(default)]
    content: String,
    last_updated: String,
}

impl Note {
    /// Creates a note. A blank title becomes [`DEFAULT_TITLE`].
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: normalize_title(title.into()),
            content: content.into(),
            last_updated: last_updated.into(),
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was last written, as display text.
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    /// Replaces title and content and restamps the note. The id is kept.
    pub(crate) fn revise(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        last_updated: impl Into<String>,
    ) {
        self.title = normalize_title(title.into());
        self.content = content.into();
        self.last_updated = last_updated.into();
    }
}

fn normalize_title(title: String) -> String {
    if title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("last_updated", &self.last_updated)
            .finish()
    }
}
