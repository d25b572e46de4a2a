//! Output format types and user notices for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::domain::{Note, NoteGroup};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data, notice: None }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Severity of a user notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        };
        f.write_str(s)
    }
}

/// A short message reporting the outcome of a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    /// Prints the notice: info and success to stdout, the rest to stderr
    /// prefixed with their kind.
    pub fn print(&self) {
        match self.kind {
            NoticeKind::Info | NoticeKind::Success => println!("{}", self.message),
            NoticeKind::Warning | NoticeKind::Error => eprintln!("{}: {}", self.kind, self.message),
        }
    }
}

/// A single note in command output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListing {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub last_updated: String,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().value(),
            title: note.title().to_string(),
            content: note.content().to_string(),
            last_updated: note.last_updated().to_string(),
        }
    }
}

/// A date group in listing output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListing {
    pub id: i64,
    pub date: String,
    pub label: String,
    pub last_updated: String,
    pub notes: Vec<NoteListing>,
}

impl GroupListing {
    pub fn new(group: &NoteGroup, label: impl Into<String>) -> Self {
        Self {
            id: group.id().value(),
            date: group.date().to_string(),
            label: label.into(),
            last_updated: group.last_updated().to_string(),
            notes: group.notes().iter().map(NoteListing::from).collect(),
        }
    }
}
