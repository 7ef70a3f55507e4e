//! User-visible notices raised while a search runs.
//!
//! Harvesting never returns an error to its caller. Failures and skipped
//! events are reported through a [`NoticeSink`] instead, and the batch
//! carries on.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Expected outcome worth telling the user about (e.g. no product).
    Info,
    /// A search or per-event step failed.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    /// Event the notice is about, when it concerns a single event.
    pub event_id: Option<String>,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(event_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            event_id: event_id.map(str::to_string),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(event_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            event_id: event_id.map(str::to_string),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NoticeLevel::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives notices as they are produced.
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
