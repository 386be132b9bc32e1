//! Framework-free state for the ticket views.
//!
//! Pages own a model from here (through `use_reducer` or `use_state`) and
//! drive it with the async flows, which take the gateway as a trait object
//! so they run against test doubles.

pub mod analytics;
pub mod create_ticket;
pub mod registration;
pub mod scope;
pub mod ticket_editor;
pub mod ticket_list;

pub use scope::ViewScope;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown in a toast until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
