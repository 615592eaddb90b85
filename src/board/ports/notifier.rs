//! User-notification port for operation outcomes.

use std::fmt;

/// Severity of a board notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A mutating operation succeeded.
    Success,
    /// An operation failed and the user should be told.
    Error,
}

/// Human-readable outcome of a board operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNotice {
    kind: NoticeKind,
    message: String,
}

impl BoardNotice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Returns the notice severity.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BoardNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        };
        write!(f, "[{label}] {}", self.message)
    }
}

/// Sink for user-visible operation outcomes.
///
/// The presentation layer decides how a notice is rendered (toast, banner,
/// console); the board only guarantees that every failed operation and
/// every successful mutation produces exactly one notice, except the
/// background move persist, which fails silently toward the user.
pub trait BoardNotifier: Send + Sync {
    /// Publishes a notice to the user.
    fn publish(&self, notice: BoardNotice);
}
