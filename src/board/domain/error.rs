//! Error types for board domain validation and parsing.

use super::{CommentId, TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardDomainError {
    /// An opaque identifier was empty after trimming.
    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The comment body is empty after trimming.
    #[error("comment body must not be empty")]
    EmptyCommentBody,

    /// The estimated-hours value is negative or not finite.
    #[error("invalid estimated hours {0}, expected a finite non-negative number")]
    InvalidEstimate(f64),

    /// The quality rating is outside the accepted scale.
    #[error("invalid quality rating {0}, expected a value from 0 to 5")]
    InvalidQualityRating(f64),

    /// The email address does not look like a deliverable address.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The actor role is empty after trimming.
    #[error("actor role must not be empty")]
    EmptyRole,

    /// A task listed itself as a prerequisite.
    #[error("task {0} cannot depend on itself")]
    SelfDependency(TaskId),

    /// The completion timestamp disagrees with the workflow status.
    #[error("task {id} in status '{status}' must carry a completion timestamp exactly when done")]
    CompletionTimestampMismatch {
        /// Task whose invariant was violated.
        id: TaskId,
        /// Status the task carried.
        status: TaskStatus,
    },

    /// The referenced comment does not exist on the task.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),

    /// The workflow status value is unsupported.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// The priority value is unsupported.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),

    /// The task kind value is unsupported.
    #[error("unknown task kind: {0}")]
    UnknownKind(String),

    /// The effort category value is unsupported.
    #[error("unknown effort category: {0}")]
    UnknownEffort(String),

    /// The complexity value is unsupported.
    #[error("unknown task complexity: {0}")]
    UnknownComplexity(String),
}
