//! Classification enums and validated scalars for tasks.
//!
//! String representations round-trip through the wire format the remote
//! store persists, so the serde names here are load-bearing.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow column a task currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Unscheduled work.
    #[serde(rename = "backlog")]
    Backlog,
    /// Scheduled but not started.
    #[serde(rename = "todo")]
    Todo,
    /// Actively being worked on.
    #[serde(rename = "inProgress")]
    InProgress,
    /// Finished work.
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Workflow columns in board order.
    pub const COLUMNS: [Self; 4] = [Self::Backlog, Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(BoardDomainError::UnknownStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling priority of a task.
///
/// The remote store persists the unset variant as the literal `"null"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Low priority.
    #[serde(rename = "low")]
    Low,
    /// Medium priority.
    #[serde(rename = "medium")]
    Medium,
    /// High priority.
    #[serde(rename = "high")]
    High,
    /// Urgent priority.
    #[serde(rename = "urgent")]
    Urgent,
    /// Critical priority.
    #[serde(rename = "critical")]
    Critical,
    /// No priority assigned.
    #[default]
    #[serde(rename = "null")]
    None,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Critical => "critical",
            Self::None => "null",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            "critical" => Ok(Self::Critical),
            "null" => Ok(Self::None),
            _ => Err(BoardDomainError::UnknownPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskKind {
    /// Defect fix.
    Bug,
    /// New functionality.
    Feature,
    /// Documentation work.
    Documentation,
    /// General task.
    Task,
    /// Change to agreed scope.
    ChangeRequest,
    /// Anything else.
    Other,
}

impl TaskKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Documentation => "documentation",
            Self::Task => "task",
            Self::ChangeRequest => "changeRequest",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "documentation" => Ok(Self::Documentation),
            "task" => Ok(Self::Task),
            "changerequest" => Ok(Self::ChangeRequest),
            "other" => Ok(Self::Other),
            _ => Err(BoardDomainError::UnknownKind(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engineering effort category used by the board filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffortCategory {
    /// Server-side work.
    #[serde(rename = "backend")]
    Backend,
    /// Client-side work.
    #[serde(rename = "frontend")]
    Frontend,
    /// Work spanning both sides.
    #[serde(rename = "backend + frontend")]
    BackendFrontend,
}

impl EffortCategory {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::BackendFrontend => "backend + frontend",
        }
    }
}

impl TryFrom<&str> for EffortCategory {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "backend" => Ok(Self::Backend),
            "frontend" => Ok(Self::Frontend),
            "backend + frontend" | "backend+frontend" => Ok(Self::BackendFrontend),
            _ => Err(BoardDomainError::UnknownEffort(value.to_owned())),
        }
    }
}

impl fmt::Display for EffortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative implementation complexity of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Straightforward change.
    Simple,
    /// Requires some design.
    Moderate,
    /// Substantial design and coordination.
    Complex,
}

impl Complexity {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

impl TryFrom<&str> for Complexity {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "simple" => Ok(Self::Simple),
            "moderate" => Ok(Self::Moderate),
            "complex" => Ok(Self::Complex),
            _ => Err(BoardDomainError::UnknownComplexity(value.to_owned())),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated effort for a task, in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimatedHours(f64);

impl EstimatedHours {
    /// Creates a validated estimate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidEstimate`] when the value is
    /// negative, NaN, or infinite.
    pub const fn new(value: f64) -> Result<Self, BoardDomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(BoardDomainError::InvalidEstimate(value));
        }
        Ok(Self(value))
    }

    /// Returns the estimate in hours.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for EstimatedHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
