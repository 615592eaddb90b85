//! Shared builders for board unit tests.

use crate::board::domain::{
    ActorProfile, ActorRole, EffortCategory, EmailAddress, EmployeeId, EstimatedHours, Task,
    TaskDraft, TaskId, TaskKind, TaskStatus,
};
use mockable::DefaultClock;

/// Builds a persisted task with the given id, title, status, and effort.
pub(super) fn task_with_effort(
    id: &str,
    title: &str,
    status: TaskStatus,
    effort: EffortCategory,
) -> Task {
    let draft = TaskDraft::new(
        title,
        EstimatedHours::new(4.0).expect("valid estimate"),
        effort,
        TaskKind::Feature,
    )
    .expect("valid draft")
    .with_status(status);
    Task::from_draft(TaskId::new(id).expect("valid task id"), draft, &DefaultClock)
}

/// Builds a backend-effort task with the given id, title, and status.
pub(super) fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    task_with_effort(id, title, status, EffortCategory::Backend)
}

/// Builds a minimal valid draft.
pub(super) fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(
        title,
        EstimatedHours::new(2.0).expect("valid estimate"),
        EffortCategory::Frontend,
        TaskKind::Task,
    )
    .expect("valid draft")
}

/// Builds the standard test actor profile.
pub(super) fn profile() -> ActorProfile {
    ActorProfile::new(
        EmployeeId::new("emp-1").expect("valid employee id"),
        "Alice Example",
        EmailAddress::new("alice@example.com").expect("valid email"),
        ActorRole::new("developer").expect("valid role"),
    )
}
