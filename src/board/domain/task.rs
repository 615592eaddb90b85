//! Task aggregate root and related lifecycle types.

use super::{
    BoardDomainError, Comment, CommentId, Complexity, EffortCategory, EmployeeId, EmployeeSummary,
    EstimatedHours, Priority, ProjectId, StageId, TaskId, TaskKind, TaskStatus,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Advisory prerequisite relationships for a task.
///
/// Dependencies are metadata only: the board records which tasks should
/// reach `done` first but never blocks a move on them, and cycles across
/// tasks are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(rename = "taskIds", default)]
    task_ids: Vec<TaskId>,
}

impl Dependencies {
    /// Creates an empty dependency set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            task_ids: Vec::new(),
        }
    }

    /// Creates a dependency set from prerequisite task ids, dropping
    /// duplicates while preserving first-occurrence order.
    #[must_use]
    pub fn new(task_ids: impl IntoIterator<Item = TaskId>) -> Self {
        let mut deduped: Vec<TaskId> = Vec::new();
        for id in task_ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        Self { task_ids: deduped }
    }

    /// Returns the prerequisite task ids.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns `true` when no prerequisites are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns `true` when the given id is listed as a prerequisite.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }
}

/// Monotonic per-task revision counter for stale-write detection.
///
/// Local-only: never serialized, starts over on every full reload. The
/// store bumps it on each mutation of the task so acknowledgments that
/// lost a race to a newer local write can be recognized and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    /// Revision carried by a freshly loaded or inserted task.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// Returns the next revision.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Client-supplied task payload awaiting remote persistence.
///
/// A draft has no identity; it becomes a [`Task`] only when the remote
/// store returns the persisted record with a server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    title: String,
    description: String,
    #[serde(rename = "time")]
    estimate: EstimatedHours,
    #[serde(rename = "efforts")]
    effort: EffortCategory,
    status: TaskStatus,
    #[serde(default)]
    priority: Priority,
    #[serde(rename = "type")]
    kind: TaskKind,
    #[serde(default)]
    assignee: Option<EmployeeSummary>,
    #[serde(default)]
    reporter: Option<EmployeeSummary>,
    #[serde(default)]
    project_id: Option<ProjectId>,
    #[serde(default)]
    stage_id: Option<StageId>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    complexity: Option<Complexity>,
    #[serde(default)]
    quality_rating: Option<f64>,
    #[serde(default)]
    dependencies: Dependencies,
}

impl TaskDraft {
    /// Creates a draft with required fields, landing in the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        estimate: EstimatedHours,
        effort: EffortCategory,
        kind: TaskKind,
    ) -> Result<Self, BoardDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self {
            title,
            description: String::new(),
            estimate,
            effort,
            status: TaskStatus::Backlog,
            priority: Priority::None,
            kind,
            assignee: None,
            reporter: None,
            project_id: None,
            stage_id: None,
            due_date: None,
            start_date: None,
            complexity: None,
            quality_rating: None,
            dependencies: Dependencies::none(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the starting workflow column.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: EmployeeSummary) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: EmployeeSummary) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Associates the draft with a project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Associates the draft with a delivery stage.
    #[must_use]
    pub fn with_stage(mut self, stage_id: StageId) -> Self {
        self.stage_id = Some(stage_id);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the complexity assessment.
    #[must_use]
    pub const fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Sets the quality rating on the 0–5 scale.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidQualityRating`] when the rating is
    /// not a finite value between 0 and 5.
    pub fn with_quality_rating(mut self, rating: f64) -> Result<Self, BoardDomainError> {
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(BoardDomainError::InvalidQualityRating(rating));
        }
        self.quality_rating = Some(rating);
        Ok(self)
    }

    /// Sets the advisory prerequisite set.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: Dependencies) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the estimate.
    #[must_use]
    pub const fn estimate(&self) -> EstimatedHours {
        self.estimate
    }

    /// Returns the effort category.
    #[must_use]
    pub const fn effort(&self) -> EffortCategory {
        self.effort
    }

    /// Returns the starting workflow column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&EmployeeSummary> {
        self.assignee.as_ref()
    }

    /// Returns the reporter, if any.
    #[must_use]
    pub const fn reporter(&self) -> Option<&EmployeeSummary> {
        self.reporter.as_ref()
    }

    /// Returns the advisory prerequisite set.
    #[must_use]
    pub const fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }
}

/// Parameter object for assembling a task from complete attribute data.
///
/// Used by edit flows and tests: take [`Task::to_data`], adjust fields, and
/// rebuild through [`Task::from_parts`] so the invariants are re-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Estimated effort in hours.
    pub estimate: EstimatedHours,
    /// Effort category.
    pub effort: EffortCategory,
    /// Workflow column.
    pub status: TaskStatus,
    /// Priority.
    pub priority: Priority,
    /// Task kind.
    pub kind: TaskKind,
    /// Assignee, if any.
    pub assignee: Option<EmployeeSummary>,
    /// Reporter, if any.
    pub reporter: Option<EmployeeSummary>,
    /// Project association, if any.
    pub project_id: Option<ProjectId>,
    /// Stage association, if any.
    pub stage_id: Option<StageId>,
    /// Column ordering index, if assigned.
    pub order: Option<i64>,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Start date, if any.
    pub start_date: Option<DateTime<Utc>>,
    /// Complexity assessment, if any.
    pub complexity: Option<Complexity>,
    /// Quality rating, if any.
    pub quality_rating: Option<f64>,
    /// Advisory prerequisite set.
    pub dependencies: Dependencies,
    /// Comment thread.
    pub comments: Vec<Comment>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp; must be set exactly when status is `done`.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Task aggregate root: the unit of work moved across the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    #[serde(rename = "time")]
    estimate: EstimatedHours,
    #[serde(rename = "efforts")]
    effort: EffortCategory,
    status: TaskStatus,
    #[serde(default)]
    priority: Priority,
    #[serde(rename = "type")]
    kind: TaskKind,
    #[serde(default)]
    assignee: Option<EmployeeSummary>,
    #[serde(default)]
    reporter: Option<EmployeeSummary>,
    #[serde(default)]
    project_id: Option<ProjectId>,
    #[serde(default)]
    stage_id: Option<StageId>,
    #[serde(default)]
    order: Option<i64>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    complexity: Option<Complexity>,
    #[serde(default)]
    quality_rating: Option<f64>,
    #[serde(default)]
    dependencies: Dependencies,
    #[serde(default)]
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    #[serde(rename = "lastUpdated")]
    updated_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    revision: Revision,
}

impl Task {
    /// Creates a persisted task from a draft and a server-assigned id.
    ///
    /// Timestamps are stamped now; a draft created directly in the `done`
    /// column receives a completion timestamp so the completion invariant
    /// holds from birth.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let completed_at = (draft.status == TaskStatus::Done).then_some(timestamp);
        Self {
            id,
            title: draft.title,
            description: draft.description,
            estimate: draft.estimate,
            effort: draft.effort,
            status: draft.status,
            priority: draft.priority,
            kind: draft.kind,
            assignee: draft.assignee,
            reporter: draft.reporter,
            project_id: draft.project_id,
            stage_id: draft.stage_id,
            order: None,
            due_date: draft.due_date,
            start_date: draft.start_date,
            complexity: draft.complexity,
            quality_rating: draft.quality_rating,
            dependencies: draft.dependencies,
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
            completed_at,
            revision: Revision::initial(),
        }
    }

    /// Assembles a task from complete attribute data, re-checking the
    /// domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty,
    /// [`BoardDomainError::SelfDependency`] when the task lists itself as a
    /// prerequisite, or [`BoardDomainError::CompletionTimestampMismatch`]
    /// when the completion timestamp disagrees with the status.
    pub fn from_parts(data: TaskData) -> Result<Self, BoardDomainError> {
        if data.title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        if data.dependencies.contains(&data.id) {
            return Err(BoardDomainError::SelfDependency(data.id));
        }
        if data.completed_at.is_some() != (data.status == TaskStatus::Done) {
            return Err(BoardDomainError::CompletionTimestampMismatch {
                id: data.id,
                status: data.status,
            });
        }
        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            estimate: data.estimate,
            effort: data.effort,
            status: data.status,
            priority: data.priority,
            kind: data.kind,
            assignee: data.assignee,
            reporter: data.reporter,
            project_id: data.project_id,
            stage_id: data.stage_id,
            order: data.order,
            due_date: data.due_date,
            start_date: data.start_date,
            complexity: data.complexity,
            quality_rating: data.quality_rating,
            dependencies: data.dependencies,
            comments: data.comments,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
            revision: Revision::initial(),
        })
    }

    /// Returns the complete attribute data for rebuilding an edited copy.
    #[must_use]
    pub fn to_data(&self) -> TaskData {
        TaskData {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            estimate: self.estimate,
            effort: self.effort,
            status: self.status,
            priority: self.priority,
            kind: self.kind,
            assignee: self.assignee.clone(),
            reporter: self.reporter.clone(),
            project_id: self.project_id.clone(),
            stage_id: self.stage_id.clone(),
            order: self.order,
            due_date: self.due_date,
            start_date: self.start_date,
            complexity: self.complexity,
            quality_rating: self.quality_rating,
            dependencies: self.dependencies.clone(),
            comments: self.comments.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            completed_at: self.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the estimate.
    #[must_use]
    pub const fn estimate(&self) -> EstimatedHours {
        self.estimate
    }

    /// Returns the effort category.
    #[must_use]
    pub const fn effort(&self) -> EffortCategory {
        self.effort
    }

    /// Returns the workflow column the task occupies.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&EmployeeSummary> {
        self.assignee.as_ref()
    }

    /// Returns the reporter, if any.
    #[must_use]
    pub const fn reporter(&self) -> Option<&EmployeeSummary> {
        self.reporter.as_ref()
    }

    /// Returns the project association, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    /// Returns the stage association, if any.
    #[must_use]
    pub const fn stage_id(&self) -> Option<&StageId> {
        self.stage_id.as_ref()
    }

    /// Returns the column ordering index, if assigned.
    #[must_use]
    pub const fn order(&self) -> Option<i64> {
        self.order
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// Returns the complexity assessment, if any.
    #[must_use]
    pub const fn complexity(&self) -> Option<Complexity> {
        self.complexity
    }

    /// Returns the quality rating, if any.
    #[must_use]
    pub const fn quality_rating(&self) -> Option<f64> {
        self.quality_rating
    }

    /// Returns the advisory prerequisite set.
    #[must_use]
    pub const fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    /// Returns the comment thread.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp; set exactly when status is `done`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the local revision counter.
    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// Places the task in a workflow column.
    ///
    /// Entering `done` stamps the completion timestamp; leaving `done`
    /// clears it. The update timestamp is touched only when the column
    /// actually changes; re-placing a task in its own column during a
    /// same-column reorder alters nothing.
    pub fn place_in_column(&mut self, status: TaskStatus, clock: &impl Clock) {
        if status == self.status {
            return;
        }
        if status == TaskStatus::Done {
            self.completed_at = Some(clock.utc());
        } else {
            self.completed_at = None;
        }
        self.status = status;
        self.touch(clock);
    }

    /// Replaces the comment thread.
    pub fn set_comments(&mut self, comments: Vec<Comment>, clock: &impl Clock) {
        self.comments = comments;
        self.touch(clock);
    }

    /// Appends a comment to the thread.
    pub fn add_comment(&mut self, comment: Comment, clock: &impl Clock) {
        self.comments.push(comment);
        self.touch(clock);
    }

    /// Toggles an emoji reaction on one of this task's comments.
    ///
    /// Returns `true` when the reaction is present after the call.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::CommentNotFound`] when no comment with
    /// the given id exists on the task.
    pub fn toggle_comment_reaction(
        &mut self,
        comment_id: &CommentId,
        emoji: impl Into<String>,
        reactor: EmployeeId,
        clock: &impl Clock,
    ) -> Result<bool, BoardDomainError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|comment| comment.id() == comment_id)
            .ok_or_else(|| BoardDomainError::CommentNotFound(comment_id.clone()))?;
        let added = comment.toggle_reaction(emoji, reactor);
        self.touch(clock);
        Ok(added)
    }

    /// Sets the column ordering index.
    pub(crate) const fn set_order(&mut self, order: Option<i64>) {
        self.order = order;
    }

    /// Overwrites the local revision counter.
    pub(crate) const fn set_revision(&mut self, revision: Revision) {
        self.revision = revision;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
