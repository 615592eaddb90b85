//! Remote persistence gateway port for board synchronization.

use crate::board::domain::{
    ActorProfile, ActorRole, Comment, EmailAddress, Task, TaskDraft, TaskId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote gateway operations.
pub type RemoteTaskResult<T> = Result<T, RemoteTaskError>;

/// Remote persistence contract for board data.
///
/// The transport behind this port (HTTP endpoints, retries, headers) is an
/// excluded concern; implementations surface only success, an empty scoped
/// result, or an opaque failure. Every operation is addressed on behalf of
/// an actor identified by email.
#[async_trait]
pub trait RemoteTaskGateway: Send + Sync {
    /// Fetches the tasks visible to an actor.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::NotFound`] when the scoped query has no
    /// tasks, or [`RemoteTaskError::Remote`] for any other failure.
    async fn fetch_tasks_for_actor(
        &self,
        email: &EmailAddress,
        role: &ActorRole,
    ) -> RemoteTaskResult<Vec<Task>>;

    /// Resolves the acting identity for an email address.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::NotFound`] when no profile exists for the
    /// address, or [`RemoteTaskError::Remote`] for any other failure.
    async fn fetch_actor_profile(&self, email: &EmailAddress) -> RemoteTaskResult<ActorProfile>;

    /// Persists a draft and returns the stored task with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when persistence fails.
    async fn create_task(&self, draft: &TaskDraft, email: &EmailAddress)
    -> RemoteTaskResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// A successful update additionally triggers an external notification
    /// side-effect on the server; that dispatch is out of scope here.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when persistence fails.
    async fn update_task(&self, task: &Task, email: &EmailAddress) -> RemoteTaskResult<()>;

    /// Persists a task's comment thread through the dedicated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when persistence fails.
    async fn update_task_comments(
        &self,
        task_id: &TaskId,
        comments: &[Comment],
        email: &EmailAddress,
    ) -> RemoteTaskResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when the delete fails.
    async fn delete_task(&self, id: &TaskId, email: &EmailAddress) -> RemoteTaskResult<()>;
}

/// Errors returned by remote gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteTaskError {
    /// The scoped query matched no data; treated as an empty result by the
    /// board, not as a fatal failure.
    #[error("no data found for the scoped query")]
    NotFound,

    /// Any other network or non-success outcome.
    #[error("remote call failed: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteTaskError {
    /// Wraps an opaque remote failure.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
