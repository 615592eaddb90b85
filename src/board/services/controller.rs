//! Board controller orchestrating load, mutation, and drag-and-drop flows.

use crate::board::{
    domain::{
        ActorProfile, BoardDomainError, BoardView, Comment, DragEvent, EffortFilter, EmailAddress,
        FilterState, MoveOutcome, Task, TaskDraft, TaskId, TaskStore, TaskStoreError, apply_drop,
    },
    ports::{BoardNotice, BoardNotifier, RemoteTaskError, RemoteTaskGateway},
};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// No resolved actor; the operation was refused before any network call.
    #[error("no resolved actor; resolve an actor profile before using the board")]
    Unauthenticated,
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Task store contract violation.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Remote gateway operation failed.
    #[error(transparent)]
    Remote(#[from] RemoteTaskError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board controller: the single owner of the session's task state.
///
/// All mutation of the task store flows through this service, which applies
/// the optimistic-update-then-persist discipline: drag-and-drop moves are
/// applied locally before their persistence round-trip, creates are gated
/// on the server-assigned id, and deletes are pessimistic. The service is
/// single-threaded by construction — operations take `&mut self`, and the
/// only suspension points are the gateway calls.
pub struct BoardService<G, N, C>
where
    G: RemoteTaskGateway,
    N: BoardNotifier,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    notifier: Arc<N>,
    clock: Arc<C>,
    store: TaskStore,
    filter: FilterState,
    actor: Option<ActorProfile>,
    dirty: BTreeSet<TaskId>,
}

impl<G, N, C> BoardService<G, N, C>
where
    G: RemoteTaskGateway,
    N: BoardNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a board service with an empty store and no resolved actor.
    #[must_use]
    pub fn new(gateway: Arc<G>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            notifier,
            clock,
            store: TaskStore::new(),
            filter: FilterState::new(),
            actor: None,
            dirty: BTreeSet::new(),
        }
    }

    /// Resolves and caches the acting identity for an email address.
    ///
    /// Board operations fail fast with
    /// [`BoardServiceError::Unauthenticated`] until this has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the email is malformed or
    /// [`BoardServiceError::Remote`] when the profile lookup fails.
    pub async fn resolve_actor(&mut self, email: &str) -> BoardServiceResult<&ActorProfile> {
        let email = match EmailAddress::new(email) {
            Ok(email) => email,
            Err(err) => {
                self.notify_error("User information is not available. Please try logging in again.");
                return Err(err.into());
            }
        };
        let profile = match self.gateway.fetch_actor_profile(&email).await {
            Ok(profile) => profile,
            Err(err) => {
                self.notify_error("Failed to load tasks. Please try again.");
                return Err(err.into());
            }
        };
        debug!(actor = %profile.email(), role = %profile.role(), "actor resolved");
        Ok(self.actor.insert(profile))
    }

    /// Returns the resolved actor, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<&ActorProfile> {
        self.actor.as_ref()
    }

    /// Loads the board from the remote store, scoped to the resolved actor.
    ///
    /// An empty scoped result loads an empty board. On any other failure
    /// the store keeps its previous contents, an error notice is published,
    /// and the error is returned for retry. A successful load clears the
    /// dirty set: the reload is the reconciliation pass, and the last
    /// successful persist wins.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthenticated`] without a resolved
    /// actor, [`BoardServiceError::Remote`] when the fetch fails, or
    /// [`BoardServiceError::Store`] when the fetched data violates the
    /// store contract.
    pub async fn load_board(&mut self) -> BoardServiceResult<()> {
        let actor = self.require_actor()?.clone();
        let fetched = self
            .gateway
            .fetch_tasks_for_actor(actor.email(), actor.role())
            .await;
        let tasks = match fetched {
            Ok(tasks) => tasks,
            Err(RemoteTaskError::NotFound) => Vec::new(),
            Err(err) => {
                self.notify_error("Failed to load tasks. Please try again.");
                return Err(err.into());
            }
        };
        if let Err(err) = self.store.load(tasks) {
            self.notify_error("Failed to load tasks. Please try again.");
            return Err(err.into());
        }
        self.dirty.clear();
        debug!(count = self.store.len(), "board loaded");
        Ok(())
    }

    /// Creates a task from a draft.
    ///
    /// The call is synchronous-remote: the draft has no local identity, so
    /// only the persisted task returned by the gateway — carrying its
    /// server-assigned id — enters the store. No draft duplicate can exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthenticated`] without a resolved
    /// actor, [`BoardServiceError::Remote`] when persistence fails, or
    /// [`BoardServiceError::Store`] when the returned id already exists.
    pub async fn create_task(&mut self, draft: TaskDraft) -> BoardServiceResult<Task> {
        let actor = self.require_actor()?.clone();
        let created = match self.gateway.create_task(&draft, actor.email()).await {
            Ok(task) => task,
            Err(err) => {
                self.notify_error("Failed to add task. Please try again.");
                return Err(err.into());
            }
        };
        if let Err(err) = self.store.insert(created.clone()) {
            self.notify_error("Failed to add task. Please try again.");
            return Err(err.into());
        }
        self.notify_success("Task added successfully.");
        Ok(created)
    }

    /// Persists an edited task, then replaces the local copy.
    ///
    /// The design trusts the caller's copy once the server accepts it: the
    /// local task is replaced with the supplied version, not a
    /// server-echoed one. An acknowledgment that lost the race to a newer
    /// local mutation of the same task is dropped instead of overwriting
    /// it. A failed persist leaves local state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthenticated`] without a resolved
    /// actor, [`BoardServiceError::Remote`] when persistence fails, or
    /// [`BoardServiceError::Store`] when the task is unknown locally.
    pub async fn edit_task(&mut self, task: Task) -> BoardServiceResult<()> {
        let actor = self.require_actor()?.clone();
        let task_id = task.id().clone();
        let base_revision = self.store.get(&task_id).map(Task::revision);
        if let Err(err) = self.gateway.update_task(&task, actor.email()).await {
            self.notify_error("Failed to update task. Please try again.");
            return Err(err.into());
        }
        let current_revision = self.store.get(&task_id).map(Task::revision);
        if current_revision == base_revision {
            if let Err(err) = self.store.replace(task) {
                self.notify_error("Failed to update task. Please try again.");
                return Err(err.into());
            }
        } else {
            debug!(task = %task_id, "stale edit acknowledgment dropped");
        }
        self.dirty.remove(&task_id);
        self.notify_success("Task updated successfully.");
        Ok(())
    }

    /// Deletes a task, pessimistically.
    ///
    /// The remote delete must succeed before the task leaves the store, so
    /// a failed delete never orphans local state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthenticated`] without a resolved
    /// actor, [`BoardServiceError::Remote`] when the remote delete fails,
    /// or [`BoardServiceError::Store`] when the task is unknown locally.
    pub async fn delete_task(&mut self, id: &TaskId) -> BoardServiceResult<()> {
        let actor = self.require_actor()?.clone();
        if let Err(err) = self.gateway.delete_task(id, actor.email()).await {
            self.notify_error("Failed to delete task. Please try again.");
            return Err(err.into());
        }
        if let Err(err) = self.store.remove(id) {
            self.notify_error("Failed to delete task. Please try again.");
            return Err(err.into());
        }
        self.dirty.remove(id);
        self.notify_success("Task deleted successfully.");
        Ok(())
    }

    /// Applies a drag-and-drop gesture.
    ///
    /// The reordering is applied to the store immediately and optimistically.
    /// A move that crosses columns then persists the task's new status; a
    /// failure there is the one mutating path that stays silent toward the
    /// user — the board already shows the move — so the task is marked
    /// dirty for [`Self::retry_dirty`] and the divergence heals on the next
    /// successful persist or reload.
    pub async fn move_task(&mut self, event: &DragEvent) -> MoveOutcome {
        let outcome = apply_drop(&mut self.store, &self.filter, event, &*self.clock);
        let MoveOutcome::Moved {
            task,
            crossed_columns: true,
        } = &outcome
        else {
            return outcome;
        };

        let Some(actor) = self.actor.clone() else {
            warn!(task = %task.id(), "move applied without resolved actor; marked dirty");
            self.dirty.insert(task.id().clone());
            return outcome;
        };
        if let Err(err) = self.gateway.update_task(task, actor.email()).await {
            warn!(task = %task.id(), error = %err, "background move persist failed; marked dirty");
            self.dirty.insert(task.id().clone());
        } else {
            self.dirty.remove(task.id());
        }
        outcome
    }

    /// Replaces a task's comment thread, remote-first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthenticated`] without a resolved
    /// actor, [`BoardServiceError::Remote`] when persistence fails, or
    /// [`BoardServiceError::Store`] when the task is unknown locally.
    pub async fn update_comments(
        &mut self,
        task_id: &TaskId,
        comments: Vec<Comment>,
    ) -> BoardServiceResult<()> {
        let actor = self.require_actor()?.clone();
        if let Err(err) = self
            .gateway
            .update_task_comments(task_id, &comments, actor.email())
            .await
        {
            self.notify_error("Failed to update task comments. Please try again.");
            return Err(err.into());
        }
        let Some(mut updated) = self.store.get(task_id).cloned() else {
            self.notify_error("Failed to update task comments. Please try again.");
            return Err(TaskStoreError::NotFound(task_id.clone()).into());
        };
        updated.set_comments(comments, &*self.clock);
        if let Err(err) = self.store.replace(updated) {
            self.notify_error("Failed to update task comments. Please try again.");
            return Err(err.into());
        }
        self.notify_success("Comment added successfully.");
        Ok(())
    }

    /// Re-persists every task whose background persist previously failed.
    ///
    /// Tasks that persist successfully leave the dirty set; tasks that are
    /// no longer in the store are dropped from it. Returns the number of
    /// tasks persisted by this pass.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Unauthenticated`] without a resolved
    /// actor.
    pub async fn retry_dirty(&mut self) -> BoardServiceResult<usize> {
        let actor = self.require_actor()?.clone();
        let pending: Vec<TaskId> = self.dirty.iter().cloned().collect();
        let mut persisted: usize = 0;
        for id in pending {
            let Some(task) = self.store.get(&id).cloned() else {
                self.dirty.remove(&id);
                continue;
            };
            match self.gateway.update_task(&task, actor.email()).await {
                Ok(()) => {
                    self.dirty.remove(&id);
                    persisted = persisted.saturating_add(1);
                }
                Err(err) => {
                    warn!(task = %id, error = %err, "dirty retry failed; task stays dirty");
                }
            }
        }
        Ok(persisted)
    }

    /// Sets the title search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
    }

    /// Sets the effort-category selector.
    pub const fn set_effort_filter(&mut self, effort: EffortFilter) {
        self.filter.set_effort(effort);
    }

    /// Returns the current filter inputs.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Projects the filtered, column-partitioned board view.
    ///
    /// Recomputed fresh on every call; never cached.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::project(&self.store, &self.filter)
    }

    /// Returns the canonical task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Iterates over the tasks awaiting a persistence retry.
    pub fn dirty_tasks(&self) -> impl Iterator<Item = &TaskId> {
        self.dirty.iter()
    }

    /// Returns the resolved actor or refuses the operation.
    fn require_actor(&self) -> BoardServiceResult<&ActorProfile> {
        self.actor.as_ref().ok_or_else(|| {
            self.notifier.publish(BoardNotice::error(
                "User information is not available. Please try logging in again.",
            ));
            BoardServiceError::Unauthenticated
        })
    }

    fn notify_success(&self, message: &str) {
        self.notifier.publish(BoardNotice::success(message));
    }

    fn notify_error(&self, message: &str) {
        self.notifier.publish(BoardNotice::error(message));
    }
}
