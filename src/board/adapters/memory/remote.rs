//! In-memory remote gateway for board synchronization tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::board::{
    domain::{ActorProfile, ActorRole, Comment, EmailAddress, Task, TaskDraft, TaskId},
    ports::{RemoteTaskError, RemoteTaskGateway, RemoteTaskResult},
};

/// Thread-safe in-memory stand-in for the remote persistence API.
///
/// Mints server-side ids, keeps the persisted task list in arrival order,
/// and reports an empty scoped query as [`RemoteTaskError::NotFound`],
/// mirroring the production API's 404-on-empty behaviour. Role-based
/// scoping is a server concern; the fake returns the full set to any
/// registered actor.
#[derive(Debug)]
pub struct InMemoryRemoteGateway<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<GatewayState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct GatewayState {
    profiles: HashMap<String, ActorProfile>,
    tasks: Vec<Task>,
}

impl<C> Clone for InMemoryRemoteGateway<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryRemoteGateway<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty gateway stamping timestamps from the given clock.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState::default())),
            clock,
        }
    }

    /// Registers an actor profile resolvable by email.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when the state lock is poisoned.
    pub fn register_profile(&self, profile: ActorProfile) -> RemoteTaskResult<()> {
        let mut state = write_state(&self.state)?;
        state
            .profiles
            .insert(profile.email().as_str().to_owned(), profile);
        Ok(())
    }

    /// Seeds the remote task list.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when the state lock is poisoned.
    pub fn seed_tasks(&self, tasks: Vec<Task>) -> RemoteTaskResult<()> {
        let mut state = write_state(&self.state)?;
        state.tasks = tasks;
        Ok(())
    }

    /// Returns a snapshot of the remotely persisted tasks.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Remote`] when the state lock is poisoned.
    pub fn persisted_tasks(&self) -> RemoteTaskResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks.clone())
    }
}

fn write_state(
    state: &Arc<RwLock<GatewayState>>,
) -> RemoteTaskResult<std::sync::RwLockWriteGuard<'_, GatewayState>> {
    state
        .write()
        .map_err(|err| RemoteTaskError::remote(std::io::Error::other(err.to_string())))
}

fn read_state(
    state: &Arc<RwLock<GatewayState>>,
) -> RemoteTaskResult<std::sync::RwLockReadGuard<'_, GatewayState>> {
    state
        .read()
        .map_err(|err| RemoteTaskError::remote(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl<C> RemoteTaskGateway for InMemoryRemoteGateway<C>
where
    C: Clock + Send + Sync,
{
    async fn fetch_tasks_for_actor(
        &self,
        email: &EmailAddress,
        _role: &ActorRole,
    ) -> RemoteTaskResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        if !state.profiles.contains_key(email.as_str()) {
            return Err(RemoteTaskError::NotFound);
        }
        if state.tasks.is_empty() {
            return Err(RemoteTaskError::NotFound);
        }
        Ok(state.tasks.clone())
    }

    async fn fetch_actor_profile(&self, email: &EmailAddress) -> RemoteTaskResult<ActorProfile> {
        let state = read_state(&self.state)?;
        state
            .profiles
            .get(email.as_str())
            .cloned()
            .ok_or(RemoteTaskError::NotFound)
    }

    async fn create_task(
        &self,
        draft: &TaskDraft,
        _email: &EmailAddress,
    ) -> RemoteTaskResult<Task> {
        let id =
            TaskId::new(Uuid::new_v4().to_string()).map_err(RemoteTaskError::remote)?;
        let task = Task::from_draft(id, draft.clone(), &*self.clock);
        let mut state = write_state(&self.state)?;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task: &Task, _email: &EmailAddress) -> RemoteTaskResult<()> {
        let mut state = write_state(&self.state)?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or_else(|| {
                RemoteTaskError::remote(std::io::Error::other(format!(
                    "unknown task id: {}",
                    task.id()
                )))
            })?;
        *slot = task.clone();
        Ok(())
    }

    async fn update_task_comments(
        &self,
        task_id: &TaskId,
        comments: &[Comment],
        _email: &EmailAddress,
    ) -> RemoteTaskResult<()> {
        let mut state = write_state(&self.state)?;
        let clock = Arc::clone(&self.clock);
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task_id)
            .ok_or_else(|| {
                RemoteTaskError::remote(std::io::Error::other(format!(
                    "unknown task id: {task_id}"
                )))
            })?;
        slot.set_comments(comments.to_vec(), &*clock);
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId, _email: &EmailAddress) -> RemoteTaskResult<()> {
        let mut state = write_state(&self.state)?;
        let before = state.tasks.len();
        state.tasks.retain(|stored| stored.id() != id);
        if state.tasks.len() == before {
            return Err(RemoteTaskError::remote(std::io::Error::other(format!(
                "unknown task id: {id}"
            ))));
        }
        Ok(())
    }
}
