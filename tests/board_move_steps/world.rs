//! Shared world state for board move BDD scenarios.

use std::sync::Arc;

use kahn::board::{
    adapters::memory::{InMemoryRemoteGateway, RecordingNotifier},
    domain::{
        ActorProfile, ActorRole, EffortCategory, EmailAddress, EmployeeId, EstimatedHours,
        MoveOutcome, Task, TaskDraft, TaskId, TaskKind, TaskStatus,
    },
    services::BoardService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Gateway type used by the BDD world.
pub type TestGateway = InMemoryRemoteGateway<DefaultClock>;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<TestGateway, RecordingNotifier, DefaultClock>;

/// Scenario world for board move behaviour tests.
pub struct BoardMoveWorld {
    pub gateway: TestGateway,
    pub service: TestBoardService,
    pub notifier: Arc<RecordingNotifier>,
    pub seeded: Vec<Task>,
    pub last_outcome: Option<MoveOutcome>,
    pub snapshot: Vec<Task>,
}

impl BoardMoveWorld {
    /// Creates a world with an empty board and a registered test actor.
    #[must_use]
    pub fn new() -> Self {
        let gateway = InMemoryRemoteGateway::new(Arc::new(DefaultClock));
        let notifier = Arc::new(RecordingNotifier::new());
        let service = BoardService::new(
            Arc::new(gateway.clone()),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        );

        Self {
            gateway,
            service,
            notifier,
            seeded: Vec::new(),
            last_outcome: None,
            snapshot: Vec::new(),
        }
    }

    /// Builds the actor profile every scenario acts as.
    pub fn actor_profile() -> Result<ActorProfile, eyre::Report> {
        Ok(ActorProfile::new(
            EmployeeId::new("emp-1")?,
            "Alice Example",
            EmailAddress::new("alice@example.com")?,
            ActorRole::new("developer")?,
        ))
    }

    /// Builds a seeded task for a scenario column.
    pub fn seeded_task(&self, title: &str, status: TaskStatus) -> Result<Task, eyre::Report> {
        let id = TaskId::new(format!("t{}", self.seeded.len() + 1))?;
        let draft = TaskDraft::new(
            title,
            EstimatedHours::new(2.0)?,
            EffortCategory::Backend,
            TaskKind::Task,
        )?
        .with_status(status);
        Ok(Task::from_draft(id, draft, &DefaultClock))
    }

    /// Finds a stored task's id by title.
    pub fn task_id_by_title(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.service
            .store()
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .map(|task| task.id().clone())
            .ok_or_else(|| eyre::eyre!("no stored task titled '{title}'"))
    }

    /// Records the store contents for later unchanged assertions.
    pub fn snapshot_store(&mut self) {
        self.snapshot = self.service.store().tasks().to_vec();
    }
}

impl Default for BoardMoveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardMoveWorld {
    BoardMoveWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
