//! Service layer for task creation, lookup, and lifecycle transitions.

use crate::auth::domain::{AccessError, Identity, Role};
use crate::directory::{
    domain::{DirectoryDomainError, EmployeeEmail},
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::error::ErrorKind;
use crate::task::{
    domain::{Task, TaskDomainError, TaskEvent, TaskId},
    ports::{Notifier, TaskRepository, TaskRepositoryError},
    services::NotificationTemplates,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Carries no status field: every task starts in `ToDo` regardless of what
/// the transport hands in, and the reporter is always the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    assignee: String,
    priority: i32,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, assignee: impl Into<String>, priority: i32) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assignee: assignee.into(),
            priority,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Authorization predicate failed.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// State-machine validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Employee directory lookup failed.
    #[error(transparent)]
    Directory(#[from] EmployeeRepositoryError),

    /// The assignee reference is not a valid email.
    #[error(transparent)]
    InvalidAssignee(#[from] DirectoryDomainError),

    /// The assignee does not match any employee record.
    #[error("assignee {0} is not a known employee")]
    UnknownAssignee(EmployeeEmail),

    /// The task does not exist, or sits outside the caller's view.
    ///
    /// Deliberately also returned when a task exists but the caller is not
    /// the participant the transition requires, so callers cannot probe for
    /// tasks they are not part of.
    #[error("task {0} not found")]
    UnknownTask(TaskId),
}

impl TaskLifecycleError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Access(err) => err.kind(),
            Self::Domain(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::Directory(err) => err.kind(),
            Self::InvalidAssignee(_) | Self::UnknownAssignee(_) => ErrorKind::InvalidRequest,
            Self::UnknownTask(_) => ErrorKind::NotFound,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Participant a transition requires the caller to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequiredActor {
    Reporter,
    Assignee,
}

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<T, E, N, C>
where
    T: TaskRepository,
    E: EmployeeRepository,
    N: Notifier,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    directory: Arc<E>,
    notifier: Arc<N>,
    templates: Arc<NotificationTemplates>,
    clock: Arc<C>,
}

impl<T, E, N, C> TaskLifecycleService<T, E, N, C>
where
    T: TaskRepository,
    E: EmployeeRepository,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(tasks: Arc<T>, directory: Arc<E>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            directory,
            notifier,
            templates: Arc::new(NotificationTemplates::new()),
            clock,
        }
    }

    /// Creates a task in `ToDo` with the caller as reporter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Access`] when the caller is not a
    /// manager, or [`TaskLifecycleError::UnknownAssignee`] when the
    /// assignee does not exist in the directory.
    pub async fn create_task(
        &self,
        identity: &Identity,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        identity.require_role(Role::Manager)?;

        let assignee = EmployeeEmail::new(request.assignee)?;
        if self.directory.find_by_email(&assignee).await?.is_none() {
            return Err(TaskLifecycleError::UnknownAssignee(assignee));
        }

        let task = Task::new(
            request.title,
            request.description,
            identity.subject().clone(),
            assignee,
            request.priority,
            &*self.clock,
        );
        self.tasks.insert(&task).await?;
        tracing::info!(task = %task.id(), reporter = %task.reporter(), "task created");
        Ok(task)
    }

    /// Lists tasks where the caller is reporter or assignee, optionally
    /// narrowed to a single identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] when a filter identifier
    /// matches nothing in the caller's view.
    pub async fn list_tasks(
        &self,
        identity: &Identity,
        filter: Option<TaskId>,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.tasks.list_for_participant(identity.subject()).await?;
        match filter {
            Some(id) => tasks
                .into_iter()
                .find(|task| task.id() == id)
                .map(|task| vec![task])
                .ok_or(TaskLifecycleError::UnknownTask(id)),
            None => Ok(tasks),
        }
    }

    /// Starts a task: `ToDo` or `Rejected` to `InProgress`, assignee only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] when the task is absent
    /// or the caller is not its assignee, and
    /// [`TaskLifecycleError::Domain`] when the current status forbids the
    /// transition. No state is mutated on failure.
    pub async fn start_task(&self, identity: &Identity, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.find_scoped(id, identity, RequiredActor::Assignee).await?;
        task.start(&*self.clock)?;
        self.tasks.update_status(&task).await?;
        tracing::info!(task = %task.id(), "task started");
        Ok(task)
    }

    /// Submits a task for review: `InProgress` to `Review`, assignee only.
    /// Notifies the reporter.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::start_task`].
    pub async fn submit_for_review(
        &self,
        identity: &Identity,
        id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_scoped(id, identity, RequiredActor::Assignee).await?;
        let event = task.submit_for_review(&*self.clock)?;
        self.tasks.update_status(&task).await?;
        self.dispatch(event, &task).await;
        Ok(task)
    }

    /// Rejects a review: `Review` to `Rejected`, reporter only. Notifies
    /// the assignee; the task can be started again afterwards.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::start_task`], with the reporter as the
    /// required actor.
    pub async fn reject_task(&self, identity: &Identity, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.find_scoped(id, identity, RequiredActor::Reporter).await?;
        let event = task.reject(&*self.clock)?;
        self.tasks.update_status(&task).await?;
        self.dispatch(event, &task).await;
        Ok(task)
    }

    /// Completes a task: `Review` to the terminal `Completed`, reporter
    /// only. Notifies the assignee.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::start_task`], with the reporter as the
    /// required actor.
    pub async fn complete_task(
        &self,
        identity: &Identity,
        id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.find_scoped(id, identity, RequiredActor::Reporter).await?;
        let event = task.complete(&*self.clock)?;
        self.tasks.update_status(&task).await?;
        self.dispatch(event, &task).await;
        Ok(task)
    }

    /// Fetches a task only when the caller is the required participant.
    ///
    /// A mismatch reports not-found rather than forbidden so the existence
    /// of tasks outside the caller's view never leaks.
    async fn find_scoped(
        &self,
        id: TaskId,
        identity: &Identity,
        actor: RequiredActor,
    ) -> TaskLifecycleResult<Task> {
        let task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::UnknownTask(id))?;
        let required = match actor {
            RequiredActor::Reporter => task.reporter(),
            RequiredActor::Assignee => task.assignee(),
        };
        if !identity.is(required) {
            return Err(TaskLifecycleError::UnknownTask(id));
        }
        Ok(task)
    }

    /// Renders and delivers a notification, best-effort.
    ///
    /// Must never fail the transition that triggered it: render and
    /// delivery failures are logged and swallowed.
    async fn dispatch(&self, event: TaskEvent, task: &Task) {
        match self.templates.render(event, task) {
            Ok(notification) => {
                if let Err(error) = self.notifier.notify(&notification).await {
                    tracing::warn!(task = %task.id(), %error, "notification delivery failed");
                }
            }
            Err(error) => {
                tracing::warn!(task = %task.id(), %error, "notification rendering failed");
            }
        }
    }
}
