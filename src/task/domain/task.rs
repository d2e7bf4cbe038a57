//! Task aggregate root.

use super::{TaskDomainError, TaskEvent, TaskId, TaskStatus};
use crate::directory::domain::EmployeeEmail;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Everything except `status` (and the `updated_at` it drags along) is
/// immutable after creation: assignee and priority cannot be changed by any
/// lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    reporter: EmployeeEmail,
    assignee: EmployeeEmail,
    priority: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted reporter reference.
    pub reporter: EmployeeEmail,
    /// Persisted assignee reference.
    pub assignee: EmployeeEmail,
    /// Persisted priority.
    pub priority: i32,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the sole initial status, `ToDo`.
    ///
    /// The status is set here and never chosen by the caller; the reporter
    /// is the creating identity.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        reporter: EmployeeEmail,
        assignee: EmployeeEmail,
        priority: i32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::ToDo,
            reporter,
            assignee,
            priority,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            reporter: data.reporter,
            assignee: data.assignee,
            priority: data.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
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

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the reporter reference.
    #[must_use]
    pub const fn reporter(&self) -> &EmployeeEmail {
        &self.reporter
    }

    /// Returns the assignee reference.
    #[must_use]
    pub const fn assignee(&self) -> &EmployeeEmail {
        &self.assignee
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `InProgress`.
    ///
    /// Valid from `ToDo` and from `Rejected` (rework after a failed
    /// review). Emits no notification.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] from any other
    /// status; the aggregate is left unchanged.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::InProgress, clock)
    }

    /// Moves the task from `InProgress` to `Review`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] from any other
    /// status; the aggregate is left unchanged.
    pub fn submit_for_review(&mut self, clock: &impl Clock) -> Result<TaskEvent, TaskDomainError> {
        self.transition_to(TaskStatus::Review, clock)?;
        Ok(TaskEvent::ReviewRequested)
    }

    /// Moves the task from `Review` back to `Rejected`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] from any other
    /// status; the aggregate is left unchanged.
    pub fn reject(&mut self, clock: &impl Clock) -> Result<TaskEvent, TaskDomainError> {
        self.transition_to(TaskStatus::Rejected, clock)?;
        Ok(TaskEvent::Rejected)
    }

    /// Moves the task from `Review` to the terminal `Completed` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] from any other
    /// status; the aggregate is left unchanged.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<TaskEvent, TaskDomainError> {
        self.transition_to(TaskStatus::Completed, clock)?;
        Ok(TaskEvent::Completed)
    }

    fn transition_to(
        &mut self,
        to: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.updated_at = clock.utc();
        Ok(())
    }
}
