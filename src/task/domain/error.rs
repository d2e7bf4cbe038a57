//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while mutating task aggregates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested transition is not defined by the state machine.
    #[error("task {task_id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Task being mutated.
        task_id: TaskId,
        /// Status at the time of the attempt.
        from: TaskStatus,
        /// Requested target status.
        to: TaskStatus,
    },
}

impl TaskDomainError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTransition { .. } => ErrorKind::InvalidRequest,
        }
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
