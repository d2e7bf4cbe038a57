//! Notification intents emitted by task transitions.

use crate::directory::domain::EmployeeEmail;

/// Lifecycle event that warrants notifying a task participant.
///
/// Transitions return these instead of performing delivery, keeping the
/// state machine pure; the service layer renders and dispatches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    /// The assignee submitted the task for review; notify the reporter.
    ReviewRequested,
    /// The reporter rejected the review; notify the assignee.
    Rejected,
    /// The reporter accepted the task; notify the assignee.
    Completed,
}

/// Rendered notification ready for best-effort delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    recipient: EmployeeEmail,
    subject: String,
    body: String,
}

impl Notification {
    /// Creates a rendered notification.
    #[must_use]
    pub fn new(
        recipient: EmployeeEmail,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn recipient(&self) -> &EmployeeEmail {
        &self.recipient
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
