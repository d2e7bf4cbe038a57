//! Notification rendering for task lifecycle events.

use crate::task::domain::{Notification, Task, TaskEvent};
use minijinja::{Environment, context};

/// Renders notification intents into deliverable messages.
#[derive(Debug, Default)]
pub struct NotificationTemplates {
    env: Environment<'static>,
}

impl NotificationTemplates {
    /// Creates the renderer with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Renders the notification for a lifecycle event on a task.
    ///
    /// Review requests go to the reporter; rejection and completion notices
    /// go to the assignee.
    ///
    /// # Errors
    ///
    /// Returns a template error when rendering fails; the dispatcher treats
    /// this as a delivery failure and logs it.
    pub fn render(
        &self,
        event: TaskEvent,
        task: &Task,
    ) -> Result<Notification, minijinja::Error> {
        let (subject, body_template) = match event {
            TaskEvent::ReviewRequested => (
                "Task Review Notification",
                "Task {{ title }} is ready for review.",
            ),
            TaskEvent::Rejected => (
                "Task Rejection Notification",
                "Task {{ title }} has been rejected.",
            ),
            TaskEvent::Completed => (
                "Task Completion Notification",
                "Task {{ title }} has been completed.",
            ),
        };
        let recipient = match event {
            TaskEvent::ReviewRequested => task.reporter().clone(),
            TaskEvent::Rejected | TaskEvent::Completed => task.assignee().clone(),
        };

        let body = self
            .env
            .render_str(body_template, context! { title => task.title() })?;
        Ok(Notification::new(recipient, subject, body))
    }
}
