//! Application services for task lifecycle orchestration.

mod lifecycle;
mod templates;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
pub use templates::NotificationTemplates;
