//! Domain model for task lifecycle management.
//!
//! The aggregate keeps every field except `status` immutable after
//! creation; transitions return notification intents so the state machine
//! stays pure and delivery can happen outside the domain boundary.

mod error;
mod ids;
mod notification;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use notification::{Notification, TaskEvent};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
