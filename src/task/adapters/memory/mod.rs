//! In-memory adapter implementations for the task ports.

mod notifier;
mod task;

pub use notifier::RecordingNotifier;
pub use task::InMemoryTaskRepository;
