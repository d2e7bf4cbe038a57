//! Unit tests for the task status transition table.

use crate::task::domain::TaskStatus;
use rstest::rstest;

#[rstest]
#[case(TaskStatus::ToDo, TaskStatus::ToDo, false)]
#[case(TaskStatus::ToDo, TaskStatus::InProgress, true)]
#[case(TaskStatus::ToDo, TaskStatus::Review, false)]
#[case(TaskStatus::ToDo, TaskStatus::Completed, false)]
#[case(TaskStatus::ToDo, TaskStatus::Rejected, false)]
#[case(TaskStatus::InProgress, TaskStatus::ToDo, false)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, false)]
#[case(TaskStatus::InProgress, TaskStatus::Review, true)]
#[case(TaskStatus::InProgress, TaskStatus::Completed, false)]
#[case(TaskStatus::InProgress, TaskStatus::Rejected, false)]
#[case(TaskStatus::Review, TaskStatus::ToDo, false)]
#[case(TaskStatus::Review, TaskStatus::InProgress, false)]
#[case(TaskStatus::Review, TaskStatus::Review, false)]
#[case(TaskStatus::Review, TaskStatus::Completed, true)]
#[case(TaskStatus::Review, TaskStatus::Rejected, true)]
#[case(TaskStatus::Completed, TaskStatus::ToDo, false)]
#[case(TaskStatus::Completed, TaskStatus::InProgress, false)]
#[case(TaskStatus::Completed, TaskStatus::Review, false)]
#[case(TaskStatus::Completed, TaskStatus::Completed, false)]
#[case(TaskStatus::Completed, TaskStatus::Rejected, false)]
#[case(TaskStatus::Rejected, TaskStatus::ToDo, false)]
#[case(TaskStatus::Rejected, TaskStatus::InProgress, true)]
#[case(TaskStatus::Rejected, TaskStatus::Review, false)]
#[case(TaskStatus::Rejected, TaskStatus::Completed, false)]
#[case(TaskStatus::Rejected, TaskStatus::Rejected, false)]
fn can_transition_to_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
#[case(TaskStatus::ToDo, false)]
#[case(TaskStatus::InProgress, false)]
#[case(TaskStatus::Review, false)]
#[case(TaskStatus::Completed, true)]
#[case(TaskStatus::Rejected, false)]
fn is_terminal_returns_expected(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
#[case(TaskStatus::ToDo, "to_do")]
#[case(TaskStatus::InProgress, "in_progress")]
#[case(TaskStatus::Review, "review")]
#[case(TaskStatus::Completed, "completed")]
#[case(TaskStatus::Rejected, "rejected")]
fn storage_form_round_trips(#[case] status: TaskStatus, #[case] stored: &str) {
    assert_eq!(status.as_str(), stored);
    assert_eq!(TaskStatus::try_from(stored), Ok(status));
}

#[rstest]
#[case("")]
#[case("open")]
#[case("done")]
fn parse_rejects_unknown_statuses(#[case] raw: &str) {
    assert!(TaskStatus::try_from(raw).is_err());
}
