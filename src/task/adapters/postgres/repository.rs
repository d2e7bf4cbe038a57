//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::directory::domain::EmployeeEmail;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let reporter = task.reporter().clone();
        let assignee = task.assignee().clone();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
                        TaskRepositoryError::UnknownParticipant(violated_participant(
                            info.as_ref(),
                            &reporter,
                            &assignee,
                        ))
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_status(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let status = task.status().as_str().to_owned();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set((tasks::status.eq(&status), tasks::updated_at.eq(updated_at)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_for_participant(
        &self,
        participant: &EmployeeEmail,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let lookup = participant.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(
                    tasks::reporter
                        .eq(&lookup)
                        .or(tasks::assignee.eq(&lookup)),
                )
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        reporter: task.reporter().as_str().to_owned(),
        assignee: task.assignee().as_str().to_owned(),
        priority: task.priority(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
        reporter: persisted_reporter,
        assignee: persisted_assignee,
        priority,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let reporter =
        EmployeeEmail::new(persisted_reporter).map_err(TaskRepositoryError::persistence)?;
    let assignee =
        EmployeeEmail::new(persisted_assignee).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
        reporter,
        assignee,
        priority,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

/// Picks the participant named by a foreign-key violation, defaulting to the
/// assignee when the constraint name is unrecognised.
fn violated_participant(
    info: &dyn DatabaseErrorInformation,
    reporter: &EmployeeEmail,
    assignee: &EmployeeEmail,
) -> EmployeeEmail {
    if info
        .constraint_name()
        .is_some_and(|name| name == "tasks_reporter_fkey")
    {
        reporter.clone()
    } else {
        assignee.clone()
    }
}
