//! `PostgreSQL` repository implementation for employee directory storage.

use super::{
    models::{EmployeeRow, NewEmployeeRow},
    schema::employees,
};
use crate::auth::domain::Role;
use crate::auth::password::PasswordHash;
use crate::directory::{
    domain::{Employee, EmployeeEmail, PersistedEmployeeData},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed employee repository.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: DirectoryPgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> EmployeeRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> EmployeeRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(EmployeeRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(EmployeeRepositoryError::persistence)?
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let email = employee.email().clone();
        let manager = employee.manager().cloned();
        let new_row = to_new_row(employee);

        self.run_blocking(move |connection| {
            diesel::insert_into(employees::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        EmployeeRepositoryError::DuplicateEmail(email.clone())
                    }
                    // The manager column carries the table's only foreign key.
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                        manager.clone().map_or_else(
                            || {
                                EmployeeRepositoryError::persistence(DieselError::DatabaseError(
                                    DatabaseErrorKind::ForeignKeyViolation,
                                    info,
                                ))
                            },
                            EmployeeRepositoryError::UnknownManager,
                        )
                    }
                    _ => EmployeeRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_email(
        &self,
        email: &EmployeeEmail,
    ) -> EmployeeRepositoryResult<Option<Employee>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::email.eq(&lookup))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            row.map(row_to_employee).transpose()
        })
        .await
    }

    async fn list(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        self.run_blocking(move |connection| {
            let rows = employees::table
                .order(employees::email.asc())
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)
                .map_err(EmployeeRepositoryError::persistence)?;
            rows.into_iter().map(row_to_employee).collect()
        })
        .await
    }

    async fn delete(&self, email: &EmployeeEmail) -> EmployeeRepositoryResult<()> {
        let target = email.as_str().to_owned();
        let not_found = EmployeeRepositoryError::NotFound(email.clone());
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(employees::table.filter(employees::email.eq(&target)))
                    .execute(connection)
                    .map_err(EmployeeRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(not_found);
            }
            Ok(())
        })
        .await
    }

    async fn has_subordinates(&self, manager: &EmployeeEmail) -> EmployeeRepositoryResult<bool> {
        let lookup = manager.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::select(exists(
                employees::table.filter(employees::manager.eq(&lookup)),
            ))
            .get_result::<bool>(connection)
            .map_err(EmployeeRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(employee: &Employee) -> NewEmployeeRow {
    NewEmployeeRow {
        email: employee.email().as_str().to_owned(),
        password_hash: employee.password_hash().as_str().to_owned(),
        first_name: employee.first_name().to_owned(),
        last_name: employee.last_name().to_owned(),
        manager: employee.manager().map(|m| m.as_str().to_owned()),
        role: employee.role().as_str().to_owned(),
    }
}

fn row_to_employee(row: EmployeeRow) -> EmployeeRepositoryResult<Employee> {
    let EmployeeRow {
        email: persisted_email,
        password_hash,
        first_name,
        last_name,
        manager: persisted_manager,
        role: persisted_role,
    } = row;

    let email =
        EmployeeEmail::new(persisted_email).map_err(EmployeeRepositoryError::persistence)?;
    let manager = persisted_manager
        .map(EmployeeEmail::new)
        .transpose()
        .map_err(EmployeeRepositoryError::persistence)?;
    let role =
        Role::try_from(persisted_role.as_str()).map_err(EmployeeRepositoryError::persistence)?;

    let data = PersistedEmployeeData {
        email,
        password_hash: PasswordHash::new(password_hash),
        first_name,
        last_name,
        manager,
        role,
    };
    Ok(Employee::from_persisted(data))
}
