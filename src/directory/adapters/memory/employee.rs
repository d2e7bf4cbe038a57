//! In-memory repository for employee directory tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Employee, EmployeeEmail},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};

/// Thread-safe in-memory employee repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<HashMap<EmployeeEmail, Employee>>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(employee.email()) {
            return Err(EmployeeRepositoryError::DuplicateEmail(
                employee.email().clone(),
            ));
        }
        state.insert(employee.email().clone(), employee.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmployeeEmail,
    ) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(email).cloned())
    }

    async fn list(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut employees: Vec<Employee> = state.values().cloned().collect();
        employees.sort_by(|a, b| a.email().as_str().cmp(b.email().as_str()));
        Ok(employees)
    }

    async fn delete(&self, email: &EmployeeEmail) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| EmployeeRepositoryError::NotFound(email.clone()))
    }

    async fn has_subordinates(&self, manager: &EmployeeEmail) -> EmployeeRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .values()
            .any(|employee| employee.manager() == Some(manager)))
    }
}
