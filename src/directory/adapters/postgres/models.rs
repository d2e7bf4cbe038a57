//! Diesel row models for employee persistence.

use super::schema::employees;
use diesel::prelude::*;

/// Query result row for employee records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Employee email.
    pub email: String,
    /// Stored password digest.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Optional manager email.
    pub manager: Option<String>,
    /// Employee role.
    pub role: String,
}

/// Insert model for employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    /// Employee email.
    pub email: String,
    /// Stored password digest.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Optional manager email.
    pub manager: Option<String>,
    /// Employee role.
    pub role: String,
}
