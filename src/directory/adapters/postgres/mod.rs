//! `PostgreSQL` adapters for employee directory persistence.

mod models;
mod repository;
mod schema;

pub use repository::{DirectoryPgPool, PostgresEmployeeRepository};
