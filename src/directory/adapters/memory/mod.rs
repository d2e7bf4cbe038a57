//! In-memory adapter implementations for the directory ports.

mod employee;

pub use employee::InMemoryEmployeeRepository;
