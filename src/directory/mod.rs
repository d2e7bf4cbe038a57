//! Employee directory management for Gantry.
//!
//! Employees form a manager tree rooted at administrators. The directory
//! enforces the hierarchy invariants on every write: nobody manages
//! themselves, every non-admin has a manager, and a manager with
//! subordinates (or any administrator) cannot be deleted. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
