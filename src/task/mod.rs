//! Task lifecycle management for Gantry.
//!
//! Tasks move through a fixed state machine: `ToDo` at creation,
//! `InProgress` once the assignee starts work, `Review` when submitted,
//! then `Completed` (terminal) or `Rejected` (re-startable). Transition
//! validation lives in one place on the domain aggregate; per-transition
//! actor constraints and notification dispatch live in the service layer.
//! The module follows hexagonal architecture:
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
