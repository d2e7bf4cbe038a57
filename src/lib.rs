//! Gantry: role-gated task tracking backend core.
//!
//! This crate provides the authorization and task state-machine engine for
//! a small task tracker: credential verification and bearer-token issuance,
//! employee directory management with hierarchy invariants, and a fixed
//! task lifecycle with per-transition actor constraints.
//!
//! # Architecture
//!
//! Gantry follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, notifiers)
//!
//! # Modules
//!
//! - [`auth`]: Token codec, password hashing, login, role predicates
//! - [`directory`]: Employee records and hierarchy management
//! - [`task`]: Task creation and lifecycle transitions
//! - [`error`]: Shared failure taxonomy

pub mod auth;
pub mod directory;
pub mod error;
pub mod task;
