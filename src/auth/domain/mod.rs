//! Domain model for caller identity and authorization predicates.
//!
//! Roles form a closed enumeration; every check site matches exhaustively so
//! that adding a role forces a review of each authorization decision.

mod error;
mod identity;
mod role;

pub use error::{AccessError, ParseRoleError};
pub use identity::Identity;
pub use role::Role;
