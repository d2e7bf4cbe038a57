//! Authentication and authorization for Gantry.
//!
//! This module owns the credential concerns every inbound action passes
//! through before any store mutation:
//!
//! - [`token`]: signed, time-limited identity assertions (issue + decode)
//! - [`password`]: one-way password hashing and verification
//! - [`domain`]: caller identity and the role predicates evaluated before
//!   every mutating or listing operation
//! - [`services`]: the login flow that turns credentials into bearer tokens

pub mod domain;
pub mod password;
pub mod services;
pub mod token;

#[cfg(test)]
mod tests;
