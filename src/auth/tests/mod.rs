//! Unit tests for authentication and authorization.
//!
//! Tests cover role parsing and predicates, the token codec's
//! single-outcome failure contract, password hashing, and the login flow
//! including the bootstrap administrator escape hatch.

mod login_tests;
mod password_tests;
mod role_tests;
mod token_tests;
