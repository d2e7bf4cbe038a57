//! Shared failure taxonomy reported by service-layer errors.
//!
//! Every service error type exposes a [`ErrorKind`] through a `kind` method
//! so that transport layers can map failures to outcome codes without
//! inspecting error variants. Internal store failures always collapse to
//! [`ErrorKind::Internal`] and never expose backend detail.

use serde::{Deserialize, Serialize};

/// Classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller presented no credential, or an invalid or expired one.
    Unauthenticated,
    /// The caller is authenticated but fails the operation's predicate.
    Forbidden,
    /// The resource is absent, or intentionally hidden from the caller.
    NotFound,
    /// The request violates a stated invariant.
    InvalidRequest,
    /// A uniqueness constraint was violated at the store.
    Conflict,
    /// An internal failure with no caller-visible detail.
    Internal,
}
