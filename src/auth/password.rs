//! One-way password hashing and verification.
//!
//! Uses bcrypt at the default cost. Verification goes through the hash
//! scheme's own comparison; a malformed stored digest verifies as `false`
//! rather than erroring, so a corrupted record degrades to a failed login.

use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored password digest.
///
/// Normally a bcrypt digest; for the bootstrap administrator record the
/// stored value is the cleartext password itself (see
/// [`crate::auth::services::BootstrapAdmin`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps an already-computed digest, e.g. one read from persistence.
    #[must_use]
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Returns the digest as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error returned when computing a digest fails.
#[derive(Debug, Error)]
#[error("password hashing failed")]
pub struct PasswordError(#[from] bcrypt::BcryptError);

impl PasswordError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }
}

/// Computes a salted bcrypt digest of the given plaintext.
///
/// # Errors
///
/// Returns [`PasswordError`] when the underlying hash computation fails.
pub fn hash(plaintext: &str) -> Result<PasswordHash, PasswordError> {
    let digest = bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)?;
    Ok(PasswordHash(digest))
}

/// Verifies a plaintext against a stored digest.
#[must_use]
pub fn verify(plaintext: &str, digest: &PasswordHash) -> bool {
    bcrypt::verify(plaintext, digest.as_str()).unwrap_or(false)
}
