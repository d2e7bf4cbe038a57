//! Login flow: credential verification and token issuance.

use crate::auth::domain::Identity;
use crate::auth::password::{self, PasswordHash};
use crate::auth::token::{IssuedToken, TokenCodec, TokenIssueError};
use crate::directory::{
    domain::EmployeeEmail,
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::error::ErrorKind;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// The bootstrap administrator escape hatch.
///
/// Exactly one configured account may log in by cleartext equality between
/// the presented password and the stored credential, bypassing bcrypt
/// verification. This exists so a freshly seeded system with a known admin
/// record can be reached before any hashed credential has been written. It
/// is an explicit, isolated exception: do not generalize it to other
/// accounts, and expect a warning event whenever it is exercised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    email: EmployeeEmail,
}

impl BootstrapAdmin {
    /// Conventional bootstrap account address used by the seed data.
    pub const DEFAULT_EMAIL: &'static str = "admin@domain.com";

    /// Creates the escape hatch for the given account.
    #[must_use]
    pub const fn new(email: EmployeeEmail) -> Self {
        Self { email }
    }

    /// Returns `true` when the presented login is the bootstrap account and
    /// the stored credential equals the presented password verbatim.
    #[must_use]
    pub fn matches(&self, email: &EmployeeEmail, stored: &PasswordHash, presented: &str) -> bool {
        self.email == *email && stored.as_str() == presented
    }
}

/// Service-level errors for authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown account or wrong password; deliberately undifferentiated.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, tampered, or expired bearer token.
    #[error("invalid bearer token")]
    InvalidToken,

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),

    /// Token signing failed.
    #[error(transparent)]
    Signing(#[from] TokenIssueError),
}

impl AuthError {
    /// Maps the error to its outcome classification.
    ///
    /// Both credential and token failures collapse to
    /// [`ErrorKind::Unauthenticated`]; callers never learn which check
    /// failed.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => ErrorKind::Unauthenticated,
            Self::Repository(err) => err.kind(),
            Self::Signing(err) => err.kind(),
        }
    }
}

/// Result type for authentication service operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication orchestration service.
#[derive(Clone)]
pub struct AuthService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    codec: Arc<TokenCodec>,
    bootstrap: BootstrapAdmin,
    clock: Arc<C>,
}

impl<R, C> AuthService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        codec: Arc<TokenCodec>,
        bootstrap: BootstrapAdmin,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            codec,
            bootstrap,
            clock,
        }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown account, a
    /// malformed email, or a failed password check; the three cases are
    /// indistinguishable to the caller.
    pub async fn login(&self, email: &str, plaintext: &str) -> AuthResult<IssuedToken> {
        let subject = EmployeeEmail::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let employee = self
            .repository
            .find_by_email(&subject)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if self
            .bootstrap
            .matches(employee.email(), employee.password_hash(), plaintext)
        {
            tracing::warn!(subject = %subject, "bootstrap administrator cleartext login used");
        } else if !password::verify(plaintext, employee.password_hash()) {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self
            .codec
            .issue(employee.email(), employee.role(), &*self.clock)?;
        tracing::debug!(subject = %subject, expires_at = %issued.expires_at, "token issued");
        Ok(issued)
    }

    /// Resolves the caller identity from a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] on any verification failure;
    /// callers must treat the result as "unauthenticated".
    pub fn authenticate(&self, bearer: &str) -> AuthResult<Identity> {
        let claims = self
            .codec
            .decode(bearer)
            .map_err(|_| AuthError::InvalidToken)?;
        let subject = EmployeeEmail::new(claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(Identity::new(subject, claims.role))
    }
}
