//! Signed, time-limited bearer-token codec.
//!
//! Tokens are HS256 JSON Web Tokens embedding subject, role, and an absolute
//! expiry. Signing configuration is injected at construction through
//! [`TokenConfig`] rather than read from module-level constants, so two
//! codecs with different secrets can coexist in one process (and in tests).

use crate::auth::domain::Role;
use crate::directory::domain::EmployeeEmail;
use crate::error::ErrorKind;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable signing configuration for the token codec.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    secret: String,
    lifetime: Duration,
}

impl TokenConfig {
    /// Fixed token lifetime applied unless overridden.
    const DEFAULT_LIFETIME_MINUTES: i64 = 60;

    /// Creates a configuration with the default sixty-minute lifetime.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            lifetime: Duration::minutes(Self::DEFAULT_LIFETIME_MINUTES),
        }
    }

    /// Overrides the token lifetime.
    #[must_use]
    pub const fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }
}

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject employee email.
    pub sub: String,
    /// Role held at issuance time.
    pub role: Role,
    /// Absolute expiry as Unix seconds.
    pub exp: i64,
}

/// Token material returned from issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Encoded bearer credential.
    pub token: String,
    /// Absolute expiry of the credential.
    pub expires_at: DateTime<Utc>,
}

/// Single outcome for every decode failure.
///
/// Signature mismatch, malformed payload, missing claims, and expiry all
/// collapse to this value; callers must treat it as "unauthenticated" and
/// must not surface a finer-grained reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid bearer token")]
pub struct InvalidTokenError;

impl InvalidTokenError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Unauthenticated
    }
}

/// Error returned when token signing itself fails.
#[derive(Debug, Error)]
#[error("token signing failed")]
pub struct TokenIssueError(#[source] jsonwebtoken::errors::Error);

impl TokenIssueError {
    /// Maps the error to its outcome classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }
}

/// HS256 codec for identity assertions.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenCodec {
    /// Creates a codec from injected signing configuration.
    #[must_use]
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            lifetime: config.lifetime,
        }
    }

    /// Issues a signed assertion for the given subject and role.
    ///
    /// The expiry is absolute: the injected clock's current time plus the
    /// configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssueError`] when claim serialisation or signing fails.
    pub fn issue(
        &self,
        subject: &EmployeeEmail,
        role: Role,
        clock: &impl Clock,
    ) -> Result<IssuedToken, TokenIssueError> {
        let expires_at = clock.utc() + self.lifetime;
        let claims = AccessClaims {
            sub: subject.as_str().to_owned(),
            role,
            exp: expires_at.timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenIssueError)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Verifies a presented token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTokenError`] on signature mismatch, malformed
    /// payload, missing claims, or expiry. No partial claims are returned.
    pub fn decode(&self, token: &str) -> Result<AccessClaims, InvalidTokenError> {
        jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| InvalidTokenError)
    }
}
