//! Notification delivery port.

use crate::task::domain::Notification;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Best-effort notification delivery contract.
///
/// Delivery carries no guarantee and no observable return contract: the
/// lifecycle service logs failures and never fails a transition over one.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a notification to its recipient.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError`] when delivery fails; callers treat this as
    /// advisory only.
    async fn notify(&self, notification: &Notification) -> Result<(), NotifierError>;
}

/// Error returned by notifier implementations.
#[derive(Debug, Clone, Error)]
#[error("notification delivery failed: {0}")]
pub struct NotifierError(Arc<dyn std::error::Error + Send + Sync>);

impl NotifierError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
