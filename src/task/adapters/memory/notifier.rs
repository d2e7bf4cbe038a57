//! Recording notifier for lifecycle tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Notification,
    ports::{Notifier, NotifierError},
};

/// Notifier that records every delivered notification in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the notifications delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.read().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifierError> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        sent.push(notification.clone());
        Ok(())
    }
}
