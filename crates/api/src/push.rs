//! Push delivery seam.
//!
//! [`PushSender`] abstracts the one outbound call this service makes so
//! handlers depend on a trait object rather than the concrete Appwrite
//! client; integration tests substitute a recording double.

use async_trait::async_trait;
use pushrelay_appwrite::messaging::{CreatePush, Messaging, MessagingError, PushMessage};

/// Sends push messages to the delivery provider.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Create and send one push message.
    async fn create_push(&self, push: &CreatePush) -> Result<PushMessage, MessagingError>;
}

/// Production sender backed by the Appwrite Messaging API.
pub struct AppwriteSender {
    messaging: Messaging,
}

impl AppwriteSender {
    /// Wrap a [`Messaging`] client.
    pub fn new(messaging: Messaging) -> Self {
        Self { messaging }
    }
}

#[async_trait]
impl PushSender for AppwriteSender {
    async fn create_push(&self, push: &CreatePush) -> Result<PushMessage, MessagingError> {
        self.messaging.create_push(push).await
    }
}
