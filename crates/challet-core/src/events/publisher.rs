//! Event publisher port - fans realtime events out to subscribed gateways

use async_trait::async_trait;

use crate::error::DomainError;
use crate::events::RealtimeEvent;

/// Port for broadcasting realtime events over challenge topics.
///
/// The domain layer publishes; infrastructure decides the transport
/// (Redis pub/sub in production, an in-memory recorder in tests).
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event on its challenge topic
    async fn publish(&self, event: &RealtimeEvent) -> Result<(), DomainError>;
}
