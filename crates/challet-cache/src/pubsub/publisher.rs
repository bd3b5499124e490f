//! Redis Pub/Sub publisher.
//!
//! Publishes realtime events to challenge topics for distribution to
//! WebSocket gateway nodes.

use async_trait::async_trait;
use redis::AsyncCommands;

use challet_core::error::DomainError;
use challet_core::events::{EventPublisher, RealtimeEvent};

use crate::pool::{RedisPool, RedisResult};

/// Redis-backed implementation of the `EventPublisher` port
#[derive(Clone)]
pub struct RedisEventPublisher {
    pool: RedisPool,
}

impl RedisEventPublisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish a raw payload to a topic
    pub async fn publish_raw(&self, topic: &str, message: &str) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let receivers: u32 = conn.publish(topic, message).await?;

        tracing::debug!(topic = %topic, receivers = receivers, "Published raw message");

        Ok(receivers)
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: &RealtimeEvent) -> Result<(), DomainError> {
        let topic = event.topic().name();
        let payload =
            serde_json::to_string(event).map_err(|e| DomainError::InternalError(e.to_string()))?;

        let receivers = self
            .publish_raw(&topic, &payload)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        tracing::debug!(
            topic = %topic,
            event_type = %event.event_type(),
            receivers = receivers,
            "Published event"
        );

        Ok(())
    }
}
