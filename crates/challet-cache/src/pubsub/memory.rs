//! In-process event transport for tests and local runs.

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::broadcast;

use challet_core::error::DomainError;
use challet_core::events::{EventPublisher, RealtimeEvent};

/// `EventPublisher` that records events and fans them out over a
/// broadcast channel, standing in for Redis in tests.
pub struct MemoryPublisher {
    events: Mutex<Vec<RealtimeEvent>>,
    tx: broadcast::Sender<RealtimeEvent>,
}

impl MemoryPublisher {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self {
            events: Mutex::new(Vec::new()),
            tx,
        }
    }

    /// Snapshot of everything published so far
    pub fn published(&self) -> Vec<RealtimeEvent> {
        self.events.lock().clone()
    }

    /// Number of events published so far
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Subscribe to the live event stream
    #[must_use]
    pub fn receiver(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.tx.subscribe()
    }
}

impl Default for MemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &RealtimeEvent) -> Result<(), DomainError> {
        self.events.lock().push(event.clone());
        // Send errors just mean nobody is listening
        let _ = self.tx.send(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challet_core::events::EmojiUpdatedEvent;
    use challet_core::{EmojiType, Snowflake};

    #[tokio::test]
    async fn test_records_and_broadcasts() {
        let publisher = MemoryPublisher::new();
        let mut rx = publisher.receiver();

        let event = RealtimeEvent::EmojiUpdated(EmojiUpdatedEvent::new(
            Snowflake::new(1),
            Snowflake::new(2),
            &[(EmojiType::Good, 1)],
        ));
        publisher.publish(&event).await.unwrap();

        assert_eq!(publisher.len(), 1);
        let received = rx.recv().await.unwrap();
        assert_eq!(received.event_type(), "EMOJI_UPDATED");
    }
}
