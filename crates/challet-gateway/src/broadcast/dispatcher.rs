//! Event dispatcher
//!
//! Receives events from Redis Pub/Sub and dispatches them to WebSocket
//! connections subscribed to the owning challenge.

use crate::connection::ConnectionManager;
use crate::protocol::GatewayMessage;
use challet_cache::{ReceivedMessage, Subscriber, SubscriberBuilder};
use challet_core::{ChallengeTopic, Snowflake};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Configuration for the event dispatcher
#[derive(Debug, Clone)]
pub struct EventDispatcherConfig {
    /// Redis URL
    pub redis_url: String,
    /// Broadcast buffer size
    pub broadcast_buffer: usize,
    /// Reconnection delay in milliseconds
    pub reconnect_delay_ms: u64,
}

impl Default for EventDispatcherConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            broadcast_buffer: 1024,
            reconnect_delay_ms: 1000,
        }
    }
}

/// Event dispatcher that routes Redis Pub/Sub messages to WebSocket connections
pub struct EventDispatcher {
    /// Connection manager for sending messages
    connection_manager: Arc<ConnectionManager>,
    /// Redis subscriber
    subscriber: Subscriber,
    /// Whether the dispatcher is running
    running: Arc<AtomicBool>,
    /// Sequence number for events
    sequence: Arc<AtomicU64>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    pub async fn new(
        config: EventDispatcherConfig,
        connection_manager: Arc<ConnectionManager>,
    ) -> Result<Self, challet_cache::SubscriberError> {
        let subscriber = SubscriberBuilder::new()
            .redis_url(&config.redis_url)
            .broadcast_buffer(config.broadcast_buffer)
            .reconnect_delay_ms(config.reconnect_delay_ms)
            .build()
            .await?;

        Ok(Self {
            connection_manager,
            subscriber,
            running: Arc::new(AtomicBool::new(false)),
            sequence: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Subscribe to both of a challenge's topics
    pub async fn subscribe_challenge(
        &self,
        challenge_id: Snowflake,
    ) -> Result<(), challet_cache::SubscriberError> {
        self.subscriber
            .subscribe(&[
                ChallengeTopic::shared_transactions(challenge_id),
                ChallengeTopic::emoji(challenge_id),
            ])
            .await
    }

    /// Unsubscribe from both of a challenge's topics
    pub async fn unsubscribe_challenge(
        &self,
        challenge_id: Snowflake,
    ) -> Result<(), challet_cache::SubscriberError> {
        self.subscriber
            .unsubscribe(&[
                ChallengeTopic::shared_transactions(challenge_id),
                ChallengeTopic::emoji(challenge_id),
            ])
            .await
    }

    /// Get the next sequence number
    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Start the event dispatcher
    ///
    /// This spawns a background task that receives messages from Redis
    /// and dispatches them to appropriate WebSocket connections.
    pub fn start(self: Arc<Self>) {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::warn!("Event dispatcher is already running");
            return;
        }

        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.run().await;
        });

        tracing::info!("Event dispatcher started");
    }

    /// Stop the event dispatcher
    pub async fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.subscriber.shutdown().await.ok();
        tracing::info!("Event dispatcher stopped");
    }

    /// Run the event dispatcher loop
    async fn run(&self) {
        let mut receiver = self.subscriber.receiver();

        while self.running.load(Ordering::SeqCst) {
            match receiver.recv().await {
                Ok(msg) => {
                    self.handle_message(msg).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(lagged = n, "Event dispatcher lagged behind");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::warn!("Event dispatcher channel closed");
                    break;
                }
            }
        }

        self.running.store(false, Ordering::SeqCst);
        tracing::info!("Event dispatcher loop ended");
    }

    /// Handle a received message from Redis
    async fn handle_message(&self, msg: ReceivedMessage) {
        let Some(event) = &msg.event else {
            tracing::debug!(
                topic = %msg.topic,
                "Received non-event message, ignoring"
            );
            return;
        };

        let Some(challenge_id) = msg.topic.challenge_id() else {
            tracing::debug!(
                topic = %msg.topic,
                "Received event on unrecognized topic, ignoring"
            );
            return;
        };

        let event_type = event.event_type();

        // The dispatch frame carries the event's payload; the event name
        // travels in the `t` field.
        let data = match serde_json::to_value(event) {
            Ok(Value::Object(mut map)) => map.remove("data").unwrap_or(Value::Null),
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize event for dispatch");
                return;
            }
        };

        let seq = self.next_sequence();
        let gateway_msg = GatewayMessage::dispatch(event_type, seq, data);

        let sent = self
            .connection_manager
            .send_to_challenge(challenge_id, gateway_msg)
            .await;

        tracing::trace!(
            challenge_id = %challenge_id,
            event_type = %event_type,
            sent = sent,
            "Event dispatched to challenge"
        );
    }

    /// Check if the dispatcher is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for EventDispatcher {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
