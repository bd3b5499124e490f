//! Broadcast routing
//!
//! Bridges the Redis Pub/Sub backbone to local WebSocket connections.

mod dispatcher;

pub use dispatcher::{EventDispatcher, EventDispatcherConfig};
