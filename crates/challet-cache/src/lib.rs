//! # challet-cache
//!
//! Redis layer for pub/sub fanout of realtime challenge events.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Publisher**: `EventPublisher` implementation over Redis pub/sub
//! - **Subscriber**: background listener with reconnect, feeding gateway nodes
//! - **Memory transport**: in-process publisher for tests
//!
//! ## Example
//!
//! ```ignore
//! use challet_cache::{RedisPool, RedisPoolConfig, RedisEventPublisher};
//! use challet_core::EventPublisher;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let publisher = RedisEventPublisher::new(pool);
//!
//! publisher.publish(&event).await?;
//! ```

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{
    MemoryPublisher, ReceivedMessage, RedisEventPublisher, Subscriber, SubscriberBuilder,
    SubscriberConfig, SubscriberError, SubscriberResult,
};
