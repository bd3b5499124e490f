//! Pub/sub transport for realtime events

mod memory;
mod publisher;
mod subscriber;

pub use memory::MemoryPublisher;
pub use publisher::RedisEventPublisher;
pub use subscriber::{
    ReceivedMessage, Subscriber, SubscriberBuilder, SubscriberConfig, SubscriberError,
    SubscriberResult,
};
