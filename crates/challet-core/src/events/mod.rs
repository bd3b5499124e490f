//! Realtime events and the publisher port

mod publisher;
mod realtime_event;

pub use publisher::EventPublisher;
pub use realtime_event::{
    CommentCreatedEvent, EmojiUpdatedEvent, RealtimeEvent, SharedTransactionRegisteredEvent,
};
