//! # challet-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! realtime event port. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Challenge, Comment, EmojiReaction, EmojiReactionView, SharedTransaction, User};
pub use error::DomainError;
pub use events::{EventPublisher, RealtimeEvent};
pub use traits::{
    ChallengeRepository, CommentRepository, EmojiRepository, RepoResult,
    SharedTransactionRepository, TransactionCursor, UserRepository,
};
pub use value_objects::{
    ActionType, ChallengeTopic, EmojiType, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
