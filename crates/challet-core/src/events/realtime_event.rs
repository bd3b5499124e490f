//! Realtime events - emitted when social state changes
//!
//! These events are used for:
//! - Notifying WebSocket clients of live feed updates
//! - Fanning out through the pub/sub backbone to other gateway nodes
//!
//! Field names serialize in camelCase because the event payload is
//! forwarded to clients verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ChallengeTopic, EmojiType, Snowflake};

/// All events broadcast over challenge topics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RealtimeEvent {
    SharedTransactionRegistered(SharedTransactionRegisteredEvent),
    EmojiUpdated(EmojiUpdatedEvent),
    CommentCreated(CommentCreatedEvent),
}

impl RealtimeEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SharedTransactionRegistered(_) => "SHARED_TRANSACTION_REGISTERED",
            Self::EmojiUpdated(_) => "EMOJI_UPDATED",
            Self::CommentCreated(_) => "COMMENT_CREATED",
        }
    }

    /// The challenge topic this event is broadcast on
    pub fn topic(&self) -> ChallengeTopic {
        match self {
            Self::SharedTransactionRegistered(e) => {
                ChallengeTopic::shared_transactions(e.challenge_id)
            }
            Self::EmojiUpdated(e) => ChallengeTopic::emoji(e.challenge_id),
            Self::CommentCreated(e) => ChallengeTopic::shared_transactions(e.challenge_id),
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SharedTransactionRegistered(e) => e.timestamp,
            Self::EmojiUpdated(e) => e.timestamp,
            Self::CommentCreated(e) => e.timestamp,
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

/// A member registered a transaction into the challenge feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedTransactionRegisteredEvent {
    pub challenge_id: Snowflake,
    pub shared_transaction_id: Snowflake,
    pub user_id: Snowflake,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Reaction counts for a shared transaction changed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiUpdatedEvent {
    pub challenge_id: Snowflake,
    pub shared_transaction_id: Snowflake,
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    pub timestamp: DateTime<Utc>,
}

/// A comment was left on a shared transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreatedEvent {
    pub challenge_id: Snowflake,
    pub shared_transaction_id: Snowflake,
    pub comment_id: Snowflake,
    pub user_id: Snowflake,
    pub nickname: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl EmojiUpdatedEvent {
    pub fn new(
        challenge_id: Snowflake,
        shared_transaction_id: Snowflake,
        counts: &[(EmojiType, i64)],
    ) -> Self {
        let mut event = Self {
            challenge_id,
            shared_transaction_id,
            good_count: 0,
            soso_count: 0,
            bad_count: 0,
            timestamp: Utc::now(),
        };
        for &(emoji, count) in counts {
            match emoji {
                EmojiType::Good => event.good_count = count,
                EmojiType::Soso => event.soso_count = count,
                EmojiType::Bad => event.bad_count = count,
            }
        }
        event
    }
}
