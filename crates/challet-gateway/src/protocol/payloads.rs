//! Client payload definitions
//!
//! Defines the payload structures for client-to-server messages. Push
//! operations carry their own credential so each message can be validated
//! independently of connection state.

use challet_core::{ActionType, EmojiType, Snowflake};
use serde::{Deserialize, Serialize};

/// Payload for op 10 (Hello)
///
/// Sent by the server immediately after connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloPayload {
    /// Heartbeat interval in milliseconds
    pub heartbeat_interval: u64,
}

impl HelloPayload {
    /// Default heartbeat interval (45 seconds)
    pub const DEFAULT_HEARTBEAT_INTERVAL: u64 = 45_000;

    /// Create a new Hello payload with default interval
    #[must_use]
    pub fn new() -> Self {
        Self {
            heartbeat_interval: Self::DEFAULT_HEARTBEAT_INTERVAL,
        }
    }

    /// Create a Hello payload with custom interval
    #[must_use]
    pub fn with_interval(heartbeat_interval: u64) -> Self {
        Self { heartbeat_interval }
    }
}

impl Default for HelloPayload {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload for op 2 (Identify)
///
/// Sent by the client to bind a user to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifyPayload {
    /// Authentication token (Bearer token)
    pub token: String,
}

/// Payload for op 3 (SubscribeChallenge) and op 4 (UnsubscribeChallenge)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSubscriptionPayload {
    /// Challenge whose topics should be (un)subscribed
    pub challenge_id: Snowflake,
}

/// Payload for op 6 (RegisterTransaction)
///
/// Carries its own credential header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTransactionPayload {
    /// Per-message authentication token
    pub token: String,

    /// Challenge the transaction is registered into
    pub challenge_id: Snowflake,

    /// Merchant or counterparty name
    pub deposit: String,

    /// Transaction amount in won
    pub transaction_amount: i64,

    /// Note attached by the sharer
    pub content: String,

    /// Optional attached image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for op 7 (EmojiAction)
///
/// Carries its own credential header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiActionPayload {
    /// Per-message authentication token
    pub token: String,

    /// Shared transaction the reaction targets
    pub shared_transaction_id: Snowflake,

    /// ADD, UPDATE or DELETE
    pub action: ActionType,

    /// Emoji type to apply
    #[serde(rename = "type")]
    pub emoji: EmojiType,
}
