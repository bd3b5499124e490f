//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. The same shapes arrive over REST and over the push channel.

use serde::Deserialize;
use validator::Validate;

use challet_core::entities::MAX_COMMENT_LENGTH;
use challet_core::value_objects::{ActionType, EmojiType, Snowflake};

// ============================================================================
// Emoji Requests
// ============================================================================

/// Emoji action against a shared transaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiActionRequest {
    pub shared_transaction_id: Snowflake,

    pub action: ActionType,

    /// The emoji type to set. Ignored for DELETE but still required by
    /// the wire shape, so clients always send it.
    #[serde(rename = "type")]
    pub emoji: EmojiType,
}

// ============================================================================
// Shared Transaction Requests
// ============================================================================

/// Register a transaction into a challenge feed
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTransactionRequest {
    #[validate(length(min = 1, max = 100, message = "Deposit name must be 1-100 characters"))]
    pub deposit: String,

    #[validate(range(min = 0, message = "Transaction amount must not be negative"))]
    pub transaction_amount: i64,

    #[validate(length(max = 300, message = "Content must be at most 300 characters"))]
    pub content: String,

    /// Image URL attached to the transaction
    pub image: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Append a comment to a shared transaction
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    // Length ceiling mirrors MAX_COMMENT_LENGTH; the service enforces the
    // domain limit again with a typed error.
    #[validate(length(min = 1, max = 300, message = "Comment must be 1-300 characters"))]
    pub content: String,
}
