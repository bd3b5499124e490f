//! Emoji reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for emoji_reactions table.
///
/// The (user_id, shared_transaction_id) pair carries a unique constraint;
/// one slot per user per transaction.
#[derive(Debug, Clone, FromRow)]
pub struct EmojiModel {
    pub user_id: i64,
    pub shared_transaction_id: i64,
    pub emoji: String,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated emoji count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct EmojiCountModel {
    pub emoji: String,
    pub count: i64,
}
