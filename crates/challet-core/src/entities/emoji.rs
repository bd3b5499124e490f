//! EmojiReaction entity - one user's reaction slot on a shared transaction
//!
//! A user holds at most one reaction per shared transaction. Mutations
//! rewrite or clear that slot rather than accumulating rows.

use chrono::{DateTime, Utc};

use crate::value_objects::{EmojiType, Snowflake};

/// One user's emoji on one shared transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiReaction {
    pub user_id: Snowflake,
    pub shared_transaction_id: Snowflake,
    pub emoji: EmojiType,
    pub updated_at: DateTime<Utc>,
}

impl EmojiReaction {
    /// Create a new EmojiReaction
    pub fn new(user_id: Snowflake, shared_transaction_id: Snowflake, emoji: EmojiType) -> Self {
        Self {
            user_id,
            shared_transaction_id,
            emoji,
            updated_at: Utc::now(),
        }
    }
}

/// Aggregated reaction state for one viewer of one shared transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmojiReactionView {
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    pub user_emoji: Option<EmojiType>,
}

impl EmojiReactionView {
    /// Build a view from per-type counts and the viewer's own slot
    pub fn from_counts(counts: &[(EmojiType, i64)], user_emoji: Option<EmojiType>) -> Self {
        let mut view = Self {
            user_emoji,
            ..Self::default()
        };
        for &(emoji, count) in counts {
            match emoji {
                EmojiType::Good => view.good_count += count,
                EmojiType::Soso => view.soso_count += count,
                EmojiType::Bad => view.bad_count += count,
            }
        }
        view
    }

    /// Total reactions across all types
    #[inline]
    pub fn total(&self) -> i64 {
        self.good_count + self.soso_count + self.bad_count
    }
}
