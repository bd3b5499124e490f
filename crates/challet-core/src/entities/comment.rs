//! Comment entity - a comment left on a shared transaction

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 300;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub shared_transaction_id: Snowflake,
    pub user_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Snowflake,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
        content: String,
    ) -> Self {
        Self {
            id,
            shared_transaction_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if the comment was written by the given user
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_authorship() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "잘했어요!".to_string(),
        );
        assert!(comment.is_author(Snowflake::new(100)));
        assert!(!comment.is_author(Snowflake::new(200)));
    }
}
