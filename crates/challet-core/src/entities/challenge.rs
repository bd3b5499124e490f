//! Challenge entity - a group saving challenge that transactions are shared into

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Challenge status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    Recruiting,
    Progressing,
    End,
}

/// Challenge entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: Snowflake,
    pub title: String,
    pub category: String,
    pub status: ChallengeStatus,
    pub spending_limit: i64,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Create a new Challenge
    pub fn new(id: Snowflake, title: String, category: String, spending_limit: i64) -> Self {
        Self {
            id,
            title,
            category,
            status: ChallengeStatus::Progressing,
            spending_limit,
            created_at: Utc::now(),
        }
    }

    /// Check if the challenge is still accepting shared transactions
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ChallengeStatus::Progressing
    }
}
