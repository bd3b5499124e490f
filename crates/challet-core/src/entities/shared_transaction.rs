//! SharedTransaction entity - a bank transaction shared into a challenge feed

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A transaction a member shared into a challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedTransaction {
    pub id: Snowflake,
    pub challenge_id: Snowflake,
    pub user_id: Snowflake,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    pub image: Option<String>,
    pub transaction_datetime: DateTime<Utc>,
}

impl SharedTransaction {
    /// Create a new SharedTransaction
    pub fn new(
        id: Snowflake,
        challenge_id: Snowflake,
        user_id: Snowflake,
        deposit: String,
        transaction_amount: i64,
        content: String,
    ) -> Self {
        Self {
            id,
            challenge_id,
            user_id,
            deposit,
            transaction_amount,
            content,
            image: None,
            transaction_datetime: Utc::now(),
        }
    }

    /// Check if the transaction was shared by the given user
    #[inline]
    pub fn is_shared_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_transaction_ownership() {
        let tx = SharedTransaction::new(
            Snowflake::new(10),
            Snowflake::new(1),
            Snowflake::new(100),
            "스타벅스".to_string(),
            5_500,
            "아침 커피".to_string(),
        );
        assert!(tx.is_shared_by(Snowflake::new(100)));
        assert!(!tx.is_shared_by(Snowflake::new(101)));
    }
}
