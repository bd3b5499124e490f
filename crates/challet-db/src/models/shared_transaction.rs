//! SharedTransaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for shared_transactions table
#[derive(Debug, Clone, FromRow)]
pub struct SharedTransactionModel {
    pub id: i64,
    pub challenge_id: i64,
    pub user_id: i64,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    pub image: Option<String>,
    pub transaction_datetime: DateTime<Utc>,
}
