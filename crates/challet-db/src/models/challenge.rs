//! Challenge database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for challenges table
#[derive(Debug, Clone, FromRow)]
pub struct ChallengeModel {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub status: String,
    pub spending_limit: i64,
    pub created_at: DateTime<Utc>,
}
