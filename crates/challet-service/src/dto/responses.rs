//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use challet_core::entities::{Comment, EmojiReactionView, SharedTransaction, User};
use challet_core::value_objects::EmojiType;

// ============================================================================
// Emoji Responses
// ============================================================================

/// Aggregated reaction view returned after every emoji action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiReactionResponse {
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    /// The requesting user's current reaction, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiType>,
}

impl From<EmojiReactionView> for EmojiReactionResponse {
    fn from(view: EmojiReactionView) -> Self {
        Self {
            good_count: view.good_count,
            soso_count: view.soso_count,
            bad_count: view.bad_count,
            emoji: view.user_emoji,
        }
    }
}

// ============================================================================
// Shared Transaction Responses
// ============================================================================

/// Result of registering a shared transaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTransactionResponse {
    pub id: String,
}

/// One row of a challenge feed page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListItem {
    pub id: String,
    pub user_id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub transaction_datetime: DateTime<Utc>,
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiType>,
    pub comment_count: i64,
}

impl TransactionListItem {
    pub fn new(
        tx: &SharedTransaction,
        sharer: &User,
        view: EmojiReactionView,
        comment_count: i64,
    ) -> Self {
        Self {
            id: tx.id.to_string(),
            user_id: tx.user_id.to_string(),
            nickname: sharer.nickname.clone(),
            profile_image: sharer.profile_image.clone(),
            deposit: tx.deposit.clone(),
            transaction_amount: tx.transaction_amount,
            content: tx.content.clone(),
            image: tx.image.clone(),
            transaction_datetime: tx.transaction_datetime,
            good_count: view.good_count,
            soso_count: view.soso_count,
            bad_count: view.bad_count,
            emoji: view.user_emoji,
            comment_count,
        }
    }
}

/// Cursor-paged challenge feed, newest first
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub history: Vec<TransactionListItem>,
    pub has_next_page: bool,
}

/// Full detail view of one shared transaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetailResponse {
    pub id: String,
    pub challenge_id: String,
    pub user_id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub transaction_datetime: DateTime<Utc>,
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiType>,
    pub comment_count: i64,
}

impl TransactionDetailResponse {
    pub fn new(
        tx: &SharedTransaction,
        sharer: &User,
        view: EmojiReactionView,
        comment_count: i64,
    ) -> Self {
        Self {
            id: tx.id.to_string(),
            challenge_id: tx.challenge_id.to_string(),
            user_id: tx.user_id.to_string(),
            nickname: sharer.nickname.clone(),
            profile_image: sharer.profile_image.clone(),
            deposit: tx.deposit.clone(),
            transaction_amount: tx.transaction_amount,
            content: tx.content.clone(),
            image: tx.image.clone(),
            transaction_datetime: tx.transaction_datetime,
            good_count: view.good_count,
            soso_count: view.soso_count,
            bad_count: view.bad_count,
            emoji: view.user_emoji,
            comment_count,
        }
    }
}

// ============================================================================
// Comment Responses
// ============================================================================

/// One comment on a shared transaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: &Comment, author: &User) -> Self {
        Self {
            id: comment.id.to_string(),
            user_id: comment.user_id.to_string(),
            nickname: author.nickname.clone(),
            profile_image: author.profile_image.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Ordered comment list, oldest first
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
    pub count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy {
                    "healthy"
                } else {
                    "unhealthy"
                }
                .to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challet_core::Snowflake;

    #[test]
    fn test_emoji_response_serialization() {
        let view = EmojiReactionView::from_counts(
            &[(EmojiType::Good, 2), (EmojiType::Bad, 1)],
            Some(EmojiType::Good),
        );
        let response = EmojiReactionResponse::from(view);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"goodCount\":2"));
        assert!(json.contains("\"badCount\":1"));
        assert!(json.contains("\"emoji\":\"GOOD\""));
    }

    #[test]
    fn test_emoji_response_omits_empty_slot() {
        let response = EmojiReactionResponse::from(EmojiReactionView::default());
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("emoji"));
    }

    #[test]
    fn test_list_item_serializes_ids_as_strings() {
        let tx = SharedTransaction::new(
            Snowflake::new(10),
            Snowflake::new(1),
            Snowflake::new(100),
            "스타벅스".to_string(),
            5_500,
            "아침 커피".to_string(),
        );
        let user = User::new(
            Snowflake::new(100),
            "01012345678".to_string(),
            "tester".to_string(),
        );
        let item = TransactionListItem::new(&tx, &user, EmojiReactionView::default(), 0);
        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains("\"id\":\"10\""));
        assert!(json.contains("\"userId\":\"100\""));
        assert!(json.contains("\"transactionAmount\":5500"));
    }
}
