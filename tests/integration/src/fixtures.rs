//! Test fixtures and data generators
//!
//! Request and response shapes for the Challet API, plus generators
//! for unique test data.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Register a shared transaction into a challenge
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTransactionBody {
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    pub image: Option<String>,
}

impl RegisterTransactionBody {
    pub fn coffee() -> Self {
        Self {
            deposit: "스타벅스".to_string(),
            transaction_amount: 5_500,
            content: "아침 커피".to_string(),
            image: None,
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            deposit: format!("가맹점 {suffix}"),
            transaction_amount: 1_000 + suffix as i64,
            content: format!("지출 내역 {suffix}"),
            image: None,
        }
    }
}

/// Registration result
#[derive(Debug, Deserialize)]
pub struct RegisterTransactionBodyResponse {
    pub id: String,
}

/// Emoji reaction request body
#[derive(Debug, Serialize)]
pub struct EmojiBody {
    #[serde(rename = "type")]
    pub emoji: String,
}

impl EmojiBody {
    pub fn good() -> Self {
        Self {
            emoji: "GOOD".to_string(),
        }
    }

    pub fn soso() -> Self {
        Self {
            emoji: "SOSO".to_string(),
        }
    }

    pub fn bad() -> Self {
        Self {
            emoji: "BAD".to_string(),
        }
    }
}

/// Aggregated reaction view returned after every emoji action
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiReactionBody {
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// One row of a challenge feed page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub user_id: String,
    pub nickname: String,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    #[serde(default)]
    pub emoji: Option<String>,
    pub comment_count: i64,
}

/// Cursor-paged challenge feed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub history: Vec<FeedItem>,
    pub has_next_page: bool,
}

/// Full detail view of one shared transaction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetailBody {
    pub id: String,
    pub challenge_id: String,
    pub user_id: String,
    pub nickname: String,
    pub deposit: String,
    pub transaction_amount: i64,
    pub content: String,
    pub good_count: i64,
    pub soso_count: i64,
    pub bad_count: i64,
    #[serde(default)]
    pub emoji: Option<String>,
    pub comment_count: i64,
}

/// Append a comment to a shared transaction
#[derive(Debug, Serialize)]
pub struct CommentBody {
    pub content: String,
}

impl CommentBody {
    pub fn cheer() -> Self {
        Self {
            content: "잘했어요!".to_string(),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            content: format!("댓글 {suffix}"),
        }
    }
}

/// One comment on a shared transaction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBodyResponse {
    pub id: String,
    pub user_id: String,
    pub nickname: String,
    pub content: String,
    pub created_at: String,
}

/// Ordered comment list
#[derive(Debug, Deserialize)]
pub struct CommentListBody {
    pub comments: Vec<CommentBodyResponse>,
    pub count: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
