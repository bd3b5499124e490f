//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (Postgres in production, in-memory stores
//! in tests).

use async_trait::async_trait;

use crate::entities::{Challenge, Comment, EmojiReaction, SharedTransaction, User};
use crate::error::DomainError;
use crate::value_objects::{EmojiType, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by phone number
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Challenge Repository
// ============================================================================

#[async_trait]
pub trait ChallengeRepository: Send + Sync {
    /// Find challenge by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Challenge>>;

    /// Check if user is a member of the challenge
    async fn is_member(&self, challenge_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Create a new challenge
    async fn create(&self, challenge: &Challenge) -> RepoResult<()>;

    /// Add user as a member of the challenge
    async fn add_member(&self, challenge_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Shared Transaction Repository
// ============================================================================

/// Cursor pagination for challenge feed queries.
///
/// `cursor` is exclusive: only transactions with a smaller ID are
/// returned, newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionCursor {
    pub cursor: Option<Snowflake>,
    pub limit: i64,
}

impl TransactionCursor {
    /// Default page size for feed queries
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Create a cursor with a clamped limit
    pub fn new(cursor: Option<Snowflake>, limit: Option<i64>) -> Self {
        Self {
            cursor,
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, 100),
        }
    }
}

#[async_trait]
pub trait SharedTransactionRepository: Send + Sync {
    /// Find shared transaction by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SharedTransaction>>;

    /// Register a new shared transaction
    async fn create(&self, transaction: &SharedTransaction) -> RepoResult<()>;

    /// List transactions in a challenge, newest first.
    ///
    /// Returns one row more than `cursor.limit` when more pages exist;
    /// callers truncate and set the has-next flag.
    async fn list_by_challenge(
        &self,
        challenge_id: Snowflake,
        cursor: TransactionCursor,
    ) -> RepoResult<Vec<SharedTransaction>>;
}

// ============================================================================
// Emoji Repository
// ============================================================================

#[async_trait]
pub trait EmojiRepository: Send + Sync {
    /// Find a user's reaction slot on a shared transaction
    async fn find(
        &self,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<EmojiReaction>>;

    /// Write the user's reaction slot, replacing any existing emoji.
    ///
    /// At most one row per (user, transaction) pair survives; concurrent
    /// writers converge on the last write.
    async fn upsert(&self, reaction: &EmojiReaction) -> RepoResult<()>;

    /// Rewrite an existing slot. Returns false when no slot exists.
    async fn update(&self, reaction: &EmojiReaction) -> RepoResult<bool>;

    /// Clear the user's slot. Returns false when no slot exists.
    async fn delete(
        &self,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Count reactions per emoji type for a shared transaction
    async fn count_by_type(
        &self,
        shared_transaction_id: Snowflake,
    ) -> RepoResult<Vec<(EmojiType, i64)>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List comments on a shared transaction, oldest first
    async fn list_by_transaction(
        &self,
        shared_transaction_id: Snowflake,
    ) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Count comments on a shared transaction
    async fn count_by_transaction(&self, shared_transaction_id: Snowflake) -> RepoResult<i64>;
}
