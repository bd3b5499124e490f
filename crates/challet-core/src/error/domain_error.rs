//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Challenge not found: {0}")]
    ChallengeNotFound(Snowflake),

    #[error("Shared transaction not found: {0}")]
    SharedTransactionNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Unknown emoji type: {0}")]
    UnknownEmojiType(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not a member of this challenge")]
    NotChallengeMember,

    #[error("Challenge is not in progress")]
    ChallengeNotInProgress,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChallengeNotFound(_) => "UNKNOWN_CHALLENGE",
            Self::SharedTransactionNotFound(_) => "UNKNOWN_SHARED_TRANSACTION",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::UnknownEmojiType(_) => "UNKNOWN_EMOJI_TYPE",

            // Authorization
            Self::NotChallengeMember => "NOT_CHALLENGE_MEMBER",
            Self::ChallengeNotInProgress => "CHALLENGE_NOT_IN_PROGRESS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ChallengeNotFound(_)
                | Self::SharedTransactionNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::ContentTooLong { .. } | Self::UnknownEmojiType(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotChallengeMember | Self::ChallengeNotInProgress)
    }
}
