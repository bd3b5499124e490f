//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//!
//! Field names serialize in camelCase to match the mobile clients.

pub mod requests;
pub mod responses;

pub use requests::{CommentRequest, EmojiActionRequest, RegisterTransactionRequest};

pub use responses::{
    CommentListResponse, CommentResponse, EmojiReactionResponse, HealthChecks, HealthResponse,
    ReadinessResponse, RegisterTransactionResponse, TransactionDetailResponse, TransactionListItem,
    TransactionListResponse,
};
