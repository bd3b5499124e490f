//! # challet-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CommentListResponse, CommentRequest, CommentResponse, EmojiActionRequest,
    EmojiReactionResponse, HealthResponse, ReadinessResponse, RegisterTransactionRequest,
    RegisterTransactionResponse, TransactionDetailResponse, TransactionListItem,
    TransactionListResponse,
};
pub use services::{
    CommentService, EmojiService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SharedTransactionService,
};
