//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod emoji;
pub mod error;
pub mod shared_transaction;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use emoji::EmojiService;
pub use error::{ServiceError, ServiceResult};
pub use shared_transaction::SharedTransactionService;
