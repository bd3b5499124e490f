//! In-memory repository implementations
//!
//! DashMap-backed stores implementing the same ports as the PostgreSQL
//! repositories. Used by unit and integration tests, and for local runs
//! without a database.

mod challenge;
mod comment;
mod emoji;
mod shared_transaction;
mod user;

pub use challenge::MemoryChallengeRepository;
pub use comment::MemoryCommentRepository;
pub use emoji::MemoryEmojiRepository;
pub use shared_transaction::MemorySharedTransactionRepository;
pub use user::MemoryUserRepository;
