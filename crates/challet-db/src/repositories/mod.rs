//! PostgreSQL repository implementations

mod challenge;
mod comment;
mod emoji;
mod error;
mod shared_transaction;
mod user;

pub use challenge::PgChallengeRepository;
pub use comment::PgCommentRepository;
pub use emoji::PgEmojiRepository;
pub use error::map_db_error;
pub use shared_transaction::PgSharedTransactionRepository;
pub use user::PgUserRepository;
