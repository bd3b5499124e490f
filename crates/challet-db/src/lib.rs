//! # challet-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides two implementations of the repository traits defined
//! in `challet-core`:
//!
//! - `repositories`: PostgreSQL, for production
//! - `memory`: DashMap-backed in-memory stores, for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use challet_db::pool::{create_pool, DatabaseConfig};
//! use challet_db::repositories::PgEmojiRepository;
//! use challet_core::traits::EmojiRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let emoji_repo = PgEmojiRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    MemoryChallengeRepository, MemoryCommentRepository, MemoryEmojiRepository,
    MemorySharedTransactionRepository, MemoryUserRepository,
};
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgChallengeRepository, PgCommentRepository, PgEmojiRepository, PgSharedTransactionRepository,
    PgUserRepository,
};
