//! Traits (ports) defined by the domain layer

mod repositories;

pub use repositories::{
    ChallengeRepository, CommentRepository, EmojiRepository, RepoResult,
    SharedTransactionRepository, TransactionCursor, UserRepository,
};
