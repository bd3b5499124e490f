//! Domain entities

mod challenge;
mod comment;
mod emoji;
mod shared_transaction;
mod user;

pub use challenge::{Challenge, ChallengeStatus};
pub use comment::{Comment, MAX_COMMENT_LENGTH};
pub use emoji::{EmojiReaction, EmojiReactionView};
pub use shared_transaction::SharedTransaction;
pub use user::User;
