//! Database models with SQLx FromRow derives

mod challenge;
mod comment;
mod emoji;
mod shared_transaction;
mod user;

pub use challenge::ChallengeModel;
pub use comment::CommentModel;
pub use emoji::{EmojiCountModel, EmojiModel};
pub use shared_transaction::SharedTransactionModel;
pub use user::UserModel;
