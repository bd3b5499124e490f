//! Value objects - immutable types that represent domain concepts

mod emoji_type;
mod snowflake;
mod topic;

pub use emoji_type::{ActionType, EmojiType};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use topic::ChallengeTopic;
