//! Emoji reaction types and actions
//!
//! The reaction vocabulary is a fixed three-value set; clients send the
//! wire values `GOOD`, `SOSO`, and `BAD`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The enumerated set of emoji a user can react with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmojiType {
    Good,
    Soso,
    Bad,
}

impl EmojiType {
    /// All emoji types, in display order
    pub const ALL: [EmojiType; 3] = [Self::Good, Self::Soso, Self::Bad];

    /// Wire representation of this emoji type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Soso => "SOSO",
            Self::Bad => "BAD",
        }
    }
}

impl fmt::Display for EmojiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmojiType {
    type Err = UnknownEmojiType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOOD" => Ok(Self::Good),
            "SOSO" => Ok(Self::Soso),
            "BAD" => Ok(Self::Bad),
            other => Err(UnknownEmojiType(other.to_string())),
        }
    }
}

/// Error when parsing an emoji type from its wire value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emoji type: {0}")]
pub struct UnknownEmojiType(pub String);

/// The action a client requests against its reaction slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Add,
    Update,
    Delete,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("ADD"),
            Self::Update => f.write_str("UPDATE"),
            Self::Delete => f.write_str("DELETE"),
        }
    }
}
