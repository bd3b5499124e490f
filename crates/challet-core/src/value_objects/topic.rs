//! Challenge topic routing keys
//!
//! Defines the naming convention for the per-challenge pub/sub topics.
//! Each challenge carries two streams: shared-transaction registrations and
//! emoji reaction updates, so clients can subscribe selectively.

use crate::value_objects::Snowflake;

/// Topic suffix for shared-transaction registrations
pub const SHARED_TRANSACTIONS_SUFFIX: &str = "shared-transactions";
/// Topic suffix for emoji reaction updates
pub const EMOJI_SUFFIX: &str = "emoji";
/// Prefix common to all challenge topics
pub const CHALLENGE_TOPIC_PREFIX: &str = "challenge/";

/// A pub/sub routing key scoped to one challenge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChallengeTopic {
    /// Shared-transaction registrations for a challenge
    SharedTransactions(Snowflake),
    /// Emoji reaction updates for a challenge
    Emoji(Snowflake),
    /// Unrecognized topic name
    Custom(String),
}

impl ChallengeTopic {
    /// Create a shared-transactions topic
    #[must_use]
    pub fn shared_transactions(challenge_id: Snowflake) -> Self {
        Self::SharedTransactions(challenge_id)
    }

    /// Create an emoji topic
    #[must_use]
    pub fn emoji(challenge_id: Snowflake) -> Self {
        Self::Emoji(challenge_id)
    }

    /// The challenge this topic belongs to, if any
    #[must_use]
    pub fn challenge_id(&self) -> Option<Snowflake> {
        match self {
            Self::SharedTransactions(id) | Self::Emoji(id) => Some(*id),
            Self::Custom(_) => None,
        }
    }

    /// Get the topic name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::SharedTransactions(id) => {
                format!("{CHALLENGE_TOPIC_PREFIX}{id}/{SHARED_TRANSACTIONS_SUFFIX}")
            }
            Self::Emoji(id) => format!("{CHALLENGE_TOPIC_PREFIX}{id}/{EMOJI_SUFFIX}"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a topic name back to a `ChallengeTopic`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if let Some(rest) = name.strip_prefix(CHALLENGE_TOPIC_PREFIX) {
            if let Some((id_str, suffix)) = rest.split_once('/') {
                if let Ok(id) = id_str.parse::<i64>() {
                    match suffix {
                        SHARED_TRANSACTIONS_SUFFIX => {
                            return Self::SharedTransactions(Snowflake::from(id));
                        }
                        EMOJI_SUFFIX => return Self::Emoji(Snowflake::from(id)),
                        _ => {}
                    }
                }
            }
        }

        Self::Custom(name.to_string())
    }
}

impl std::fmt::Display for ChallengeTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_names() {
        let id = Snowflake::from(12345i64);

        assert_eq!(
            ChallengeTopic::shared_transactions(id).name(),
            "challenge/12345/shared-transactions"
        );
        assert_eq!(ChallengeTopic::emoji(id).name(), "challenge/12345/emoji");
    }

    #[test]
    fn test_topic_parse() {
        let topic = ChallengeTopic::parse("challenge/12345/shared-transactions");
        assert_eq!(
            topic,
            ChallengeTopic::SharedTransactions(Snowflake::from(12345i64))
        );

        let topic = ChallengeTopic::parse("challenge/67890/emoji");
        assert_eq!(topic, ChallengeTopic::Emoji(Snowflake::from(67890i64)));

        let topic = ChallengeTopic::parse("challenge/oops/emoji");
        assert_eq!(
            topic,
            ChallengeTopic::Custom("challenge/oops/emoji".to_string())
        );

        let topic = ChallengeTopic::parse("unknown");
        assert_eq!(topic, ChallengeTopic::Custom("unknown".to_string()));
    }

    #[test]
    fn test_topic_challenge_id() {
        let id = Snowflake::from(7i64);
        assert_eq!(ChallengeTopic::emoji(id).challenge_id(), Some(id));
        assert_eq!(
            ChallengeTopic::Custom("x".to_string()).challenge_id(),
            None
        );
    }
}
