//! Emoji reaction entity <-> model mapper

use challet_core::entities::EmojiReaction;
use challet_core::error::DomainError;
use challet_core::value_objects::Snowflake;

use crate::models::EmojiModel;

/// The emoji column is free text at the storage level; parsing into the
/// domain enum can fail on rows written by an incompatible version.
impl TryFrom<EmojiModel> for EmojiReaction {
    type Error = DomainError;

    fn try_from(model: EmojiModel) -> Result<Self, Self::Error> {
        let emoji = model
            .emoji
            .parse()
            .map_err(|_| DomainError::UnknownEmojiType(model.emoji))?;

        Ok(EmojiReaction {
            user_id: Snowflake::new(model.user_id),
            shared_transaction_id: Snowflake::new(model.shared_transaction_id),
            emoji,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challet_core::value_objects::EmojiType;
    use chrono::Utc;

    #[test]
    fn test_valid_emoji_row() {
        let model = EmojiModel {
            user_id: 1,
            shared_transaction_id: 2,
            emoji: "GOOD".to_string(),
            updated_at: Utc::now(),
        };
        let reaction = EmojiReaction::try_from(model).unwrap();
        assert_eq!(reaction.emoji, EmojiType::Good);
    }

    #[test]
    fn test_unknown_emoji_row_rejected() {
        let model = EmojiModel {
            user_id: 1,
            shared_transaction_id: 2,
            emoji: "PARTY".to_string(),
            updated_at: Utc::now(),
        };
        assert!(EmojiReaction::try_from(model).is_err());
    }
}
