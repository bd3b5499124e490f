//! In-memory implementation of EmojiRepository

use async_trait::async_trait;
use dashmap::DashMap;

use challet_core::entities::EmojiReaction;
use challet_core::traits::{EmojiRepository, RepoResult};
use challet_core::value_objects::{EmojiType, Snowflake};

/// DashMap-backed EmojiRepository.
///
/// Keyed by (user_id, shared_transaction_id), so a user can never hold
/// two slots on the same transaction; DashMap entry operations make
/// concurrent writes collapse into last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryEmojiRepository {
    reactions: DashMap<(i64, i64), EmojiReaction>,
}

impl MemoryEmojiRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(reaction: &EmojiReaction) -> (i64, i64) {
        (
            reaction.user_id.into_inner(),
            reaction.shared_transaction_id.into_inner(),
        )
    }
}

#[async_trait]
impl EmojiRepository for MemoryEmojiRepository {
    async fn find(
        &self,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<EmojiReaction>> {
        Ok(self
            .reactions
            .get(&(user_id.into_inner(), shared_transaction_id.into_inner()))
            .map(|r| r.clone()))
    }

    async fn upsert(&self, reaction: &EmojiReaction) -> RepoResult<()> {
        self.reactions.insert(Self::key(reaction), reaction.clone());
        Ok(())
    }

    async fn update(&self, reaction: &EmojiReaction) -> RepoResult<bool> {
        match self.reactions.get_mut(&Self::key(reaction)) {
            Some(mut slot) => {
                *slot = reaction.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<bool> {
        Ok(self
            .reactions
            .remove(&(user_id.into_inner(), shared_transaction_id.into_inner()))
            .is_some())
    }

    async fn count_by_type(
        &self,
        shared_transaction_id: Snowflake,
    ) -> RepoResult<Vec<(EmojiType, i64)>> {
        let mut counts: Vec<(EmojiType, i64)> =
            EmojiType::ALL.iter().map(|&e| (e, 0)).collect();

        for entry in &self.reactions {
            if entry.shared_transaction_id == shared_transaction_id {
                if let Some(slot) = counts.iter_mut().find(|(e, _)| *e == entry.emoji) {
                    slot.1 += 1;
                }
            }
        }

        counts.retain(|(_, n)| *n > 0);
        Ok(counts)
    }
}
