//! PostgreSQL implementation of EmojiRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use challet_core::entities::EmojiReaction;
use challet_core::traits::{EmojiRepository, RepoResult};
use challet_core::value_objects::{EmojiType, Snowflake};

use crate::models::{EmojiCountModel, EmojiModel};

use super::error::map_db_error;

/// PostgreSQL implementation of EmojiRepository
#[derive(Clone)]
pub struct PgEmojiRepository {
    pool: PgPool,
}

impl PgEmojiRepository {
    /// Create a new PgEmojiRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmojiRepository for PgEmojiRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<EmojiReaction>> {
        let result = sqlx::query_as::<_, EmojiModel>(
            r#"
            SELECT user_id, shared_transaction_id, emoji, updated_at
            FROM emoji_reactions
            WHERE shared_transaction_id = $1 AND user_id = $2
            "#,
        )
        .bind(shared_transaction_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(EmojiReaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn upsert(&self, reaction: &EmojiReaction) -> RepoResult<()> {
        // The unique constraint on (user_id, shared_transaction_id) makes
        // concurrent writers converge on a single slot.
        sqlx::query(
            r#"
            INSERT INTO emoji_reactions (user_id, shared_transaction_id, emoji, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, shared_transaction_id)
            DO UPDATE SET emoji = EXCLUDED.emoji, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.shared_transaction_id.into_inner())
        .bind(reaction.emoji.as_str())
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, reaction: &EmojiReaction) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE emoji_reactions
            SET emoji = $3, updated_at = $4
            WHERE user_id = $1 AND shared_transaction_id = $2
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.shared_transaction_id.into_inner())
        .bind(reaction.emoji.as_str())
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        shared_transaction_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM emoji_reactions
            WHERE shared_transaction_id = $1 AND user_id = $2
            "#,
        )
        .bind(shared_transaction_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_by_type(
        &self,
        shared_transaction_id: Snowflake,
    ) -> RepoResult<Vec<(EmojiType, i64)>> {
        let results = sqlx::query_as::<_, EmojiCountModel>(
            r#"
            SELECT emoji, COUNT(*) as count
            FROM emoji_reactions
            WHERE shared_transaction_id = $1
            GROUP BY emoji
            "#,
        )
        .bind(shared_transaction_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Rows with an unparseable emoji are dropped from the aggregate.
        Ok(results
            .into_iter()
            .filter_map(|r| r.emoji.parse::<EmojiType>().ok().map(|e| (e, r.count)))
            .collect())
    }
}
