//! PostgreSQL implementation of ChallengeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use challet_core::entities::Challenge;
use challet_core::traits::{ChallengeRepository, RepoResult};
use challet_core::value_objects::Snowflake;

use crate::mappers::challenge_status_to_str;
use crate::models::ChallengeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChallengeRepository
#[derive(Clone)]
pub struct PgChallengeRepository {
    pool: PgPool,
}

impl PgChallengeRepository {
    /// Create a new PgChallengeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChallengeRepository for PgChallengeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Challenge>> {
        let result = sqlx::query_as::<_, ChallengeModel>(
            r#"
            SELECT id, title, category, status, spending_limit, created_at
            FROM challenges
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Challenge::from))
    }

    #[instrument(skip(self))]
    async fn is_member(&self, challenge_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM challenge_members
                WHERE challenge_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(challenge_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, challenge: &Challenge) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO challenges (id, title, category, status, spending_limit, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(challenge.id.into_inner())
        .bind(&challenge.title)
        .bind(&challenge.category)
        .bind(challenge_status_to_str(challenge.status))
        .bind(challenge.spending_limit)
        .bind(challenge.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_member(&self, challenge_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO challenge_members (challenge_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (challenge_id, user_id) DO NOTHING
            "#,
        )
        .bind(challenge_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
