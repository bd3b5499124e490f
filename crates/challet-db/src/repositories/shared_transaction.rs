//! PostgreSQL implementation of SharedTransactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use challet_core::entities::SharedTransaction;
use challet_core::traits::{RepoResult, SharedTransactionRepository, TransactionCursor};
use challet_core::value_objects::Snowflake;

use crate::models::SharedTransactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SharedTransactionRepository
#[derive(Clone)]
pub struct PgSharedTransactionRepository {
    pool: PgPool,
}

impl PgSharedTransactionRepository {
    /// Create a new PgSharedTransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SharedTransactionRepository for PgSharedTransactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SharedTransaction>> {
        let result = sqlx::query_as::<_, SharedTransactionModel>(
            r#"
            SELECT id, challenge_id, user_id, deposit, transaction_amount,
                   content, image, transaction_datetime
            FROM shared_transactions
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SharedTransaction::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, transaction: &SharedTransaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shared_transactions
                (id, challenge_id, user_id, deposit, transaction_amount,
                 content, image, transaction_datetime)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(transaction.id.into_inner())
        .bind(transaction.challenge_id.into_inner())
        .bind(transaction.user_id.into_inner())
        .bind(&transaction.deposit)
        .bind(transaction.transaction_amount)
        .bind(&transaction.content)
        .bind(&transaction.image)
        .bind(transaction.transaction_datetime)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_challenge(
        &self,
        challenge_id: Snowflake,
        cursor: TransactionCursor,
    ) -> RepoResult<Vec<SharedTransaction>> {
        // Fetch one extra row so the caller can detect a next page.
        let fetch_limit = cursor.limit + 1;

        let results = match cursor.cursor {
            Some(before) => {
                sqlx::query_as::<_, SharedTransactionModel>(
                    r#"
                    SELECT id, challenge_id, user_id, deposit, transaction_amount,
                           content, image, transaction_datetime
                    FROM shared_transactions
                    WHERE challenge_id = $1 AND id < $2
                    ORDER BY id DESC
                    LIMIT $3
                    "#,
                )
                .bind(challenge_id.into_inner())
                .bind(before.into_inner())
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, SharedTransactionModel>(
                    r#"
                    SELECT id, challenge_id, user_id, deposit, transaction_amount,
                           content, image, transaction_datetime
                    FROM shared_transactions
                    WHERE challenge_id = $1
                    ORDER BY id DESC
                    LIMIT $2
                    "#,
                )
                .bind(challenge_id.into_inner())
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SharedTransaction::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSharedTransactionRepository>();
    }
}
