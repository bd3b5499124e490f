//! In-memory implementation of SharedTransactionRepository

use async_trait::async_trait;
use dashmap::DashMap;

use challet_core::entities::SharedTransaction;
use challet_core::traits::{RepoResult, SharedTransactionRepository, TransactionCursor};
use challet_core::value_objects::Snowflake;

/// DashMap-backed SharedTransactionRepository
#[derive(Debug, Default)]
pub struct MemorySharedTransactionRepository {
    transactions: DashMap<i64, SharedTransaction>,
}

impl MemorySharedTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SharedTransactionRepository for MemorySharedTransactionRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SharedTransaction>> {
        Ok(self.transactions.get(&id.into_inner()).map(|t| t.clone()))
    }

    async fn create(&self, transaction: &SharedTransaction) -> RepoResult<()> {
        self.transactions
            .insert(transaction.id.into_inner(), transaction.clone());
        Ok(())
    }

    async fn list_by_challenge(
        &self,
        challenge_id: Snowflake,
        cursor: TransactionCursor,
    ) -> RepoResult<Vec<SharedTransaction>> {
        let mut page: Vec<SharedTransaction> = self
            .transactions
            .iter()
            .filter(|entry| entry.challenge_id == challenge_id)
            .filter(|entry| cursor.cursor.is_none_or(|before| entry.id < before))
            .map(|entry| entry.clone())
            .collect();

        page.sort_by(|a, b| b.id.cmp(&a.id));
        page.truncate(usize::try_from(cursor.limit + 1).unwrap_or(usize::MAX));
        Ok(page)
    }
}
