//! In-memory implementation of CommentRepository

use async_trait::async_trait;
use dashmap::DashMap;

use challet_core::entities::Comment;
use challet_core::traits::{CommentRepository, RepoResult};
use challet_core::value_objects::Snowflake;

/// DashMap-backed CommentRepository
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    comments: DashMap<i64, Comment>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn list_by_transaction(
        &self,
        shared_transaction_id: Snowflake,
    ) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.shared_transaction_id == shared_transaction_id)
            .map(|entry| entry.clone())
            .collect();

        comments.sort_by_key(|c| c.id);
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.comments.insert(comment.id.into_inner(), comment.clone());
        Ok(())
    }

    async fn count_by_transaction(&self, shared_transaction_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .comments
            .iter()
            .filter(|entry| entry.shared_transaction_id == shared_transaction_id)
            .count() as i64)
    }
}
