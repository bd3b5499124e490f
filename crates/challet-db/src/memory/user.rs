//! In-memory implementation of UserRepository

use async_trait::async_trait;
use dashmap::DashMap;

use challet_core::entities::User;
use challet_core::traits::{RepoResult, UserRepository};
use challet_core::value_objects::Snowflake;

/// DashMap-backed UserRepository
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: DashMap<i64, User>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.get(&id.into_inner()).map(|u| u.clone()))
    }

    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.phone_number == phone_number)
            .map(|entry| entry.clone()))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.users.insert(user.id.into_inner(), user.clone());
        Ok(())
    }
}
