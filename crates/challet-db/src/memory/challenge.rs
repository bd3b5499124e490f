//! In-memory implementation of ChallengeRepository

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};

use challet_core::entities::Challenge;
use challet_core::traits::{ChallengeRepository, RepoResult};
use challet_core::value_objects::Snowflake;

/// DashMap-backed ChallengeRepository
#[derive(Debug, Default)]
pub struct MemoryChallengeRepository {
    challenges: DashMap<i64, Challenge>,
    members: DashSet<(i64, i64)>,
}

impl MemoryChallengeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChallengeRepository for MemoryChallengeRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Challenge>> {
        Ok(self.challenges.get(&id.into_inner()).map(|c| c.clone()))
    }

    async fn is_member(&self, challenge_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        Ok(self
            .members
            .contains(&(challenge_id.into_inner(), user_id.into_inner())))
    }

    async fn create(&self, challenge: &Challenge) -> RepoResult<()> {
        self.challenges
            .insert(challenge.id.into_inner(), challenge.clone());
        Ok(())
    }

    async fn add_member(&self, challenge_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        self.members
            .insert((challenge_id.into_inner(), user_id.into_inner()));
        Ok(())
    }
}
