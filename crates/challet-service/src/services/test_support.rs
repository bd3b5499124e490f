//! Shared fixtures for service tests: a context wired to in-memory
//! stores and a recording publisher.

use std::sync::Arc;

use challet_cache::MemoryPublisher;
use challet_common::auth::JwtService;
use challet_core::entities::{Challenge, SharedTransaction, User};
use challet_core::traits::{ChallengeRepository, SharedTransactionRepository, UserRepository};
use challet_core::{Snowflake, SnowflakeGenerator};
use challet_db::{
    MemoryChallengeRepository, MemoryCommentRepository, MemoryEmojiRepository,
    MemorySharedTransactionRepository, MemoryUserRepository,
};

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) struct TestEnv {
    pub ctx: ServiceContext,
    pub publisher: Arc<MemoryPublisher>,
    pub user_repo: Arc<MemoryUserRepository>,
    pub challenge_repo: Arc<MemoryChallengeRepository>,
    pub transaction_repo: Arc<MemorySharedTransactionRepository>,
    pub emoji_repo: Arc<MemoryEmojiRepository>,
    pub comment_repo: Arc<MemoryCommentRepository>,
}

impl TestEnv {
    pub fn new() -> Self {
        let user_repo = Arc::new(MemoryUserRepository::new());
        let challenge_repo = Arc::new(MemoryChallengeRepository::new());
        let transaction_repo = Arc::new(MemorySharedTransactionRepository::new());
        let emoji_repo = Arc::new(MemoryEmojiRepository::new());
        let comment_repo = Arc::new(MemoryCommentRepository::new());
        let publisher = Arc::new(MemoryPublisher::new());

        let ctx = ServiceContextBuilder::new()
            .user_repo(user_repo.clone())
            .challenge_repo(challenge_repo.clone())
            .transaction_repo(transaction_repo.clone())
            .emoji_repo(emoji_repo.clone())
            .comment_repo(comment_repo.clone())
            .publisher(publisher.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 900, 604_800)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .build()
            .expect("all dependencies provided");

        Self {
            ctx,
            publisher,
            user_repo,
            challenge_repo,
            transaction_repo,
            emoji_repo,
            comment_repo,
        }
    }

    /// Seed a user and return it
    pub async fn seed_user(&self, id: i64, phone: &str, nickname: &str) -> User {
        let user = User::new(Snowflake::new(id), phone.to_string(), nickname.to_string());
        self.user_repo.create(&user).await.expect("seed user");
        user
    }

    /// Seed an active challenge with the given members
    pub async fn seed_challenge(&self, id: i64, members: &[Snowflake]) -> Challenge {
        let challenge = Challenge::new(
            Snowflake::new(id),
            "커피 줄이기".to_string(),
            "COFFEE".to_string(),
            50_000,
        );
        self.challenge_repo
            .create(&challenge)
            .await
            .expect("seed challenge");
        for &member in members {
            self.challenge_repo
                .add_member(challenge.id, member)
                .await
                .expect("seed member");
        }
        challenge
    }

    /// Seed a shared transaction and return it
    pub async fn seed_transaction(
        &self,
        id: i64,
        challenge_id: Snowflake,
        user_id: Snowflake,
    ) -> SharedTransaction {
        let tx = SharedTransaction::new(
            Snowflake::new(id),
            challenge_id,
            user_id,
            "스타벅스".to_string(),
            5_500,
            "아침 커피".to_string(),
        );
        self.transaction_repo.create(&tx).await.expect("seed tx");
        tx
    }
}
