//! Service context - dependency container for services
//!
//! Holds the repositories, event publisher, and other dependencies needed
//! by services. Everything is behind a trait object so tests can assemble
//! a context from the in-memory stores.

use std::sync::Arc;

use challet_common::auth::JwtService;
use challet_core::events::EventPublisher;
use challet_core::traits::{
    ChallengeRepository, CommentRepository, EmojiRepository, SharedTransactionRepository,
    UserRepository,
};
use challet_core::SnowflakeGenerator;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (Postgres in production, in-memory in tests)
/// - The realtime event publisher (Redis pub/sub or in-process)
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    challenge_repo: Arc<dyn ChallengeRepository>,
    transaction_repo: Arc<dyn SharedTransactionRepository>,
    emoji_repo: Arc<dyn EmojiRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // Pub/Sub
    publisher: Arc<dyn EventPublisher>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        challenge_repo: Arc<dyn ChallengeRepository>,
        transaction_repo: Arc<dyn SharedTransactionRepository>,
        emoji_repo: Arc<dyn EmojiRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        publisher: Arc<dyn EventPublisher>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            challenge_repo,
            transaction_repo,
            emoji_repo,
            comment_repo,
            publisher,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the challenge repository
    pub fn challenge_repo(&self) -> &dyn ChallengeRepository {
        self.challenge_repo.as_ref()
    }

    /// Get the shared transaction repository
    pub fn transaction_repo(&self) -> &dyn SharedTransactionRepository {
        self.transaction_repo.as_ref()
    }

    /// Get the emoji reaction repository
    pub fn emoji_repo(&self) -> &dyn EmojiRepository {
        self.emoji_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === Pub/Sub ===

    /// Get the realtime event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> challet_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    challenge_repo: Option<Arc<dyn ChallengeRepository>>,
    transaction_repo: Option<Arc<dyn SharedTransactionRepository>>,
    emoji_repo: Option<Arc<dyn EmojiRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            challenge_repo: None,
            transaction_repo: None,
            emoji_repo: None,
            comment_repo: None,
            publisher: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn challenge_repo(mut self, repo: Arc<dyn ChallengeRepository>) -> Self {
        self.challenge_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn SharedTransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    pub fn emoji_repo(mut self, repo: Arc<dyn EmojiRepository>) -> Self {
        self.emoji_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.challenge_repo.ok_or_else(|| {
                super::error::ServiceError::validation("challenge_repo is required")
            })?,
            self.transaction_repo.ok_or_else(|| {
                super::error::ServiceError::validation("transaction_repo is required")
            })?,
            self.emoji_repo
                .ok_or_else(|| super::error::ServiceError::validation("emoji_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| super::error::ServiceError::validation("comment_repo is required"))?,
            self.publisher
                .ok_or_else(|| super::error::ServiceError::validation("publisher is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator.ok_or_else(|| {
                super::error::ServiceError::validation("snowflake_generator is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
