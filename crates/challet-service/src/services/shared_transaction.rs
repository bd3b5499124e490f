//! Shared transaction service
//!
//! Registration into a challenge feed, the cursor-paged feed itself,
//! and the single-transaction detail view.

use tracing::{info, instrument};
use validator::Validate;

use challet_core::entities::SharedTransaction;
use challet_core::events::{RealtimeEvent, SharedTransactionRegisteredEvent};
use challet_core::traits::TransactionCursor;
use challet_core::{DomainError, Snowflake};

use crate::dto::{
    RegisterTransactionRequest, RegisterTransactionResponse, TransactionDetailResponse,
    TransactionListItem, TransactionListResponse,
};

use super::context::ServiceContext;
use super::emoji::EmojiService;
use super::error::{ServiceError, ServiceResult};

/// Shared transaction service
pub struct SharedTransactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SharedTransactionService<'a> {
    /// Create a new SharedTransactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a transaction into a challenge feed
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        phone_number: &str,
        challenge_id: Snowflake,
        request: &RegisterTransactionRequest,
    ) -> ServiceResult<RegisterTransactionResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(phone_number.to_string()))?;

        let challenge = self
            .ctx
            .challenge_repo()
            .find_by_id(challenge_id)
            .await?
            .ok_or(DomainError::ChallengeNotFound(challenge_id))?;

        if !self
            .ctx
            .challenge_repo()
            .is_member(challenge_id, user.id)
            .await?
        {
            return Err(DomainError::NotChallengeMember.into());
        }

        if !challenge.is_active() {
            return Err(DomainError::ChallengeNotInProgress.into());
        }

        let transaction = SharedTransaction {
            id: self.ctx.generate_id(),
            challenge_id,
            user_id: user.id,
            deposit: request.deposit.clone(),
            transaction_amount: request.transaction_amount,
            content: request.content.clone(),
            image: request.image.clone(),
            transaction_datetime: chrono::Utc::now(),
        };
        self.ctx.transaction_repo().create(&transaction).await?;

        info!(
            shared_transaction_id = %transaction.id,
            challenge_id = %challenge_id,
            user_id = %user.id,
            "Shared transaction registered"
        );

        let event = RealtimeEvent::SharedTransactionRegistered(SharedTransactionRegisteredEvent {
            challenge_id,
            shared_transaction_id: transaction.id,
            user_id: user.id,
            nickname: user.nickname.clone(),
            profile_image: user.profile_image.clone(),
            deposit: transaction.deposit.clone(),
            transaction_amount: transaction.transaction_amount,
            content: transaction.content.clone(),
            image: transaction.image.clone(),
            timestamp: transaction.transaction_datetime,
        });
        self.ctx.publisher().publish(&event).await.ok();

        Ok(RegisterTransactionResponse {
            id: transaction.id.to_string(),
        })
    }

    /// Page through a challenge feed, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        phone_number: &str,
        challenge_id: Snowflake,
        cursor: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<TransactionListResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(phone_number.to_string()))?;

        if self
            .ctx
            .challenge_repo()
            .find_by_id(challenge_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ChallengeNotFound(challenge_id).into());
        }

        if !self
            .ctx
            .challenge_repo()
            .is_member(challenge_id, user.id)
            .await?
        {
            return Err(DomainError::NotChallengeMember.into());
        }

        let page = TransactionCursor::new(cursor, limit);
        let mut rows = self
            .ctx
            .transaction_repo()
            .list_by_challenge(challenge_id, page)
            .await?;

        let has_next_page = rows.len() as i64 > page.limit;
        rows.truncate(page.limit as usize);

        let emoji_service = EmojiService::new(self.ctx);
        let mut history = Vec::with_capacity(rows.len());
        for tx in &rows {
            let Some(sharer) = self.ctx.user_repo().find_by_id(tx.user_id).await? else {
                continue;
            };
            let view = emoji_service.current_view(tx, user.id).await?;
            let comment_count = self.ctx.comment_repo().count_by_transaction(tx.id).await?;

            history.push(TransactionListItem::new(tx, &sharer, view, comment_count));
        }

        Ok(TransactionListResponse {
            history,
            has_next_page,
        })
    }

    /// Detail view of one shared transaction
    #[instrument(skip(self))]
    pub async fn get_detail(
        &self,
        phone_number: &str,
        shared_transaction_id: Snowflake,
    ) -> ServiceResult<TransactionDetailResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(phone_number.to_string()))?;

        let transaction = self
            .ctx
            .transaction_repo()
            .find_by_id(shared_transaction_id)
            .await?
            .ok_or(DomainError::SharedTransactionNotFound(shared_transaction_id))?;

        let sharer = self
            .ctx
            .user_repo()
            .find_by_id(transaction.user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(transaction.user_id.to_string()))?;

        let emoji_service = EmojiService::new(self.ctx);
        let view = emoji_service.current_view(&transaction, user.id).await?;
        let comment_count = self
            .ctx
            .comment_repo()
            .count_by_transaction(transaction.id)
            .await?;

        Ok(TransactionDetailResponse::new(
            &transaction,
            &sharer,
            view,
            comment_count,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::EmojiActionRequest;
    use crate::services::test_support::TestEnv;
    use challet_core::entities::ChallengeStatus;
    use challet_core::value_objects::{ActionType, EmojiType};
    use challet_core::{ChallengeRepository, SharedTransactionRepository};

    fn register_request() -> RegisterTransactionRequest {
        RegisterTransactionRequest {
            deposit: "스타벅스".to_string(),
            transaction_amount: 5_500,
            content: "아침 커피".to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_register_creates_and_broadcasts() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;

        let service = SharedTransactionService::new(&env.ctx);
        let response = service
            .register("01011110000", challenge.id, &register_request())
            .await
            .unwrap();

        let id: Snowflake = response.id.parse().unwrap();
        let stored = env
            .transaction_repo
            .find_by_id(id)
            .await
            .unwrap()
            .expect("transaction stored");
        assert_eq!(stored.challenge_id, challenge.id);
        assert_eq!(stored.user_id, u1.id);

        let events = env.publisher.published();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "SHARED_TRANSACTION_REGISTERED");
        assert_eq!(events[0].topic().name(), "challenge/1/shared-transactions");
    }

    #[tokio::test]
    async fn test_register_requires_membership() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        env.seed_user(200, "01022220000", "outsider").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;

        let service = SharedTransactionService::new(&env.ctx);
        let err = service
            .register("01022220000", challenge.id, &register_request())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 403);
        assert!(env.publisher.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_finished_challenge() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let mut challenge = env.seed_challenge(1, &[u1.id]).await;
        challenge.status = ChallengeStatus::End;
        env.challenge_repo.create(&challenge).await.unwrap();

        let service = SharedTransactionService::new(&env.ctx);
        let err = service
            .register("01011110000", challenge.id, &register_request())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "CHALLENGE_NOT_IN_PROGRESS");
    }

    #[tokio::test]
    async fn test_register_unknown_challenge() {
        let env = TestEnv::new();
        env.seed_user(100, "01011110000", "u1").await;

        let service = SharedTransactionService::new(&env.ctx);
        let err = service
            .register("01011110000", Snowflake::new(77), &register_request())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_list_pages_newest_first() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        for id in 10..=14 {
            env.seed_transaction(id, challenge.id, u1.id).await;
        }

        let service = SharedTransactionService::new(&env.ctx);
        let page = service
            .list("01011110000", challenge.id, None, Some(3))
            .await
            .unwrap();

        assert_eq!(page.history.len(), 3);
        assert!(page.has_next_page);
        assert_eq!(page.history[0].id, "14");
        assert_eq!(page.history[2].id, "12");

        let cursor = Some(Snowflake::new(12));
        let rest = service
            .list("01011110000", challenge.id, cursor, Some(3))
            .await
            .unwrap();
        assert_eq!(rest.history.len(), 2);
        assert!(!rest.has_next_page);
        assert_eq!(rest.history[0].id, "11");
    }

    #[tokio::test]
    async fn test_list_requires_membership() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        env.seed_user(200, "01022220000", "outsider").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;

        let service = SharedTransactionService::new(&env.ctx);
        let err = service
            .list("01022220000", challenge.id, None, None)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_detail_includes_viewer_reaction() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let u2 = env.seed_user(200, "01022220000", "u2").await;
        let challenge = env.seed_challenge(1, &[u1.id, u2.id]).await;
        let tx = env.seed_transaction(10, challenge.id, u1.id).await;

        let emoji_service = EmojiService::new(&env.ctx);
        emoji_service
            .handle_action(
                "01022220000",
                &EmojiActionRequest {
                    shared_transaction_id: tx.id,
                    action: ActionType::Add,
                    emoji: EmojiType::Good,
                },
            )
            .await
            .unwrap();

        let service = SharedTransactionService::new(&env.ctx);
        let detail = service.get_detail("01022220000", tx.id).await.unwrap();
        assert_eq!(detail.good_count, 1);
        assert_eq!(detail.emoji, Some(EmojiType::Good));
        assert_eq!(detail.nickname, "u1");

        let detail_for_u1 = service.get_detail("01011110000", tx.id).await.unwrap();
        assert_eq!(detail_for_u1.good_count, 1);
        assert_eq!(detail_for_u1.emoji, None);
    }

    #[tokio::test]
    async fn test_detail_unknown_transaction() {
        let env = TestEnv::new();
        env.seed_user(100, "01011110000", "u1").await;

        let service = SharedTransactionService::new(&env.ctx);
        let err = service
            .get_detail("01011110000", Snowflake::new(404))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }
}
