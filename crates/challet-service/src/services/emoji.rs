//! Emoji reaction service
//!
//! The reaction engine behind both the REST endpoints and the push
//! channel. A user holds at most one reaction slot per shared
//! transaction; ADD writes the slot (replacing any existing emoji),
//! UPDATE rewrites an existing slot, DELETE clears it. UPDATE and
//! DELETE on an empty slot are silent no-ops.
//!
//! The returned view is always recomputed from stored state after the
//! action, never derived from the pre-action value, so it is accurate
//! even when the action changed nothing.

use tracing::{debug, info, instrument};

use challet_core::entities::{EmojiReaction, EmojiReactionView};
use challet_core::events::{EmojiUpdatedEvent, RealtimeEvent};
use challet_core::value_objects::ActionType;
use challet_core::DomainError;

use crate::dto::{EmojiActionRequest, EmojiReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Emoji reaction service
pub struct EmojiService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmojiService<'a> {
    /// Create a new EmojiService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply an emoji action and return the recomputed aggregate view
    #[instrument(skip(self))]
    pub async fn handle_action(
        &self,
        phone_number: &str,
        request: &EmojiActionRequest,
    ) -> ServiceResult<EmojiReactionResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(phone_number.to_string()))?;

        let transaction = self
            .ctx
            .transaction_repo()
            .find_by_id(request.shared_transaction_id)
            .await?
            .ok_or(DomainError::SharedTransactionNotFound(
                request.shared_transaction_id,
            ))?;

        match request.action {
            ActionType::Add => {
                // Upsert keeps the at-most-one-slot invariant even under
                // repeated or concurrent ADDs from the same user.
                let reaction = EmojiReaction::new(user.id, transaction.id, request.emoji);
                self.ctx.emoji_repo().upsert(&reaction).await?;

                info!(
                    shared_transaction_id = %transaction.id,
                    user_id = %user.id,
                    emoji = ?request.emoji,
                    "Emoji added"
                );
            }
            ActionType::Update => {
                let reaction = EmojiReaction::new(user.id, transaction.id, request.emoji);
                let updated = self.ctx.emoji_repo().update(&reaction).await?;

                if updated {
                    info!(
                        shared_transaction_id = %transaction.id,
                        user_id = %user.id,
                        emoji = ?request.emoji,
                        "Emoji updated"
                    );
                } else {
                    debug!(
                        shared_transaction_id = %transaction.id,
                        user_id = %user.id,
                        "Emoji update on empty slot, no-op"
                    );
                }
            }
            ActionType::Delete => {
                let deleted = self
                    .ctx
                    .emoji_repo()
                    .delete(transaction.id, user.id)
                    .await?;

                if deleted {
                    info!(
                        shared_transaction_id = %transaction.id,
                        user_id = %user.id,
                        "Emoji deleted"
                    );
                } else {
                    debug!(
                        shared_transaction_id = %transaction.id,
                        user_id = %user.id,
                        "Emoji delete on empty slot, no-op"
                    );
                }
            }
        }

        let view = self.current_view(&transaction, user.id).await?;

        // Broadcast the fresh counts to challenge subscribers
        let event = RealtimeEvent::EmojiUpdated(EmojiUpdatedEvent {
            challenge_id: transaction.challenge_id,
            shared_transaction_id: transaction.id,
            good_count: view.good_count,
            soso_count: view.soso_count,
            bad_count: view.bad_count,
            timestamp: chrono::Utc::now(),
        });
        self.ctx.publisher().publish(&event).await.ok();

        Ok(view.into())
    }

    /// Recompute the aggregate view for one viewer from stored state
    pub(crate) async fn current_view(
        &self,
        transaction: &challet_core::entities::SharedTransaction,
        viewer_id: challet_core::Snowflake,
    ) -> ServiceResult<EmojiReactionView> {
        let counts = self.ctx.emoji_repo().count_by_type(transaction.id).await?;
        let user_emoji = self
            .ctx
            .emoji_repo()
            .find(transaction.id, viewer_id)
            .await?
            .map(|r| r.emoji);

        Ok(EmojiReactionView::from_counts(&counts, user_emoji))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestEnv;
    use challet_core::value_objects::{EmojiType, Snowflake};

    fn request(tx_id: i64, action: ActionType, emoji: EmojiType) -> EmojiActionRequest {
        EmojiActionRequest {
            shared_transaction_id: Snowflake::new(tx_id),
            action,
            emoji,
        }
    }

    #[tokio::test]
    async fn test_add_creates_slot_and_counts() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        let view = service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Good))
            .await
            .unwrap();

        assert_eq!(view.good_count, 1);
        assert_eq!(view.soso_count, 0);
        assert_eq!(view.emoji, Some(EmojiType::Good));
        assert_eq!(env.publisher.len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_existing_slot() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Good))
            .await
            .unwrap();
        let view = service
            .handle_action(
                "01011110000",
                &request(10, ActionType::Update, EmojiType::Bad),
            )
            .await
            .unwrap();

        assert_eq!(view.good_count, 0);
        assert_eq!(view.bad_count, 1);
        assert_eq!(view.emoji, Some(EmojiType::Bad));
    }

    #[tokio::test]
    async fn test_two_users_aggregate() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let u2 = env.seed_user(200, "01022220000", "u2").await;
        let challenge = env.seed_challenge(1, &[u1.id, u2.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Bad))
            .await
            .unwrap();
        let view = service
            .handle_action("01022220000", &request(10, ActionType::Add, EmojiType::Bad))
            .await
            .unwrap();

        assert_eq!(view.bad_count, 2);
        assert_eq!(view.emoji, Some(EmojiType::Bad));
    }

    #[tokio::test]
    async fn test_delete_clears_only_own_slot() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let u2 = env.seed_user(200, "01022220000", "u2").await;
        let challenge = env.seed_challenge(1, &[u1.id, u2.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Bad))
            .await
            .unwrap();
        service
            .handle_action("01022220000", &request(10, ActionType::Add, EmojiType::Bad))
            .await
            .unwrap();

        let view = service
            .handle_action(
                "01011110000",
                &request(10, ActionType::Delete, EmojiType::Bad),
            )
            .await
            .unwrap();

        assert_eq!(view.bad_count, 1);
        assert_eq!(view.emoji, None);
    }

    #[tokio::test]
    async fn test_update_on_empty_slot_is_noop() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        let view = service
            .handle_action(
                "01011110000",
                &request(10, ActionType::Update, EmojiType::Good),
            )
            .await
            .unwrap();

        assert_eq!(view.good_count, 0);
        assert_eq!(view.emoji, None);
    }

    #[tokio::test]
    async fn test_delete_on_empty_slot_is_noop() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        let view = service
            .handle_action(
                "01011110000",
                &request(10, ActionType::Delete, EmojiType::Good),
            )
            .await
            .unwrap();

        assert_eq!(view.good_count + view.soso_count + view.bad_count, 0);
    }

    #[tokio::test]
    async fn test_repeated_add_keeps_one_slot() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Good))
            .await
            .unwrap();
        let view = service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Soso))
            .await
            .unwrap();

        assert_eq!(view.good_count, 0);
        assert_eq!(view.soso_count, 1);
        assert_eq!(view.emoji, Some(EmojiType::Soso));
    }

    #[tokio::test]
    async fn test_unknown_transaction_fails() {
        let env = TestEnv::new();
        env.seed_user(100, "01011110000", "u1").await;

        let service = EmojiService::new(&env.ctx);
        let err = service
            .handle_action("01011110000", &request(99, ActionType::Add, EmojiType::Good))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert!(env.publisher.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_fails() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        let err = service
            .handle_action("01099990000", &request(10, ActionType::Add, EmojiType::Good))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_published_event_carries_fresh_counts() {
        let env = TestEnv::new();
        let u1 = env.seed_user(100, "01011110000", "u1").await;
        let challenge = env.seed_challenge(1, &[u1.id]).await;
        env.seed_transaction(10, challenge.id, u1.id).await;

        let service = EmojiService::new(&env.ctx);
        service
            .handle_action("01011110000", &request(10, ActionType::Add, EmojiType::Good))
            .await
            .unwrap();

        let events = env.publisher.published();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RealtimeEvent::EmojiUpdated(e) => {
                assert_eq!(e.challenge_id, challenge.id);
                assert_eq!(e.good_count, 1);
                assert_eq!(e.soso_count, 0);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(events[0].topic().name(), "challenge/1/emoji");
    }
}
