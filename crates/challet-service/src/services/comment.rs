//! Comment service
//!
//! Append-only comment thread under a shared transaction. The only
//! mutation is append, so the stored id order is also creation order.

use tracing::{info, instrument};
use validator::Validate;

use challet_core::entities::{Comment, MAX_COMMENT_LENGTH};
use challet_core::events::{CommentCreatedEvent, RealtimeEvent};
use challet_core::{DomainError, Snowflake};

use crate::dto::{CommentListResponse, CommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on a shared transaction, oldest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        phone_number: &str,
        shared_transaction_id: Snowflake,
    ) -> ServiceResult<CommentListResponse> {
        self.resolve_user(phone_number).await?;

        if self
            .ctx
            .transaction_repo()
            .find_by_id(shared_transaction_id)
            .await?
            .is_none()
        {
            return Err(DomainError::SharedTransactionNotFound(shared_transaction_id).into());
        }

        let comments = self
            .ctx
            .comment_repo()
            .list_by_transaction(shared_transaction_id)
            .await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in &comments {
            let Some(author) = self.ctx.user_repo().find_by_id(comment.user_id).await? else {
                continue;
            };
            responses.push(CommentResponse::new(comment, &author));
        }

        let count = responses.len() as i64;
        Ok(CommentListResponse {
            comments: responses,
            count,
        })
    }

    /// Append a comment and broadcast it to challenge subscribers
    #[instrument(skip(self, request))]
    pub async fn append(
        &self,
        phone_number: &str,
        shared_transaction_id: Snowflake,
        request: &CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let content = request.content.trim();
        if content.is_empty() {
            return Err(DomainError::ValidationError("comment must not be empty".to_string()).into());
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            }
            .into());
        }

        let user = self.resolve_user(phone_number).await?;

        let transaction = self
            .ctx
            .transaction_repo()
            .find_by_id(shared_transaction_id)
            .await?
            .ok_or(DomainError::SharedTransactionNotFound(shared_transaction_id))?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            transaction.id,
            user.id,
            content.to_string(),
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            shared_transaction_id = %transaction.id,
            user_id = %user.id,
            "Comment created"
        );

        let event = RealtimeEvent::CommentCreated(CommentCreatedEvent {
            challenge_id: transaction.challenge_id,
            shared_transaction_id: transaction.id,
            comment_id: comment.id,
            user_id: user.id,
            nickname: user.nickname.clone(),
            content: comment.content.clone(),
            timestamp: comment.created_at,
        });
        self.ctx.publisher().publish(&event).await.ok();

        Ok(CommentResponse::new(&comment, &user))
    }

    async fn resolve_user(&self, phone_number: &str) -> ServiceResult<challet_core::entities::User> {
        self.ctx
            .user_repo()
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(phone_number.to_string()).into())
    }
}
