//! Shared transaction handlers
//!
//! Detail view and the comment thread under one shared transaction.

use axum::{
    extract::{Path, State},
    Json,
};
use challet_service::{
    CommentListResponse, CommentRequest, CommentResponse, CommentService,
    SharedTransactionService, TransactionDetailResponse,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Get shared transaction detail
///
/// GET /shared-transactions/{transaction_id}
pub async fn get_detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
) -> ApiResult<Json<TransactionDetailResponse>> {
    let transaction_id = transaction_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid transaction_id format"))?;

    let service = SharedTransactionService::new(state.service_context());
    let detail = service
        .get_detail(&auth.phone_number, transaction_id)
        .await?;
    Ok(Json(detail))
}

/// List comments on a shared transaction, oldest first
///
/// GET /shared-transactions/{transaction_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let transaction_id = transaction_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid transaction_id format"))?;

    let service = CommentService::new(state.service_context());
    let comments = service.list(&auth.phone_number, transaction_id).await?;
    Ok(Json(comments))
}

/// Append a comment to a shared transaction
///
/// POST /shared-transactions/{transaction_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let transaction_id = transaction_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid transaction_id format"))?;

    let service = CommentService::new(state.service_context());
    let comment = service
        .append(&auth.phone_number, transaction_id, &request)
        .await?;
    Ok(Created(Json(comment)))
}
