//! Challenge feed handlers
//!
//! Registration into a challenge and the cursor-paged feed.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use challet_core::Snowflake;
use challet_service::{
    RegisterTransactionRequest, RegisterTransactionResponse, SharedTransactionService,
    TransactionListResponse,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Query parameters for feed pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    /// Exclusive cursor: only transactions older than this ID
    pub cursor: Option<String>,
    /// Page size, clamped server-side
    pub limit: Option<i64>,
}

/// Register a shared transaction into a challenge
///
/// POST /challenges/{challenge_id}/shared-transactions
pub async fn register_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(challenge_id): Path<String>,
    Json(request): Json<RegisterTransactionRequest>,
) -> ApiResult<Created<Json<RegisterTransactionResponse>>> {
    let challenge_id = challenge_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid challenge_id format"))?;

    let service = SharedTransactionService::new(state.service_context());
    let response = service
        .register(&auth.phone_number, challenge_id, &request)
        .await?;
    Ok(Created(Json(response)))
}

/// List shared transactions in a challenge, newest first
///
/// GET /challenges/{challenge_id}/shared-transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(challenge_id): Path<String>,
    Query(query): Query<FeedQuery>,
) -> ApiResult<Json<TransactionListResponse>> {
    let challenge_id = challenge_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid challenge_id format"))?;

    let cursor = query
        .cursor
        .map(|s| s.parse::<Snowflake>())
        .transpose()
        .map_err(|_| ApiError::invalid_query("Invalid cursor format"))?;

    let service = SharedTransactionService::new(state.service_context());
    let page = service
        .list(&auth.phone_number, challenge_id, cursor, query.limit)
        .await?;
    Ok(Json(page))
}
