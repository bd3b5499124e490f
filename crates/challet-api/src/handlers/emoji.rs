//! Emoji reaction handlers
//!
//! REST alternates to the push channel. All three verbs route through
//! the same reaction engine as the gateway, so both surfaces observe
//! one invariant.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use challet_core::value_objects::{ActionType, EmojiType};
use challet_service::{EmojiActionRequest, EmojiReactionResponse, EmojiService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Emoji type carried in the request body
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiBody {
    #[serde(rename = "type")]
    pub emoji: EmojiType,
}

/// Add an emoji reaction
///
/// POST /shared-transactions/{transaction_id}/emoji
pub async fn add_emoji(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
    Json(body): Json<EmojiBody>,
) -> ApiResult<Json<EmojiReactionResponse>> {
    apply(state, auth, &transaction_id, ActionType::Add, body.emoji).await
}

/// Change an existing emoji reaction
///
/// PATCH /shared-transactions/{transaction_id}/emoji
pub async fn update_emoji(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
    Json(body): Json<EmojiBody>,
) -> ApiResult<Json<EmojiReactionResponse>> {
    apply(state, auth, &transaction_id, ActionType::Update, body.emoji).await
}

/// Remove an emoji reaction
///
/// DELETE /shared-transactions/{transaction_id}/emoji
pub async fn delete_emoji(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(transaction_id): Path<String>,
) -> ApiResult<Json<EmojiReactionResponse>> {
    // The engine ignores the emoji type on DELETE
    apply(
        state,
        auth,
        &transaction_id,
        ActionType::Delete,
        EmojiType::Good,
    )
    .await
}

async fn apply(
    state: AppState,
    auth: AuthUser,
    transaction_id: &str,
    action: ActionType,
    emoji: EmojiType,
) -> ApiResult<Json<EmojiReactionResponse>> {
    let shared_transaction_id = transaction_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid transaction_id format"))?;

    let request = EmojiActionRequest {
        shared_transaction_id,
        action,
        emoji,
    };

    let service = EmojiService::new(state.service_context());
    let view = service.handle_action(&auth.phone_number, &request).await?;
    Ok(Json(view))
}
