//! EmojiAction handler (op 7)
//!
//! Applies an emoji reaction action over the push channel. Like transaction
//! registration, each message carries its own credential and fails closed.

use super::{resolve_credential, HandlerResult};
use crate::connection::Connection;
use crate::protocol::{CloseCode, EmojiActionPayload};
use crate::server::GatewayState;
use challet_service::{EmojiActionRequest, EmojiService};
use std::sync::Arc;

/// Handles EmojiAction messages
pub struct EmojiActionHandler;

impl EmojiActionHandler {
    /// Handle an EmojiAction message
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: EmojiActionPayload,
    ) -> HandlerResult<Option<CloseCode>> {
        // Fails closed: no valid credential, no domain operation
        let Some(phone_number) = resolve_credential(state, connection, &payload.token) else {
            return Ok(None);
        };

        let request = EmojiActionRequest {
            shared_transaction_id: payload.shared_transaction_id,
            action: payload.action,
            emoji: payload.emoji,
        };

        let service = EmojiService::new(state.service_context());
        match service.handle_action(&phone_number, &request).await {
            Ok(view) => {
                tracing::debug!(
                    session_id = %connection.session_id(),
                    shared_transaction_id = %payload.shared_transaction_id,
                    action = ?payload.action,
                    good = view.good_count,
                    soso = view.soso_count,
                    bad = view.bad_count,
                    "Emoji action applied via push channel"
                );
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %connection.session_id(),
                    shared_transaction_id = %payload.shared_transaction_id,
                    error = %e,
                    "Push emoji action dropped"
                );
            }
        }

        Ok(None)
    }
}
