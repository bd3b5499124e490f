//! Op code handlers
//!
//! Handles incoming WebSocket messages based on their operation code.

mod emoji;
mod error;
mod heartbeat;
mod identify;
mod register;
mod subscribe;

pub use emoji::EmojiActionHandler;
pub use error::{HandlerError, HandlerResult};
pub use heartbeat::HeartbeatHandler;
pub use identify::IdentifyHandler;
pub use register::RegisterTransactionHandler;
pub use subscribe::SubscribeHandler;

use crate::connection::Connection;
use crate::protocol::{CloseCode, GatewayMessage, OpCode};
use crate::server::GatewayState;
use std::sync::Arc;

/// Validate the per-message credential carried by a push operation.
///
/// Returns the caller's phone number, or None if the credential is missing
/// or invalid. The caller must drop the message in the None case so it never
/// reaches a domain operation or the broadcaster.
pub(crate) fn resolve_credential(
    state: &GatewayState,
    connection: &Arc<Connection>,
    token: &str,
) -> Option<String> {
    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    match state
        .service_context()
        .jwt_service()
        .validate_access_token(token)
    {
        Ok(claims) => Some(claims.phone_number().to_string()),
        Err(e) => {
            tracing::warn!(
                session_id = %connection.session_id(),
                error = %e,
                "Push message dropped: invalid credential"
            );
            None
        }
    }
}

/// Dispatch incoming client messages to appropriate handlers
pub struct MessageDispatcher;

impl MessageDispatcher {
    /// Handle an incoming client message
    pub async fn dispatch(
        state: &GatewayState,
        connection: &Arc<Connection>,
        message: GatewayMessage,
    ) -> HandlerResult<Option<CloseCode>> {
        // Validate that this is a client-sendable op code
        if !message.op.is_client_op() {
            tracing::warn!(
                session_id = %connection.session_id(),
                op = %message.op,
                "Received server-only op code from client"
            );
            return Ok(Some(CloseCode::UnknownOpcode));
        }

        match message.op {
            OpCode::Identify => {
                let payload = message.as_identify().ok_or_else(|| {
                    HandlerError::InvalidPayload("Invalid Identify payload".to_string())
                })?;

                IdentifyHandler::handle(state, connection, payload).await
            }
            OpCode::Heartbeat => {
                let seq = message.as_heartbeat_seq().ok_or_else(|| {
                    HandlerError::InvalidPayload("Invalid Heartbeat payload".to_string())
                })?;

                HeartbeatHandler::handle(connection, seq).await
            }
            OpCode::SubscribeChallenge => {
                let payload = message.as_challenge_subscription().ok_or_else(|| {
                    HandlerError::InvalidPayload("Invalid SubscribeChallenge payload".to_string())
                })?;

                SubscribeHandler::handle_subscribe(state, connection, payload).await
            }
            OpCode::UnsubscribeChallenge => {
                let payload = message.as_challenge_subscription().ok_or_else(|| {
                    HandlerError::InvalidPayload("Invalid UnsubscribeChallenge payload".to_string())
                })?;

                SubscribeHandler::handle_unsubscribe(state, connection, payload).await
            }
            OpCode::RegisterTransaction => {
                let payload = message.as_register_transaction().ok_or_else(|| {
                    HandlerError::InvalidPayload("Invalid RegisterTransaction payload".to_string())
                })?;

                RegisterTransactionHandler::handle(state, connection, payload).await
            }
            OpCode::EmojiAction => {
                let payload = message.as_emoji_action().ok_or_else(|| {
                    HandlerError::InvalidPayload("Invalid EmojiAction payload".to_string())
                })?;

                EmojiActionHandler::handle(state, connection, payload).await
            }
            // These ops should never reach here due to is_client_op check
            _ => {
                tracing::error!(op = %message.op, "Unhandled client op code");
                Ok(Some(CloseCode::UnknownOpcode))
            }
        }
    }
}
