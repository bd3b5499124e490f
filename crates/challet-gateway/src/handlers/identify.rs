//! Identify handler (op 2)

use super::{HandlerError, HandlerResult};
use crate::connection::Connection;
use crate::events::{ReadyEvent, UserPayload, READY_EVENT};
use crate::protocol::{CloseCode, GatewayMessage, IdentifyPayload};
use crate::server::GatewayState;
use std::sync::Arc;

/// Handles Identify messages
pub struct IdentifyHandler;

impl IdentifyHandler {
    /// Handle an Identify message
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: IdentifyPayload,
    ) -> HandlerResult<Option<CloseCode>> {
        // Check if already authenticated
        if connection.is_authenticated().await {
            tracing::warn!(
                session_id = %connection.session_id(),
                "Client sent Identify while already authenticated"
            );
            return Ok(Some(CloseCode::AlreadyAuthenticated));
        }

        // Extract token (remove "Bearer " prefix if present)
        let token = payload.token.strip_prefix("Bearer ").unwrap_or(&payload.token);

        // Validate the token
        let claims = state
            .service_context()
            .jwt_service()
            .validate_access_token(token)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token validation failed");
                HandlerError::AuthenticationFailed(e.to_string())
            })?;

        // Resolve the user behind the credential
        let user = state
            .service_context()
            .user_repo()
            .find_by_phone(claims.phone_number())
            .await?
            .ok_or_else(|| HandlerError::AuthenticationFailed("User not found".to_string()))?;

        // Authenticate the connection
        let session_id = connection.session_id().to_string();
        state
            .connection_manager()
            .authenticate_connection(&session_id, user.id)
            .await;

        // Build and send READY event
        let ready = ReadyEvent {
            v: 1,
            user: UserPayload::from_user(&user),
            session_id: session_id.clone(),
        };

        let ready_data = serde_json::to_value(&ready).unwrap_or_default();
        let seq = connection.next_sequence();

        connection
            .send(GatewayMessage::dispatch(READY_EVENT, seq, ready_data))
            .await
            .map_err(|e| HandlerError::Internal(format!("Failed to send READY: {e}")))?;

        tracing::info!(
            session_id = %session_id,
            user_id = %user.id,
            nickname = %user.nickname,
            "Client identified"
        );

        Ok(None)
    }
}
