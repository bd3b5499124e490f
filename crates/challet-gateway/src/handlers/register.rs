//! RegisterTransaction handler (op 6)
//!
//! Registers a shared transaction over the push channel. The payload carries
//! its own credential; an invalid credential drops the message before any
//! domain operation runs, so nothing is published.

use super::{resolve_credential, HandlerResult};
use crate::connection::Connection;
use crate::protocol::{CloseCode, RegisterTransactionPayload};
use crate::server::GatewayState;
use challet_service::{RegisterTransactionRequest, SharedTransactionService};
use std::sync::Arc;

/// Handles RegisterTransaction messages
pub struct RegisterTransactionHandler;

impl RegisterTransactionHandler {
    /// Handle a RegisterTransaction message
    pub async fn handle(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: RegisterTransactionPayload,
    ) -> HandlerResult<Option<CloseCode>> {
        // Fails closed: no valid credential, no domain operation
        let Some(phone_number) = resolve_credential(state, connection, &payload.token) else {
            return Ok(None);
        };

        let request = RegisterTransactionRequest {
            deposit: payload.deposit,
            transaction_amount: payload.transaction_amount,
            content: payload.content,
            image: payload.image,
        };

        let service = SharedTransactionService::new(state.service_context());
        match service
            .register(&phone_number, payload.challenge_id, &request)
            .await
        {
            Ok(response) => {
                tracing::info!(
                    session_id = %connection.session_id(),
                    challenge_id = %payload.challenge_id,
                    shared_transaction_id = %response.id,
                    "Transaction registered via push channel"
                );
            }
            Err(e) => {
                // Scoped to this message; the broadcast never happened
                tracing::warn!(
                    session_id = %connection.session_id(),
                    challenge_id = %payload.challenge_id,
                    error = %e,
                    "Push registration dropped"
                );
            }
        }

        Ok(None)
    }
}
