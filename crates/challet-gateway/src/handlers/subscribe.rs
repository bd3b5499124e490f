//! Challenge subscription handlers (op 3 / op 4)
//!
//! Subscribing attaches the connection to both of a challenge's topics
//! (shared-transactions and emoji) and registers interest with the Redis
//! subscriber so this gateway node receives the challenge's events.

use super::{HandlerError, HandlerResult};
use crate::connection::Connection;
use crate::protocol::{ChallengeSubscriptionPayload, CloseCode};
use crate::server::GatewayState;
use std::sync::Arc;

/// Handles SubscribeChallenge and UnsubscribeChallenge messages
pub struct SubscribeHandler;

impl SubscribeHandler {
    /// Handle a SubscribeChallenge message
    pub async fn handle_subscribe(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: ChallengeSubscriptionPayload,
    ) -> HandlerResult<Option<CloseCode>> {
        let Some(user_id) = connection.user_id().await else {
            return Ok(Some(CloseCode::NotAuthenticated));
        };

        let challenge_id = payload.challenge_id;

        // Only members can listen to a challenge's feed
        let challenge = state
            .service_context()
            .challenge_repo()
            .find_by_id(challenge_id)
            .await?;

        if challenge.is_none() {
            tracing::debug!(
                session_id = %connection.session_id(),
                challenge_id = %challenge_id,
                "Subscribe to unknown challenge ignored"
            );
            return Ok(None);
        }

        let is_member = state
            .service_context()
            .challenge_repo()
            .is_member(challenge_id, user_id)
            .await?;

        if !is_member {
            tracing::warn!(
                session_id = %connection.session_id(),
                user_id = %user_id,
                challenge_id = %challenge_id,
                "Non-member tried to subscribe to challenge"
            );
            return Ok(None);
        }

        state
            .connection_manager()
            .subscribe_to_challenge(connection.session_id(), challenge_id)
            .await;

        // Register interest with the pub/sub backbone
        state
            .event_dispatcher()
            .subscribe_challenge(challenge_id)
            .await
            .map_err(HandlerError::SubscriberError)?;

        tracing::info!(
            session_id = %connection.session_id(),
            user_id = %user_id,
            challenge_id = %challenge_id,
            "Subscribed to challenge topics"
        );

        Ok(None)
    }

    /// Handle an UnsubscribeChallenge message
    pub async fn handle_unsubscribe(
        state: &GatewayState,
        connection: &Arc<Connection>,
        payload: ChallengeSubscriptionPayload,
    ) -> HandlerResult<Option<CloseCode>> {
        if !connection.is_authenticated().await {
            return Ok(Some(CloseCode::NotAuthenticated));
        }

        let challenge_id = payload.challenge_id;

        state
            .connection_manager()
            .unsubscribe_from_challenge(connection.session_id(), challenge_id)
            .await;

        // Drop the Redis subscription only when no local connection still
        // listens to this challenge.
        if state
            .connection_manager()
            .get_challenge_connections(challenge_id)
            .is_empty()
        {
            state
                .event_dispatcher()
                .unsubscribe_challenge(challenge_id)
                .await
                .map_err(HandlerError::SubscriberError)?;
        }

        tracing::info!(
            session_id = %connection.session_id(),
            challenge_id = %challenge_id,
            "Unsubscribed from challenge topics"
        );

        Ok(None)
    }
}
