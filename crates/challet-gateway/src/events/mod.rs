//! Gateway-originated dispatch events
//!
//! Domain events (`SHARED_TRANSACTION_REGISTERED`, `EMOJI_UPDATED`,
//! `COMMENT_CREATED`) are defined in challet-core and arrive through the
//! pub/sub backbone. The gateway itself only originates the READY event
//! sent after a successful Identify.

use challet_core::{Snowflake, User};
use serde::{Deserialize, Serialize};

/// Event type name for the READY dispatch
pub const READY_EVENT: &str = "READY";

/// Sent after a successful Identify
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyEvent {
    /// Protocol version
    pub v: u8,

    /// The identified user
    pub user: UserPayload,

    /// Session ID assigned to this connection
    pub session_id: String,
}

/// User summary carried in the READY event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Snowflake,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl UserPayload {
    /// Build from a domain user
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}
