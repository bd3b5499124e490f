//! Session identifiers
//!
//! Each WebSocket connection gets a unique session ID for the lifetime of
//! the socket. Sessions are not resumable; a reconnecting client identifies
//! and re-subscribes from scratch.

/// Session helper for WebSocket connections
pub struct Session;

impl Session {
    /// Generate a new session ID
    #[must_use]
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
