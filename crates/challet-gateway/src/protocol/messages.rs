//! Gateway message format
//!
//! Defines the structure for all WebSocket messages.

use super::{
    ChallengeSubscriptionPayload, CloseCode, EmojiActionPayload, HelloPayload, IdentifyPayload,
    OpCode, RegisterTransactionPayload,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gateway message format
///
/// All messages sent over the WebSocket connection follow this format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayMessage {
    /// Operation code
    pub op: OpCode,

    /// Event type (only for op=0 Dispatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,

    /// Sequence number (only for op=0 Dispatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,

    /// Event data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<Value>,
}

impl GatewayMessage {
    // === Server Messages ===

    /// Create a Dispatch message (op=0)
    #[must_use]
    pub fn dispatch(event_type: impl Into<String>, sequence: u64, data: Value) -> Self {
        Self {
            op: OpCode::Dispatch,
            t: Some(event_type.into()),
            s: Some(sequence),
            d: Some(data),
        }
    }

    /// Create a Hello message (op=10)
    #[must_use]
    pub fn hello(payload: HelloPayload) -> Self {
        Self {
            op: OpCode::Hello,
            t: None,
            s: None,
            d: Some(serde_json::to_value(payload).unwrap_or_default()),
        }
    }

    /// Create a Hello message with default heartbeat interval
    #[must_use]
    pub fn hello_default() -> Self {
        Self::hello(HelloPayload::new())
    }

    /// Create a Heartbeat ACK message (op=11)
    #[must_use]
    pub fn heartbeat_ack() -> Self {
        Self {
            op: OpCode::HeartbeatAck,
            t: None,
            s: None,
            d: None,
        }
    }

    // === Parsing Client Messages ===

    /// Try to parse as an Identify payload (op=2)
    pub fn as_identify(&self) -> Option<IdentifyPayload> {
        if self.op != OpCode::Identify {
            return None;
        }
        self.d.as_ref().and_then(|d| serde_json::from_value(d.clone()).ok())
    }

    /// Try to parse as a challenge subscription payload (op=3 or op=4)
    pub fn as_challenge_subscription(&self) -> Option<ChallengeSubscriptionPayload> {
        if self.op != OpCode::SubscribeChallenge && self.op != OpCode::UnsubscribeChallenge {
            return None;
        }
        self.d.as_ref().and_then(|d| serde_json::from_value(d.clone()).ok())
    }

    /// Try to parse as a RegisterTransaction payload (op=6)
    pub fn as_register_transaction(&self) -> Option<RegisterTransactionPayload> {
        if self.op != OpCode::RegisterTransaction {
            return None;
        }
        self.d.as_ref().and_then(|d| serde_json::from_value(d.clone()).ok())
    }

    /// Try to parse as an EmojiAction payload (op=7)
    pub fn as_emoji_action(&self) -> Option<EmojiActionPayload> {
        if self.op != OpCode::EmojiAction {
            return None;
        }
        self.d.as_ref().and_then(|d| serde_json::from_value(d.clone()).ok())
    }

    /// Try to parse the heartbeat sequence number (op=1)
    pub fn as_heartbeat_seq(&self) -> Option<Option<u64>> {
        if self.op != OpCode::Heartbeat {
            return None;
        }
        Some(self.d.as_ref().and_then(|d| d.as_u64()))
    }

    // === Utilities ===

    /// Check if this is a valid client message
    #[must_use]
    pub fn is_valid_client_message(&self) -> bool {
        self.op.is_client_op()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create an error close frame
    #[must_use]
    pub fn close_frame(code: CloseCode) -> (u16, String) {
        (code.as_u16(), code.description().to_string())
    }
}

impl std::fmt::Display for GatewayMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(t) = &self.t {
            write!(f, "GatewayMessage(op={}, t={}", self.op, t)?;
            if let Some(s) = self.s {
                write!(f, ", s={s}")?;
            }
            write!(f, ")")
        } else {
            write!(f, "GatewayMessage(op={})", self.op)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challet_core::{ActionType, EmojiType, Snowflake};

    #[test]
    fn test_dispatch_message() {
        let msg = GatewayMessage::dispatch(
            "EMOJI_UPDATED",
            42,
            serde_json::json!({"sharedTransactionId": "12345", "goodCount": 3}),
        );

        assert_eq!(msg.op, OpCode::Dispatch);
        assert_eq!(msg.t, Some("EMOJI_UPDATED".to_string()));
        assert_eq!(msg.s, Some(42));
        assert!(msg.d.is_some());
    }

    #[test]
    fn test_hello_message() {
        let msg = GatewayMessage::hello_default();
        assert_eq!(msg.op, OpCode::Hello);

        let json = msg.to_json().unwrap();
        assert!(json.contains("45000"));
    }

    #[test]
    fn test_heartbeat_ack_message() {
        let msg = GatewayMessage::heartbeat_ack();
        assert_eq!(msg.op, OpCode::HeartbeatAck);
        assert!(msg.t.is_none());
        assert!(msg.s.is_none());
        assert!(msg.d.is_none());
    }

    #[test]
    fn test_parse_identify() {
        let msg = GatewayMessage {
            op: OpCode::Identify,
            t: None,
            s: None,
            d: Some(serde_json::json!({"token": "Bearer xyz"})),
        };

        let identify = msg.as_identify().unwrap();
        assert_eq!(identify.token, "Bearer xyz");
    }

    #[test]
    fn test_parse_emoji_action() {
        let msg = GatewayMessage {
            op: OpCode::EmojiAction,
            t: None,
            s: None,
            d: Some(serde_json::json!({
                "token": "Bearer xyz",
                "sharedTransactionId": "42",
                "action": "UPDATE",
                "type": "BAD"
            })),
        };

        let payload = msg.as_emoji_action().unwrap();
        assert_eq!(payload.shared_transaction_id, Snowflake::from(42i64));
        assert_eq!(payload.action, ActionType::Update);
        assert_eq!(payload.emoji, EmojiType::Bad);

        // Wrong op returns None
        let wrong = GatewayMessage {
            op: OpCode::Identify,
            ..msg
        };
        assert!(wrong.as_emoji_action().is_none());
    }

    #[test]
    fn test_parse_challenge_subscription() {
        let subscribe = GatewayMessage {
            op: OpCode::SubscribeChallenge,
            t: None,
            s: None,
            d: Some(serde_json::json!({"challengeId": "7"})),
        };
        assert_eq!(
            subscribe.as_challenge_subscription().unwrap().challenge_id,
            Snowflake::from(7i64)
        );

        let unsubscribe = GatewayMessage {
            op: OpCode::UnsubscribeChallenge,
            ..subscribe.clone()
        };
        assert!(unsubscribe.as_challenge_subscription().is_some());
    }

    #[test]
    fn test_parse_heartbeat() {
        let msg = GatewayMessage {
            op: OpCode::Heartbeat,
            t: None,
            s: None,
            d: Some(Value::Number(41.into())),
        };

        let seq = msg.as_heartbeat_seq().unwrap();
        assert_eq!(seq, Some(41));

        let msg_null = GatewayMessage {
            op: OpCode::Heartbeat,
            t: None,
            s: None,
            d: None,
        };
        let seq_null = msg_null.as_heartbeat_seq().unwrap();
        assert_eq!(seq_null, None);
    }

    #[test]
    fn test_message_roundtrip() {
        let msg = GatewayMessage::dispatch("READY", 1, serde_json::json!({"v": 1}));
        let json = msg.to_json().unwrap();
        let parsed = GatewayMessage::from_json(&json).unwrap();

        assert_eq!(parsed.op, msg.op);
        assert_eq!(parsed.t, msg.t);
        assert_eq!(parsed.s, msg.s);
    }

    #[test]
    fn test_close_frame() {
        let (code, desc) = GatewayMessage::close_frame(CloseCode::AuthenticationFailed);
        assert_eq!(code, 4004);
        assert!(desc.contains("Authentication"));
    }

    #[test]
    fn test_message_display() {
        let dispatch = GatewayMessage::dispatch("COMMENT_CREATED", 5, serde_json::json!({}));
        let display = format!("{}", dispatch);
        assert!(display.contains("COMMENT_CREATED"));
        assert!(display.contains("s=5"));
    }
}
