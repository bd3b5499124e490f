//! Gateway wire protocol
//!
//! Message envelope, op codes, close codes and client payloads.

mod close_codes;
mod messages;
mod opcodes;
mod payloads;

pub use close_codes::CloseCode;
pub use messages::GatewayMessage;
pub use opcodes::OpCode;
pub use payloads::{
    ChallengeSubscriptionPayload, EmojiActionPayload, HelloPayload, IdentifyPayload,
    RegisterTransactionPayload,
};
