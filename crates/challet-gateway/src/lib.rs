//! # challet-gateway
//!
//! WebSocket gateway for the realtime challenge feed. Clients identify,
//! subscribe to challenge topics, and push transaction registrations and
//! emoji actions; the gateway fans resulting events out to every subscriber.

pub mod broadcast;
pub mod connection;
pub mod events;
pub mod handlers;
pub mod protocol;
pub mod server;

pub use server::run;
