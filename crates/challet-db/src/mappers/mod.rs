//! Entity to model mappers
//!
//! This module provides conversions between domain entities (challet-core)
//! and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//!   (`TryFrom` where a stored string must parse into a domain enum)
//! - helper functions for enum <-> column representations

mod challenge;
mod comment;
mod emoji;
mod shared_transaction;
mod user;

pub use challenge::{challenge_status_from_str, challenge_status_to_str};
