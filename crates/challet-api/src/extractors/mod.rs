//! Request extractors for handlers

pub mod auth;

pub use auth::AuthUser;
