//! HTTP handlers organized by domain

pub mod challenges;
pub mod emoji;
pub mod health;
pub mod shared_transactions;
