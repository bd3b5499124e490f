//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{challenges, emoji, health, shared_transactions};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass auth)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(shared_transaction_routes())
        .merge(challenge_routes())
}

/// Shared transaction routes
fn shared_transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shared-transactions/:transaction_id",
            get(shared_transactions::get_detail),
        )
        .route(
            "/shared-transactions/:transaction_id/comments",
            get(shared_transactions::get_comments),
        )
        .route(
            "/shared-transactions/:transaction_id/comments",
            post(shared_transactions::create_comment),
        )
        .route(
            "/shared-transactions/:transaction_id/emoji",
            post(emoji::add_emoji),
        )
        .route(
            "/shared-transactions/:transaction_id/emoji",
            patch(emoji::update_emoji),
        )
        .route(
            "/shared-transactions/:transaction_id/emoji",
            delete(emoji::delete_emoji),
        )
}

/// Challenge feed routes
fn challenge_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/challenges/:challenge_id/shared-transactions",
            post(challenges::register_transaction),
        )
        .route(
            "/challenges/:challenge_id/shared-transactions",
            get(challenges::list_transactions),
        )
}
