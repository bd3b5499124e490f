//! API Integration Tests
//!
//! End-to-end tests against a real HTTP server backed by in-memory
//! repositories, so no PostgreSQL or Redis instance is needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Shared Transaction Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_transaction() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let token = server.token_for("01011110000");

    let response = server
        .post_auth(
            &format!("/api/v1/challenges/{}/shared-transactions", challenge.id),
            &token,
            &RegisterTransactionBody::coffee(),
        )
        .await
        .unwrap();
    let created: RegisterTransactionBodyResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!created.id.is_empty());

    // The registration must reach the broadcaster
    let events = server.publisher.published();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), "SHARED_TRANSACTION_REGISTERED");
}

#[tokio::test]
async fn test_register_requires_membership() {
    let server = TestServer::start().await.expect("Failed to start server");
    let member = server.seed_user(100, "01011110000", "u1").await;
    server.seed_user(200, "01022220000", "outsider").await;
    let challenge = server.seed_challenge(1, &[member.id]).await;
    let token = server.token_for("01022220000");

    let response = server
        .post_auth(
            &format!("/api/v1/challenges/{}/shared-transactions", challenge.id),
            &token,
            &RegisterTransactionBody::coffee(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(error.error.code, "NOT_CHALLENGE_MEMBER");
    assert!(server.publisher.is_empty());
}

#[tokio::test]
async fn test_register_unknown_challenge() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.seed_user(100, "01011110000", "u1").await;
    let token = server.token_for("01011110000");

    let response = server
        .post_auth(
            "/api/v1/challenges/77/shared-transactions",
            &token,
            &RegisterTransactionBody::coffee(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_CHALLENGE");
}

#[tokio::test]
async fn test_register_rejects_invalid_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let token = server.token_for("01011110000");

    let body = RegisterTransactionBody {
        deposit: String::new(),
        transaction_amount: -1,
        content: String::new(),
        image: None,
    };
    let response = server
        .post_auth(
            &format!("/api/v1/challenges/{}/shared-transactions", challenge.id),
            &token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_requires_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/v1/challenges/1/shared-transactions",
            &RegisterTransactionBody::coffee(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_rejects_garbage_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_auth(
            "/api/v1/challenges/1/shared-transactions",
            "not-a-jwt",
            &RegisterTransactionBody::coffee(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_pages_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    for id in 10..=14 {
        server.seed_transaction(id, challenge.id, user.id).await;
    }
    let token = server.token_for("01011110000");

    let response = server
        .get_auth(
            &format!(
                "/api/v1/challenges/{}/shared-transactions?limit=3",
                challenge.id
            ),
            &token,
        )
        .await
        .unwrap();
    let page: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.history.len(), 3);
    assert!(page.has_next_page);
    assert_eq!(page.history[0].id, "14");
    assert_eq!(page.history[2].id, "12");

    // Continue from the cursor
    let response = server
        .get_auth(
            &format!(
                "/api/v1/challenges/{}/shared-transactions?limit=3&cursor=12",
                challenge.id
            ),
            &token,
        )
        .await
        .unwrap();
    let rest: FeedResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rest.history.len(), 2);
    assert!(!rest.has_next_page);
    assert_eq!(rest.history[0].id, "11");
}

#[tokio::test]
async fn test_feed_requires_membership() {
    let server = TestServer::start().await.expect("Failed to start server");
    let member = server.seed_user(100, "01011110000", "u1").await;
    server.seed_user(200, "01022220000", "outsider").await;
    let challenge = server.seed_challenge(1, &[member.id]).await;
    let token = server.token_for("01022220000");

    let response = server
        .get_auth(
            &format!("/api/v1/challenges/{}/shared-transactions", challenge.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_feed_rejects_bad_cursor() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let token = server.token_for("01011110000");

    let response = server
        .get_auth(
            &format!(
                "/api/v1/challenges/{}/shared-transactions?cursor=abc",
                challenge.id
            ),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Detail Tests
// ============================================================================

#[tokio::test]
async fn test_transaction_detail() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let tx = server.seed_transaction(10, challenge.id, user.id).await;
    let token = server.token_for("01011110000");

    let response = server
        .get_auth(&format!("/api/v1/shared-transactions/{}", tx.id), &token)
        .await
        .unwrap();
    let detail: TransactionDetailBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.id, tx.id.to_string());
    assert_eq!(detail.challenge_id, challenge.id.to_string());
    assert_eq!(detail.nickname, "u1");
    assert_eq!(detail.deposit, "스타벅스");
    assert_eq!(detail.transaction_amount, 5_500);
    assert_eq!(detail.good_count, 0);
    assert_eq!(detail.comment_count, 0);
    assert!(detail.emoji.is_none());
}

#[tokio::test]
async fn test_transaction_detail_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.seed_user(100, "01011110000", "u1").await;
    let token = server.token_for("01011110000");

    let response = server
        .get_auth("/api/v1/shared-transactions/404", &token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_SHARED_TRANSACTION");
}

// ============================================================================
// Emoji Tests
// ============================================================================

#[tokio::test]
async fn test_emoji_add_update_delete_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let tx = server.seed_transaction(10, challenge.id, user.id).await;
    let token = server.token_for("01011110000");
    let path = format!("/api/v1/shared-transactions/{}/emoji", tx.id);

    // ADD
    let response = server
        .post_auth(&path, &token, &EmojiBody::good())
        .await
        .unwrap();
    let view: EmojiReactionBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.good_count, 1);
    assert_eq!(view.emoji.as_deref(), Some("GOOD"));

    // UPDATE to a different emoji
    let response = server
        .patch_auth(&path, &token, &EmojiBody::bad())
        .await
        .unwrap();
    let view: EmojiReactionBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.good_count, 0);
    assert_eq!(view.bad_count, 1);
    assert_eq!(view.emoji.as_deref(), Some("BAD"));

    // DELETE clears the slot
    let response = server.delete_auth(&path, &token).await.unwrap();
    let view: EmojiReactionBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.bad_count, 0);
    assert!(view.emoji.is_none());

    // One event per action
    assert_eq!(server.publisher.len(), 3);
}

#[tokio::test]
async fn test_emoji_aggregates_across_users() {
    let server = TestServer::start().await.expect("Failed to start server");
    let u1 = server.seed_user(100, "01011110000", "u1").await;
    let u2 = server.seed_user(200, "01022220000", "u2").await;
    let challenge = server.seed_challenge(1, &[u1.id, u2.id]).await;
    let tx = server.seed_transaction(10, challenge.id, u1.id).await;
    let path = format!("/api/v1/shared-transactions/{}/emoji", tx.id);

    let token1 = server.token_for("01011110000");
    let token2 = server.token_for("01022220000");

    server
        .post_auth(&path, &token1, &EmojiBody::soso())
        .await
        .unwrap();
    let response = server
        .post_auth(&path, &token2, &EmojiBody::good())
        .await
        .unwrap();
    let view: EmojiReactionBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Counts aggregate, but the slot is per caller
    assert_eq!(view.good_count, 1);
    assert_eq!(view.soso_count, 1);
    assert_eq!(view.emoji.as_deref(), Some("GOOD"));
}

#[tokio::test]
async fn test_emoji_repeated_add_keeps_one_slot() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let tx = server.seed_transaction(10, challenge.id, user.id).await;
    let token = server.token_for("01011110000");
    let path = format!("/api/v1/shared-transactions/{}/emoji", tx.id);

    server
        .post_auth(&path, &token, &EmojiBody::good())
        .await
        .unwrap();
    let response = server
        .post_auth(&path, &token, &EmojiBody::soso())
        .await
        .unwrap();
    let view: EmojiReactionBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(view.good_count, 0);
    assert_eq!(view.soso_count, 1);
    assert_eq!(view.emoji.as_deref(), Some("SOSO"));
}

#[tokio::test]
async fn test_emoji_unknown_transaction() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.seed_user(100, "01011110000", "u1").await;
    let token = server.token_for("01011110000");

    let response = server
        .post_auth(
            "/api/v1/shared-transactions/99/emoji",
            &token,
            &EmojiBody::good(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.error.code, "UNKNOWN_SHARED_TRANSACTION");
    assert!(server.publisher.is_empty());
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comments_append_and_list() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let tx = server.seed_transaction(10, challenge.id, user.id).await;
    let token = server.token_for("01011110000");
    let path = format!("/api/v1/shared-transactions/{}/comments", tx.id);

    let first = CommentBody::cheer();
    let response = server.post_auth(&path, &token, &first).await.unwrap();
    let created: CommentBodyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.content, first.content);
    assert_eq!(created.nickname, "u1");

    let second = CommentBody::unique();
    server.post_auth(&path, &token, &second).await.unwrap();

    // Oldest first
    let response = server.get_auth(&path, &token).await.unwrap();
    let list: CommentListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.comments[0].content, first.content);
    assert_eq!(list.comments[1].content, second.content);

    // Detail reflects the new comment count
    let response = server
        .get_auth(&format!("/api/v1/shared-transactions/{}", tx.id), &token)
        .await
        .unwrap();
    let detail: TransactionDetailBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.comment_count, 2);
}

#[tokio::test]
async fn test_comment_rejects_too_long_content() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.seed_user(100, "01011110000", "u1").await;
    let challenge = server.seed_challenge(1, &[user.id]).await;
    let tx = server.seed_transaction(10, challenge.id, user.id).await;
    let token = server.token_for("01011110000");

    let body = CommentBody {
        content: "a".repeat(301),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/shared-transactions/{}/comments", tx.id),
            &token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_comment_unknown_transaction() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.seed_user(100, "01011110000", "u1").await;
    let token = server.token_for("01011110000");

    let response = server
        .post_auth(
            "/api/v1/shared-transactions/99/comments",
            &token,
            &CommentBody::cheer(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
