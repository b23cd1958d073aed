mod common;

use serde_json::{Value, json};

async fn app_stats(server: &axum_test::TestServer, id: &str) -> Value {
    server.get(&format!("/api/app/{id}")).await.json::<Value>()["stats"].clone()
}

// ─── OPEN / ACTIVE USERS ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_first_open_increments_total_users() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "counter").await;

    let response = server
        .post(&format!("/api/app/{id}/use"))
        .json(&json!({ "action": "open", "userId": "user-x" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["users"], 1);
    assert_eq!(stats["dau"], 1);
}

#[tokio::test]
async fn test_repeat_open_from_same_user_does_not_count_twice() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "counter").await;

    for _ in 0..3 {
        server
            .post(&format!("/api/app/{id}/use"))
            .json(&json!({ "action": "open", "userId": "user-x" }))
            .await
            .assert_status_ok();
    }

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["users"], 1);
    assert_eq!(stats["dau"], 1);
}

#[tokio::test]
async fn test_open_without_body_counts_anonymous() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "counter").await;

    let response = server.post(&format!("/api/app/{id}/use")).await;

    response.assert_status_ok();

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["users"], 1);
}

// ─── PAY / REVENUE ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_pay_accumulates_rounded_revenue() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "shop").await;

    for amount in [10.004, 2.5] {
        server
            .post(&format!("/api/app/{id}/use"))
            .json(&json!({ "action": "pay", "userId": "user-x", "amount": amount }))
            .await
            .assert_status_ok();
    }

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["revenue"], 12.5);
}

#[tokio::test]
async fn test_pay_negative_amount_never_reduces_revenue() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "shop").await;

    server
        .post(&format!("/api/app/{id}/use"))
        .json(&json!({ "action": "pay", "userId": "user-x", "amount": 50 }))
        .await
        .assert_status_ok();
    server
        .post(&format!("/api/app/{id}/use"))
        .json(&json!({ "action": "pay", "userId": "user-x", "amount": -40 }))
        .await
        .assert_status_ok();

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["revenue"], 50.0);
}

#[tokio::test]
async fn test_pay_junk_amount_counts_as_zero() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "shop").await;

    let response = server
        .post(&format!("/api/app/{id}/use"))
        .json(&json!({ "action": "pay", "userId": "user-x", "amount": "lots" }))
        .await;

    response.assert_status_ok();

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["revenue"], 0.0);
}

#[tokio::test]
async fn test_pay_does_not_touch_active_counter() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "shop").await;

    server
        .post(&format!("/api/app/{id}/use"))
        .json(&json!({ "action": "pay", "userId": "payer", "amount": 5 }))
        .await
        .assert_status_ok();

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["dau"], 0);
    assert_eq!(stats["users"], 0);
    assert_eq!(stats["revenue"], 5.0);
}

// ─── LENIENCY / ERRORS ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_action_counts_as_open() {
    let server = common::empty_server();
    let id = common::publish_app(&server, "lenient").await;

    let response = server
        .post(&format!("/api/app/{id}/use"))
        .json(&json!({ "action": "launch", "userId": "user-x" }))
        .await;

    response.assert_status_ok();

    let stats = app_stats(&server, &id).await;
    assert_eq!(stats["users"], 1);
}

#[tokio::test]
async fn test_use_unknown_app_is_404() {
    let server = common::empty_server();

    let response = server
        .post("/api/app/ghost/use")
        .json(&json!({ "action": "open" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "App not found");
}
