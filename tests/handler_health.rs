mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_registry_check() {
    let server = common::seeded_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(json["checks"]["registry"]["message"], "1 published apps");
}

#[tokio::test]
async fn test_health_on_empty_store() {
    let server = common::empty_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["checks"]["registry"]["message"],
        "0 published apps"
    );
}
