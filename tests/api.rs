//! Route-level behavior over a bound server.

use request_tester_app::relay::HttpRelayService;
use request_tester_app::routes::{self, AppState};
use request_tester_app::store::MemoryStore;
use std::sync::Arc;

async fn spawn_app() -> String {
    let state = AppState {
        relay: HttpRelayService::arc(),
        store: Arc::new(MemoryStore::new()),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn malformed_relay_payload_is_classified_as_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    // Wrong field type and a method outside the closed enumeration.
    let response = client
        .post(format!("{}/api/relay", base))
        .header("content-type", "application/json")
        .body(r#"{"url": 12, "method": "TRACE"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body.get("error").and_then(|e| e.as_str()).is_some(),
        "expected an error field, got {}",
        body
    );
}

#[tokio::test]
async fn non_json_relay_payload_is_classified_as_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/relay", base))
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn health_endpoint_answers() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn tester_page_is_not_immutably_cached() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    // Any unknown path falls back to the tester page, which must
    // revalidate so returning browsers pick up UI updates.
    let response = client
        .get(format!("{}/anything", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let cache_control = response
        .headers()
        .get("cache-control")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(cache_control, "no-cache");
}
