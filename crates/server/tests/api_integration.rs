//! Integration tests for the REST API
//!
//! Tests the full HTTP stack including:
//! - Caller header handling
//! - Symbol lifecycle endpoints
//! - Deal endpoints
//! - Error status codes and bodies

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use warden_ports::DealRepository;
use warden_server::{Warden, WardenConfig};
use warden_storage::{InMemoryDealRepository, InMemorySymbolRepository, seed_starter_set};

const OPERATOR: &str = "1001";
const VIEWER: &str = "2002";

// ============================================================================
// Test Fixtures
// ============================================================================

fn test_config() -> WardenConfig {
    let mut config = WardenConfig::default();
    config.access.operators = vec![1001];
    config.access.viewers = vec![2002];
    config
}

/// Router over empty in-memory storage
fn create_test_router() -> Router {
    Warden::with_repositories(
        test_config(),
        Arc::new(InMemorySymbolRepository::new()),
        Arc::new(InMemoryDealRepository::new()),
    )
    .router()
}

/// Router over in-memory storage loaded with the starter set
async fn create_seeded_router() -> (Router, InMemoryDealRepository) {
    let symbols = InMemorySymbolRepository::new();
    let deals = InMemoryDealRepository::new();
    seed_starter_set(&symbols, &deals).await.unwrap();

    let router = Warden::with_repositories(
        test_config(),
        Arc::new(symbols),
        Arc::new(deals.clone()),
    )
    .router();

    (router, deals)
}

fn request(method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

// ============================================================================
// Health & Caller Identity
// ============================================================================

#[tokio::test]
async fn test_health_needs_no_caller() {
    let router = create_test_router();

    let (status, json) = send(&router, request("GET", "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_missing_caller_is_unauthenticated() {
    let router = create_test_router();

    let (status, json) = send(&router, request("GET", "/api/v1/symbols", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["kind"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_malformed_caller_is_unauthenticated() {
    let router = create_test_router();

    let (status, _) = send(
        &router,
        request("POST", "/api/v1/symbols/xyz/prepare", Some("admin"), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let router = create_test_router();

    let (status, json) = send(
        &router,
        request("POST", "/api/v1/symbols/xyz/prepare", Some(VIEWER), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["kind"], "NOT_AUTHORIZED_OPERATOR");
    assert_eq!(
        json["message"],
        "You are not authorized to perform this operation"
    );

    let (status, json) = send(
        &router,
        request("GET", "/api/v1/balances", Some(OPERATOR), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["kind"], "NOT_AUTHORIZED_VIEWER");
}

// ============================================================================
// Symbols
// ============================================================================

#[tokio::test]
async fn test_symbol_lifecycle_over_http() {
    let router = create_test_router();

    let (status, json) = send(
        &router,
        request("POST", "/api/v1/symbols/xyz/prepare", Some(OPERATOR), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({}));

    let (_, json) = send(&router, request("GET", "/api/v1/symbols", Some(VIEWER), None)).await;
    assert_eq!(json, json!([{ "symbol": "xyz", "status": "PREPARING" }]));

    for action in ["start", "suspend", "resume"] {
        let uri = format!("/api/v1/symbols/xyz/{}", action);
        let (status, _) = send(&router, request("POST", &uri, Some(OPERATOR), None)).await;
        assert_eq!(status, StatusCode::OK, "{} failed", action);
    }

    let (_, json) = send(&router, request("GET", "/api/v1/symbols", Some(VIEWER), None)).await;
    assert_eq!(json[0]["status"], "ACTIVE");

    let (status, _) = send(
        &router,
        request("POST", "/api/v1/symbols/xyz/stop", Some(OPERATOR), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&router, request("GET", "/api/v1/symbols", Some(VIEWER), None)).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_prepare_twice_conflicts() {
    let router = create_test_router();
    let prepare = || request("POST", "/api/v1/symbols/xyz/prepare", Some(OPERATOR), None);

    send(&router, prepare()).await;
    let (status, json) = send(&router, prepare()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["kind"], "ALREADY_TRADING");
    assert_eq!(json["key"], "xyz");
    assert_eq!(json["message"], "xyz is already in trading");
}

#[tokio::test]
async fn test_unknown_symbol_is_not_found() {
    let router = create_test_router();

    let (status, json) = send(
        &router,
        request("POST", "/api/v1/symbols/nope/start", Some(OPERATOR), None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["kind"], "SYMBOL_NOT_FOUND");
    assert_eq!(json["key"], "nope");
}

#[tokio::test]
async fn test_balances_include_usd_total() {
    let (router, _) = create_seeded_router().await;

    let (status, json) = send(&router, request("GET", "/api/v1/balances", Some(VIEWER), None)).await;

    assert_eq!(status, StatusCode::OK);
    let balances = json.as_array().unwrap();
    assert_eq!(balances.len(), 5);
    let total = &balances[4];
    assert_eq!(total["symbol"], "usd");
    assert_eq!(total["amount"], "176");
}

#[tokio::test]
async fn test_set_and_get_limits() {
    let (router, _) = create_seeded_router().await;

    let (status, _) = send(
        &router,
        request(
            "PUT",
            "/api/v1/limits",
            Some(OPERATOR),
            Some(json!({ "limits": [{ "symbol": "adausdt", "limit": "250.5" }] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&router, request("GET", "/api/v1/limits", Some(VIEWER), None)).await;
    let ada = json
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["symbol"] == "adausdt")
        .unwrap();
    assert_eq!(ada["limit"], "250.5");
}

#[tokio::test]
async fn test_set_limits_unknown_symbol() {
    let (router, _) = create_seeded_router().await;

    let (status, json) = send(
        &router,
        request(
            "PUT",
            "/api/v1/limits",
            Some(OPERATOR),
            Some(json!({ "limits": [{ "symbol": "btcusdt", "limit": 5 }] })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["key"], "btcusdt");
}

// ============================================================================
// Deals
// ============================================================================

#[tokio::test]
async fn test_list_active_deals() {
    let (router, _) = create_seeded_router().await;

    let (status, json) = send(
        &router,
        request("GET", "/api/v1/deals/active?all=true", Some(VIEWER), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let deals = json.as_array().unwrap();
    assert_eq!(deals.len(), 3);
    assert!(deals.iter().any(|d| d["id"] == "linkusdt-3492445345"));
}

#[tokio::test]
async fn test_unimplemented_deal_queries() {
    let (router, _) = create_seeded_router().await;

    let (status, json) = send(
        &router,
        request(
            "GET",
            "/api/v1/deals/active?deal_ids=adausdt-1657483456",
            Some(VIEWER),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(json["kind"], "NOT_IMPLEMENTED");

    let (status, _) = send(
        &router,
        request("GET", "/api/v1/deals/potential", Some(VIEWER), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_close_selected_deals() {
    let (router, deals) = create_seeded_router().await;

    let (status, json) = send(
        &router,
        request(
            "POST",
            "/api/v1/deals/close",
            Some(OPERATOR),
            Some(json!({ "deal_ids": ["adausdt-1657483456", "missing", "linkusdt-3492445345"] })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["kind"], "DEAL_NOT_FOUND");
    assert_eq!(json["key"], "missing");
    assert!(deals.get("adausdt-1657483456").await.unwrap().is_none());
    assert!(deals.get("linkusdt-3492445345").await.unwrap().is_some());
}

#[tokio::test]
async fn test_close_all_deals() {
    let (router, deals) = create_seeded_router().await;

    let (status, _) = send(
        &router,
        request(
            "POST",
            "/api/v1/deals/close",
            Some(OPERATOR),
            Some(json!({ "all": true })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(deals.get_all().await.unwrap().is_empty());
}
