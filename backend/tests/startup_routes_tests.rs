//! End-to-end tests for the service info, startup, content and analysis
//! endpoints, driven through the real router.

#![cfg(feature = "http-server")]

use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::{send, test_app};

#[tokio::test]
async fn test_root_reports_version() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "FundSpark AI Backend API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_health_counts_startups_and_investors() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    send(&app, "POST", "/api/investors", Some(json!({"name": "Jane"}))).await;
    send(&app, "POST", "/api/investors", Some(json!({"name": "Joe"}))).await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "startups_count": 1, "investors_count": 2})
    );
}

#[tokio::test]
async fn test_create_startup_assigns_id_and_timestamp() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/startups",
        Some(json!({"name": "Acme", "industry": "fintech"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Acme");
    assert_eq!(body["industry"], "fintech");
    assert!(body["website"].is_null());
    let created_at = body["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_startups_listed_in_creation_order() {
    let app = test_app();
    for name in ["Alpha", "Beta", "Gamma"] {
        send(&app, "POST", "/api/startups", Some(json!({"name": name}))).await;
    }

    let (status, body) = send(&app, "GET", "/api/startups", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<(i64, String)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["id"].as_i64().unwrap(), s["name"].as_str().unwrap().to_string()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (1, "Alpha".to_string()),
            (2, "Beta".to_string()),
            (3, "Gamma".to_string())
        ]
    );
}

#[tokio::test]
async fn test_create_startup_without_name_is_unprocessable() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/api/startups", Some(json!({"industry": "ai"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["detail"].as_str().unwrap().contains("name"));

    let (_, list) = send(&app, "GET", "/api/startups", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_missing_name_is_reported_by_field() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/api/startups", Some(json!({"industry": "ai"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "name");
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("missing field"));
}

#[tokio::test]
async fn test_mistyped_name_is_reported_by_field() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/api/startups", Some(json!({"name": 5}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_startup_with_empty_name_is_unprocessable() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/api/startups", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "name");
}

#[tokio::test]
async fn test_whitespace_name_is_accepted() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/api/startups", Some(json!({"name": "  "}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "  ");
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let app = test_app();
    let name = "x".repeat(2 * 1024 * 1024);
    let (status, body) = send(&app, "POST", "/api/startups", Some(json!({"name": name}))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");

    let (_, list) = send(&app, "GET", "/api/startups", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_startup_with_malformed_json_is_unprocessable() {
    let app = test_app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/startups")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_unknown_startup_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/api/startups/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Startup not found");
}

#[tokio::test]
async fn test_non_numeric_startup_id_is_unprocessable() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/api/startups/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_add_and_list_content() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;

    let (status, item) = send(
        &app,
        "POST",
        "/api/startups/1/content",
        Some(json!({"source_type": "manual", "text": "We build X"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["id"], 1);
    assert_eq!(item["startup_id"], 1);
    assert_eq!(item["source_type"], "manual");
    assert!(item["source_identifier"].is_null());

    let (status, list) = send(&app, "GET", "/api/startups/1/content", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["text"], "We build X");
}

#[tokio::test]
async fn test_content_for_unknown_startup_does_not_advance_counter() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/startups/1/content",
        Some(json!({"source_type": "manual", "text": "orphan"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Startup not found");

    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    let (_, item) = send(
        &app,
        "POST",
        "/api/startups/1/content",
        Some(json!({"source_type": "document", "source_identifier": "deck.pdf", "text": "t"})),
    )
    .await;
    assert_eq!(item["id"], 1);
    assert_eq!(item["source_identifier"], "deck.pdf");
}

#[tokio::test]
async fn test_content_without_text_is_unprocessable() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/startups/1/content",
        Some(json!({"source_type": "manual"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_content_of_unknown_startup_is_not_found() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/api/startups/3/content", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_content_twice_is_idempotent() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    for text in ["keep", "drop"] {
        send(
            &app,
            "POST",
            "/api/startups/1/content",
            Some(json!({"source_type": "manual", "text": text})),
        )
        .await;
    }

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", "/api/startups/1/content/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Content deleted successfully");
    }

    let (_, list) = send(&app, "GET", "/api/startups/1/content", None).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_delete_unknown_content_is_silent() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    let (status, body) = send(&app, "DELETE", "/api/startups/1/content/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Content deleted successfully");
}

#[tokio::test]
async fn test_delete_content_of_unknown_startup_is_not_found() {
    let app = test_app();
    let (status, _) = send(&app, "DELETE", "/api/startups/1/content/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_without_content_is_bad_request() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    let (status, body) = send(&app, "POST", "/api/startups/1/analyze", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No content to analyze. Please add content first.");
    assert!(body.get("summary").is_none());
}

#[tokio::test]
async fn test_analyze_unknown_startup_is_not_found() {
    let app = test_app();
    let (status, _) = send(&app, "POST", "/api/startups/1/analyze", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_reports_name_and_count() {
    let app = test_app();
    send(&app, "POST", "/api/startups", Some(json!({"name": "Acme"}))).await;
    send(
        &app,
        "POST",
        "/api/startups/1/content",
        Some(json!({"source_type": "manual", "text": "We build X"})),
    )
    .await;

    let (status, report) = send(&app, "POST", "/api/startups/1/analyze", None).await;
    assert_eq!(status, StatusCode::OK);
    let summary = report["summary"].as_str().unwrap();
    assert!(summary.contains("Acme"));
    assert!(summary.contains("1 content piece"));
    assert_eq!(report["target_customers"].as_array().unwrap().len(), 3);
    assert_eq!(report["strengths"][3], "Active content creation (1 pieces)");
    assert_eq!(report["weaknesses"].as_array().unwrap().len(), 4);
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 5);
}
