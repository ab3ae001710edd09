use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::underwriting::directory::StaticBorrowerDirectory;
use crate::underwriting::router::{borrower_handler, default_handler, evaluate_handler};
use crate::underwriting::service::{DefaultClaimRequest, EvaluationRequest, UnderwritingService};
use crate::underwriting::{BorrowerId, LoanTenure};

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_returns_payload() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/evaluations",
            json!({ "borrower_id": "1002", "loan_amount": 50000.0, "tenure": "60_days" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], json!("success"));
    assert_eq!(payload["borrower_id"], json!("1002"));
    assert_eq!(payload["score"], json!(67.3));
    assert_eq!(payload["risk_band"], json!("Medium Risk"));
    assert_eq!(payload["approved"], json!(true));
    assert_eq!(payload["premium_ngn"], json!(2500.0));
    assert_eq!(payload["tenure"], json!("60_days"));
}

#[tokio::test]
async fn evaluate_handler_returns_not_found_for_unknown_borrower() {
    let (service, _) = build_service();

    let response = evaluate_handler(
        State(Arc::new(service)),
        axum::Json(EvaluationRequest {
            borrower_id: BorrowerId::new("0000"),
            loan_amount: 5_000.0,
            tenure: LoanTenure::default(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("Borrower not found in database."));
    assert_eq!(payload["borrower_id"], json!("0000"));
}

#[tokio::test]
async fn evaluate_handler_returns_unprocessable_for_bad_amount() {
    let (service, _) = build_service();

    let response = evaluate_handler(
        State(Arc::new(service)),
        axum::Json(EvaluationRequest {
            borrower_id: BorrowerId::new("1001"),
            loan_amount: 0.0,
            tenure: LoanTenure::default(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn default_route_returns_event_and_alerts() {
    let (service, alerts) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/defaults",
            json!({ "borrower_id": "1001", "loan_amount": 50000.0 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["event"], json!("loan_default"));
    assert_eq!(payload["payout_amount"], json!(40000.0));
    assert_eq!(payload["residual_loss"], json!(10000.0));
    assert_eq!(payload["borrower_action"], json!("flagged_global"));
    assert_eq!(payload["network_update"], json!(true));
    assert_eq!(alerts.events().len(), 1);
}

#[tokio::test]
async fn default_handler_conflicts_for_rejected_borrower() {
    let (service, alerts) = build_service();

    let response = default_handler(
        State(Arc::new(service)),
        axum::Json(DefaultClaimRequest {
            borrower_id: BorrowerId::new("1003"),
            loan_amount: 50_000.0,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk_band"], json!("Network Blacklist"));
    assert!(alerts.events().is_empty());
}

#[tokio::test]
async fn default_handler_reports_alert_outage_as_internal_error() {
    let service = UnderwritingService::new(
        Arc::new(StaticBorrowerDirectory::demo()),
        Arc::new(OfflineAlerts),
    );

    let response = default_handler(
        State(Arc::new(service)),
        axum::Json(DefaultClaimRequest {
            borrower_id: BorrowerId::new("1002"),
            loan_amount: 1_000.0,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn borrower_handler_returns_record() {
    let (service, _) = build_service();

    let response = borrower_handler(State(Arc::new(service)), Path("1003".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], json!("Emeka Johnson (Bad)"));
    assert_eq!(payload["profile"]["network_flag"], json!(true));
}

#[tokio::test]
async fn roster_route_lists_borrowers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/borrowers")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn malformed_body_is_rejected_by_extractor() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/evaluations",
            json!({ "borrower_id": "1001" }),
        ))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}
