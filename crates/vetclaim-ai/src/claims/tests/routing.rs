use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::claims::domain::{Claim, ClaimCondition};
use crate::claims::router::{analyze_handler, claims_router};

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialise body")))
        .expect("valid request")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("valid request")
}

fn ptsd_claim_json() -> Value {
    serde_json::to_value(Claim::new(vec![documented_ptsd()])).expect("claim serialises")
}

#[tokio::test]
async fn analyze_route_returns_result() {
    let router = claims_router(claims_state());

    let response = router
        .oneshot(post_json("/api/v1/claims/analyze", &ptsd_claim_json()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_success_probability"], 95);
    assert_eq!(payload["potential_rating"]["combined"], 50);
    assert_eq!(payload["estimated_timeline"]["months"], 4);
}

#[tokio::test]
async fn analyze_route_rejects_partial_conditions() {
    let router = claims_router(claims_state());
    let body = json!({
        "conditions": [{ "condition_id": "tinnitus" }],
        "has_appeals": false,
        "recent_separation": false
    });

    let response = router
        .oneshot(post_json("/api/v1/claims/analyze", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_route_rejects_unknown_conditions() {
    let router = claims_router(claims_state());
    let body = serde_json::to_value(Claim::new(vec![ClaimCondition::new("frostbite")]))
        .expect("claim serialises");

    let response = router
        .oneshot(post_json("/api/v1/claims/analyze", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("frostbite"));
}

#[tokio::test]
async fn analyze_handler_can_be_called_directly() {
    let claim = Claim::new(vec![ClaimCondition::new("hypertension")]);

    let response = analyze_handler(State(claims_state()), Json(claim))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_success_probability"], 10);
}

#[tokio::test]
async fn combined_rating_route_combines_and_validates() {
    let router = claims_router(claims_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/ratings/combined",
            &json!({ "ratings": [50, 50] }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "combined": 80, "individual": [50, 50] }));

    let response = router
        .oneshot(post_json(
            "/api/v1/ratings/combined",
            &json!({ "ratings": [50, 45] }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn condition_routes_search_and_fetch() {
    let router = claims_router(claims_state());

    let response = router
        .clone()
        .oneshot(get("/api/v1/conditions?q=sleep"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let found = payload.as_array().expect("array payload");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], "sleep_apnea");

    let response = router
        .clone()
        .oneshot(get("/api/v1/conditions"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(12));

    let response = router
        .clone()
        .oneshot(get("/api/v1/conditions/ptsd"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["diagnostic_code"], "9411");
    assert_eq!(payload["average_rating"], 50);

    let response = router
        .oneshot(get("/api/v1/conditions/frostbite"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn case_law_route_ranks_matches() {
    let router = claims_router(claims_state());

    let response = router
        .clone()
        .oneshot(get("/api/v1/caselaw?q=nexus%20opinion"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["case"]["title"], "Nieves-Rodriguez v. Peake");
    assert_eq!(payload[0]["score"], 2);

    let response = router
        .oneshot(get("/api/v1/caselaw?condition=tinnitus&limit=1"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    let found = payload.as_array().expect("array payload");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["case"]["id"], "walker-2013");
}

#[tokio::test]
async fn report_route_renders_requested_format() {
    let router = claims_router(claims_state());

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/claims/report?format=csv",
            &ptsd_claim_json(),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let body = read_text_body(response).await;
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("condition_id,condition_name,success_probability,evidence_score,average_rating,evidence_complete,gap_count,weaknesses")
    );
    assert!(lines.next().expect("ptsd row").starts_with("ptsd,"));

    let response = router
        .clone()
        .oneshot(post_json("/api/v1/claims/report", &ptsd_claim_json()))
        .await
        .expect("route executes");
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_success_probability"], 95);

    let response = router
        .oneshot(post_json(
            "/api/v1/claims/report?format=pdf",
            &ptsd_claim_json(),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
