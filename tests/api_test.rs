//! Integration tests for API endpoints.
//!
//! The router is served from the bundled JSON fixtures, so no database
//! is required.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use lightbnb::api::{create_router, AppState};
use lightbnb::infra::FixtureStore;

async fn app() -> Router {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let store = FixtureStore::open(&dir)
        .await
        .expect("bundled fixtures load")
        .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    create_router(AppState::from_store(Arc::new(store)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn property_ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_fixture_source() {
    let app = app().await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["source"], "fixtures");
}

// =============================================================================
// Properties
// =============================================================================

#[tokio::test]
async fn properties_default_to_cheapest_first() {
    let app = app().await;
    let (status, body) = get(&app, "/api/properties").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(property_ids(&body), vec![5, 3, 4, 2, 1]);
    assert_eq!(body[1]["average_rating"], 4.5);
}

#[tokio::test]
async fn properties_filter_by_city() {
    let app = app().await;
    let (status, body) = get(&app, "/api/properties?city=Vancouver").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(property_ids(&body), vec![5]);
    assert_eq!(body[0]["city"], "Vancouver");
}

#[tokio::test]
async fn properties_filter_by_owner() {
    let app = app().await;
    let (_, body) = get(&app, "/api/properties?owner_id=1").await;
    assert_eq!(property_ids(&body), vec![2, 1]);
}

#[tokio::test]
async fn properties_price_range_is_in_units() {
    let app = app().await;
    let (_, body) = get(
        &app,
        "/api/properties?minimum_price_per_night=500&maximum_price_per_night=900",
    )
    .await;
    assert_eq!(property_ids(&body), vec![4, 2]);
}

#[tokio::test]
async fn properties_minimum_rating_with_limit() {
    let app = app().await;
    let (_, body) = get(&app, "/api/properties?minimum_rating=4&limit=2").await;
    assert_eq!(property_ids(&body), vec![5, 3]);
}

#[tokio::test]
async fn properties_blank_form_fields_are_ignored() {
    let app = app().await;
    let (status, body) = get(
        &app,
        "/api/properties?city=&minimum_price_per_night=&maximum_price_per_night=&minimum_rating=",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(property_ids(&body).len(), 5);
}

#[tokio::test]
async fn properties_zero_limit_rejected() {
    let app = app().await;
    let (status, body) = get(&app, "/api/properties?limit=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn properties_malformed_filter_rejected() {
    let app = app().await;
    let (status, body) = get(&app, "/api/properties?minimum_rating=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_property_then_find_it() {
    let app = app().await;
    let payload = json!({
        "owner_id": 2,
        "title": "Lakeside cabin",
        "cost_per_night": 15000,
        "street": "12 Shore Rd",
        "city": "Kelowna",
        "province": "British Columbia",
        "post_code": "V1Y 1A1",
        "country": "Canada",
        "parking_spaces": 2,
        "number_of_bathrooms": 1,
        "number_of_bedrooms": 3
    });

    let (status, body) = send(&app, Method::POST, "/api/properties", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 6);
    assert_eq!(body["active"], true);

    let (_, body) = get(&app, "/api/properties?city=Kelowna").await;
    assert_eq!(property_ids(&body), vec![6]);
    assert_eq!(body[0]["average_rating"], Value::Null);
}

#[tokio::test]
async fn create_property_rejects_invalid_payload() {
    let app = app().await;
    let payload = json!({
        "owner_id": 2,
        "title": "",
        "cost_per_night": -5,
        "street": "12 Shore Rd",
        "city": "Kelowna",
        "province": "British Columbia",
        "post_code": "V1Y 1A1",
        "country": "Canada",
        "parking_spaces": 0,
        "number_of_bathrooms": 1,
        "number_of_bedrooms": 1
    });

    let (status, body) = send(&app, Method::POST, "/api/properties", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Reservations
// =============================================================================

#[tokio::test]
async fn reservations_list_past_stays_oldest_first() {
    let app = app().await;
    let (status, body) = get(&app, "/api/reservations?guest_id=1").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["reservation"]["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 5, 6]);
    assert_eq!(body[0]["property"]["city"], "Vancouver");
    assert_eq!(body[0]["average_rating"], 5.0);
}

#[tokio::test]
async fn reservations_respect_limit() {
    let app = app().await;
    let (_, body) = get(&app, "/api/reservations?guest_id=1&limit=1").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn reservations_require_guest_id() {
    let app = app().await;
    let (status, _) = get(&app, "/api/reservations").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn get_user_by_id() {
    let app = app().await;

    let (status, body) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Devin Sanders");
    assert!(body.get("password").is_none());

    let (status, body) = get(&app, "/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_user_by_email_ignores_case() {
    let app = app().await;
    let (status, body) = get(&app, "/users?email=TristanJacobs@Gmail.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn get_user_by_email_requires_email() {
    let app = app().await;
    let (status, _) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_user_then_look_up() {
    let app = app().await;
    let payload = json!({
        "name": "Kai Moreno",
        "email": "kai@example.com",
        "password": "correct horse"
    });

    let (status, body) = send(&app, Method::POST, "/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);
    assert!(body.get("password").is_none());

    let (status, body) = get(&app, "/users?email=KAI@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Kai Moreno");
}

#[tokio::test]
async fn create_user_duplicate_email_conflicts() {
    let app = app().await;
    let payload = json!({
        "name": "Someone Else",
        "email": "ALLISONJACKSON@mail.com",
        "password": "password123"
    });

    let (status, body) = send(&app, Method::POST, "/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "User already exists");
}

#[tokio::test]
async fn create_user_short_password_rejected() {
    let app = app().await;
    let payload = json!({
        "name": "Kai Moreno",
        "email": "kai@example.com",
        "password": "short"
    });

    let (status, body) = send(&app, Method::POST, "/users", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
