//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const SHARED_PASSWORD: &str = "change-me";

/// Helper to get a session token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": SHARED_PASSWORD }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": SHARED_PASSWORD }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_password() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/feed", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_feed() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/feed", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].is_array());
    assert!(body["total"].is_number());
    // Feed is capped at the 50 most recent items
    assert!(body["items"].as_array().unwrap().len() <= 50);
}

#[tokio::test]
#[ignore]
async fn test_list_vacations() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/vacations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_equipment_round_trip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let serial = format!("TEST-{}", uuid_suffix());

    // Create an asset
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "serial_number": serial,
            "model": "mac_air",
            "assigned_to": "Test Person",
            "insured": true,
            "purchase_date": "2024-01-01",
            "purchase_cost": 25000.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    // Read it back: acquisition facts survive unchanged
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, serial))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["serial_number"], serial.as_str());
    assert_eq!(body["model"], "mac_air");
    assert_eq!(body["purchase_date"], "2024-01-01");
    assert_eq!(body["depreciation"]["yearly_depreciation"], 5000.0);

    // Duplicate serial must be rejected as a conflict
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "serial_number": serial,
            "model": "lenovo",
            "purchase_date": "2024-01-01",
            "purchase_cost": 20000.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_equipment_creation_cost_threshold() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "serial_number": format!("TEST-{}", uuid_suffix()),
            "model": "lenovo",
            "purchase_date": "2024-01-01",
            "purchase_cost": 500.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_depreciation_schedule() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let serial = format!("TEST-{}", uuid_suffix());

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "serial_number": serial,
            "model": "mac_pro",
            "purchase_date": "2024-01-01",
            "purchase_cost": 25000.0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/equipment/{}/depreciation", BASE_URL, serial))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let schedule = body["schedule"].as_array().expect("No schedule");
    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule[0]["depreciation"], 5000.0);
    assert_eq!(schedule[0]["book_value"], 20000.0);
    assert_eq!(schedule[4]["book_value"], 0.0);
}

#[tokio::test]
#[ignore]
async fn test_review_cycle() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Needs at least one vacation request in the database
    let response = client
        .get(format!("{}/vacations", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let Some(first) = body["items"].as_array().and_then(|a| a.first()) else {
        return;
    };
    let id = first["id"].as_str().expect("No request ID").to_string();

    let response = client
        .post(format!("{}/vacations/{}/review", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "current": "unreviewed" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["review_status"], "in_progress");
}

#[tokio::test]
#[ignore]
async fn test_news_crud() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Create
    let response = client
        .post(format!("{}/news", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "published_for": "2025-08-01",
            "title": "Test announcement",
            "content": "Hello",
            "type": "text"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No news ID").to_string();
    assert_eq!(body["is_active"], true);

    // Toggle visibility
    let response = client
        .put(format!("{}/news/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "is_active": false }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["is_active"], false);

    // Delete
    let response = client
        .delete(format!("{}/news/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

fn uuid_suffix() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos()
        .to_string()
}
