//! End-to-end tests for the REST surface.
//!
//! Each test spawns the app router on an ephemeral port and drives it
//! over real HTTP.

use leaseify_api::{create_app, AppState};
use serde_json::{json, Value};

async fn spawn_api() -> String {
    let app = create_app(AppState::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn create_property(client: &reqwest::Client, base: &str) -> Value {
    let resp = client
        .post(format!("{}/api/v1/properties", base))
        .json(&json!({
            "name": "Maple Court",
            "address": "12 Main St",
            "kind": "Apartment",
            "unit_count": 4,
            "monthly_rent_cents": 150000,
            "notes": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

async fn create_tenant(client: &reqwest::Client, base: &str, name: &str) -> Value {
    let resp = client
        .post(format!("{}/api/v1/tenants", base))
        .json(&json!({
            "full_name": name,
            "email": "jordan@example.com",
            "phone": null,
            "lease_id": null,
            "move_in_date": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn property_crud_roundtrip() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let created = create_property(&client, &base).await;
    let id = created["property_id"].as_str().unwrap().to_string();

    // List contains exactly the new record.
    let list: Value = client
        .get(format!("{}/api/v1/properties", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["total"], 1);
    assert_eq!(list["properties"][0]["property_id"], created["property_id"]);

    // Patch a field and read it back.
    let patched: Value = client
        .patch(format!("{}/api/v1/properties/{}", base, id))
        .json(&json!({ "name": "Maple Court East" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(patched["name"], "Maple Court East");
    assert_eq!(patched["address"], "12 Main St");

    // Delete, then the record is gone.
    let resp = client
        .delete(format!("{}/api/v1/properties/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{}/api/v1/properties/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains(&id));
}

#[tokio::test]
async fn create_with_missing_field_returns_field_errors() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/v1/tenants", base))
        .json(&json!({
            "full_name": "   ",
            "email": "jordan@example.com",
            "phone": null,
            "lease_id": null,
            "move_in_date": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "MISSING_FIELD");
    assert_eq!(body["message"], "Required field 'full_name' is missing");
    assert_eq!(body["errors"][0]["field"], "full_name");
    // Development mode carries a real stack rendering, not the placeholder.
    assert_ne!(body["stack"], "<redacted>");
    assert!(body["stack"].is_string());
}

#[tokio::test]
async fn unmatched_route_is_normalized_with_path() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/v1/reliability", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    assert_eq!(body["message"], "Not Found - /api/v1/reliability");
}

#[tokio::test]
async fn empty_update_is_rejected() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let tenant = create_tenant(&client, &base, "Jordan Vega").await;
    let id = tenant["tenant_id"].as_str().unwrap();

    let resp = client
        .patch(format!("{}/api/v1/tenants/{}", base, id))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn task_toggle_flips_completion() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let property = create_property(&client, &base).await;
    let task: Value = client
        .post(format!("{}/api/v1/tasks", base))
        .json(&json!({
            "property_id": property["property_id"],
            "title": "Fix sink",
            "description": null,
            "priority": null
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(task["is_completed"], false);
    assert_eq!(task["priority"], "Medium");

    let id = task["task_id"].as_str().unwrap();
    let toggled: Value = client
        .post(format!("{}/api/v1/tasks/{}/toggle", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["is_completed"], true);

    let toggled_back: Value = client
        .post(format!("{}/api/v1/tasks/{}/toggle", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled_back["is_completed"], false);
}

#[tokio::test]
async fn task_list_filters_by_property_and_completion() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let first = create_property(&client, &base).await;
    let second = create_property(&client, &base).await;

    for (property, title) in [(&first, "Fix sink"), (&first, "Paint hallway"), (&second, "Replace lock")] {
        let resp = client
            .post(format!("{}/api/v1/tasks", base))
            .json(&json!({
                "property_id": property["property_id"],
                "title": title,
                "description": null,
                "priority": null
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let first_id = first["property_id"].as_str().unwrap();
    let filtered: Value = client
        .get(format!("{}/api/v1/tasks?property_id={}", base, first_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered["total"], 2);

    // Complete one of the two, then filter the completed one out.
    let done_id = filtered["tasks"][0]["task_id"].as_str().unwrap();
    client
        .post(format!("{}/api/v1/tasks/{}/toggle", base, done_id))
        .send()
        .await
        .unwrap();

    let open_only: Value = client
        .get(format!(
            "{}/api/v1/tasks?property_id={}&include_completed=false",
            base, first_id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(open_only["total"], 1);
    assert_eq!(open_only["tasks"][0]["is_completed"], false);
}

#[tokio::test]
async fn lease_create_validates_dates_and_references() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let property = create_property(&client, &base).await;
    let tenant = create_tenant(&client, &base, "Jordan Vega").await;

    // Reversed dates are a validation failure.
    let resp = client
        .post(format!("{}/api/v1/leases", base))
        .json(&json!({
            "property_id": property["property_id"],
            "tenant_id": tenant["tenant_id"],
            "starts_on": "2026-09-01T00:00:00Z",
            "ends_on": "2026-08-01T00:00:00Z",
            "monthly_rent_cents": 150000,
            "deposit_cents": 150000
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // A dangling tenant reference is a 404.
    let resp = client
        .post(format!("{}/api/v1/leases", base))
        .json(&json!({
            "property_id": property["property_id"],
            "tenant_id": "00000000-0000-0000-0000-000000000000",
            "starts_on": "2026-09-01T00:00:00Z",
            "ends_on": "2027-08-31T00:00:00Z",
            "monthly_rent_cents": 150000,
            "deposit_cents": 150000
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // And the valid one lands in Draft.
    let lease: Value = client
        .post(format!("{}/api/v1/leases", base))
        .json(&json!({
            "property_id": property["property_id"],
            "tenant_id": tenant["tenant_id"],
            "starts_on": "2026-09-01T00:00:00Z",
            "ends_on": "2027-08-31T00:00:00Z",
            "monthly_rent_cents": 150000,
            "deposit_cents": 150000
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(lease["status"], "Draft");
}

#[tokio::test]
async fn payment_summary_aggregates_by_status() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let property = create_property(&client, &base).await;
    let tenant = create_tenant(&client, &base, "Jordan Vega").await;
    let lease: Value = client
        .post(format!("{}/api/v1/leases", base))
        .json(&json!({
            "property_id": property["property_id"],
            "tenant_id": tenant["tenant_id"],
            "starts_on": "2026-09-01T00:00:00Z",
            "ends_on": "2027-08-31T00:00:00Z",
            "monthly_rent_cents": 150000,
            "deposit_cents": 150000
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // One settled payment, one outstanding.
    for paid_at in [Some("2026-09-01T12:00:00Z"), None] {
        let resp = client
            .post(format!("{}/api/v1/payments", base))
            .json(&json!({
                "lease_id": lease["lease_id"],
                "amount_cents": 150000,
                "method": "BankTransfer",
                "paid_at": paid_at
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let summary: Value = client
        .get(format!("{}/api/v1/payments/summary", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["collected_cents"], 150000);
    assert_eq!(summary["outstanding_cents"], 150000);
    assert_eq!(summary["payment_count"], 2);
}

#[tokio::test]
async fn application_review_enforces_transitions() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let property = create_property(&client, &base).await;
    let application: Value = client
        .post(format!("{}/api/v1/applications", base))
        .json(&json!({
            "property_id": property["property_id"],
            "applicant_name": "Sam Okafor",
            "applicant_email": "sam@example.com"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(application["status"], "Submitted");
    let id = application["application_id"].as_str().unwrap();

    let reviewed: Value = client
        .post(format!("{}/api/v1/applications/{}/review", base, id))
        .json(&json!({ "status": "Approved" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reviewed["status"], "Approved");

    // A decided application cannot be re-reviewed.
    let resp = client
        .post(format!("{}/api/v1/applications/{}/review", base, id))
        .json(&json!({ "status": "Rejected" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "STATE_CONFLICT");
}

#[tokio::test]
async fn tenant_score_starts_full_without_history() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let tenant = create_tenant(&client, &base, "Jordan Vega").await;
    let id = tenant["tenant_id"].as_str().unwrap();

    let score: Value = client
        .get(format!("{}/api/v1/tenants/{}/score", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(score["score"], 100);
    assert_eq!(score["on_time_payments"], 0);
    assert_eq!(score["tenant_id"], tenant["tenant_id"]);
}
