//! Employees controller over HTTP.

use std::sync::atomic::Ordering;

use serde_json::{json, Value};

use crate::support::{acme, create_company, start_counting_server, start_server};

fn ann() -> Value {
    json!({ "name": "Ann", "age": 30, "position": "Engineer" })
}

#[tokio::test]
async fn employee_lifecycle() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let company = create_company(&client, &base, acme()).await;
    let company_id = company["id"].as_str().unwrap();

    let resp = client
        .post(format!("{base}/api/companies/{company_id}/employees"))
        .json(&ann())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let location = resp
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(
        location,
        format!("/api/companies/{company_id}/employees/{id}")
    );
    assert_eq!(created["age"], 30);

    let fetched: Value = client
        .get(format!("{base}{location}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let resp = client
        .put(format!("{base}{location}"))
        .json(&json!({ "name": "Ann", "age": 31, "position": "Lead" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let fetched: Value = client
        .get(format!("{base}{location}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["age"], 31);
    assert_eq!(fetched["position"], "Lead");

    let resp = client.delete(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client.get(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn unknown_company_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let company_id = uuid::Uuid::new_v4();

    let resp = client
        .get(format!("{base}/api/companies/{company_id}/employees"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!("{base}/api/companies/{company_id}/employees"))
        .json(&ann())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn employee_of_another_company_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let first = create_company(&client, &base, acme()).await;
    let second = create_company(
        &client,
        &base,
        json!({ "name": "Globex", "address": "2 Lane", "country": "UK" }),
    )
    .await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    let employee: Value = client
        .post(format!("{base}/api/companies/{first_id}/employees"))
        .json(&ann())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let employee_id = employee["id"].as_str().unwrap();

    let resp = client
        .get(format!(
            "{base}/api/companies/{second_id}/employees/{employee_id}"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn missing_body_is_rejected_before_dispatch() {
    let (base, calls) = start_counting_server().await;
    let client = reqwest::Client::new();

    let company = create_company(&client, &base, acme()).await;
    let company_id = company["id"].as_str().unwrap();
    let employee_id = uuid::Uuid::new_v4();

    let resp = client
        .post(format!("{base}/api/companies/{company_id}/employees"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .put(format!(
            "{base}/api/companies/{company_id}/employees/{employee_id}"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    assert_eq!(calls.create_employee.load(Ordering::SeqCst), 0);
    assert_eq!(calls.update_employee.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn deleting_company_removes_its_employees() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let company = create_company(
        &client,
        &base,
        json!({
            "name": "Acme",
            "address": "1 Road",
            "country": "US",
            "employees": [{ "name": "Ann", "age": 30, "position": "Engineer" }]
        }),
    )
    .await;
    let company_id = company["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{base}/api/companies/{company_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{base}/api/companies/{company_id}/employees"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
