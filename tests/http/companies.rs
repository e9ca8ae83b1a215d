//! Companies controller over HTTP.

use std::sync::atomic::Ordering;

use serde_json::{json, Value};

use company_employees::presentation::ErrorDetails;

use crate::support::{acme, create_company, start_counting_server, start_server};

#[tokio::test]
async fn health_lists_registered_requests() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["requests"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/companies"))
        .json(&acme())
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
    let id = created["id"].as_str().unwrap();
    assert_eq!(location, format!("/api/companies/{id}"));
    assert_eq!(created["name"], "Acme");
    assert_eq!(created["address"], "1 Road");
    assert_eq!(created["country"], "US");

    let resp = client.get(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_nested_employees() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let body = json!({
        "name": "Acme",
        "address": "1 Road",
        "country": "US",
        "employees": [
            { "name": "Ann", "age": 30, "position": "Engineer" },
            { "name": "Bob", "age": 41, "position": "Manager" }
        ]
    });
    let company = create_company(&client, &base, body).await;
    let id = company["id"].as_str().unwrap();

    let employees: Vec<Value> = client
        .get(format!("{base}/api/companies/{id}/employees"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["name"], "Ann");
    assert_eq!(employees[1]["name"], "Bob");
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for name in ["Zeta", "Acme", "Mango"] {
        create_company(
            &client,
            &base,
            json!({ "name": name, "address": "x", "country": "y" }),
        )
        .await;
    }

    let companies: Vec<Value> = client
        .get(format!("{base}/api/companies"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = companies.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Acme", "Mango", "Zeta"]);
}

#[tokio::test]
async fn missing_body_is_rejected_before_dispatch() {
    let (base, calls) = start_counting_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/companies"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let error: ErrorDetails = resp.json().await.unwrap();
    assert_eq!(error.status_code, 400);
    assert!(error.message.contains("CompanyForCreationDto object is null"));

    let resp = client
        .post(format!("{base}/api/companies"))
        .header("content-type", "application/json")
        .body("null")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .put(format!("{base}/api/companies/{}", uuid_string()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    assert_eq!(calls.create_company.load(Ordering::SeqCst), 0);
    assert_eq!(calls.update_company.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_json_body_is_unsupported_media_type() {
    let (base, calls) = start_counting_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/companies"))
        .header("content-type", "text/plain")
        .body(acme().to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 415);
    let error: ErrorDetails = resp.json().await.unwrap();
    assert_eq!(error.status_code, 415);

    let resp = client
        .put(format!("{base}/api/companies/{}", uuid_string()))
        .header("content-type", "application/xml")
        .body("<company/>")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 415);

    assert_eq!(calls.create_company.load(Ordering::SeqCst), 0);
    assert_eq!(calls.update_company.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_body_is_dispatched_once() {
    let (base, calls) = start_counting_server().await;
    let client = reqwest::Client::new();

    create_company(&client, &base, acme()).await;
    assert_eq!(calls.create_company.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn update_replaces_fields() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let company = create_company(&client, &base, acme()).await;
    let id = company["id"].as_str().unwrap();

    let resp = client
        .put(format!("{base}/api/companies/{id}"))
        .json(&json!({ "name": "Acme Corp", "address": "2 Street", "country": "CA" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let fetched: Value = client
        .get(format!("{base}/api/companies/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Acme Corp");
    assert_eq!(fetched["address"], "2 Street");
    assert_eq!(fetched["country"], "CA");
}

#[tokio::test]
async fn update_unknown_company_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();
    let id = uuid_string();

    let resp = client
        .put(format!("{base}/api/companies/{id}"))
        .json(&acme())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let error: ErrorDetails = resp.json().await.unwrap();
    assert_eq!(
        error.message,
        format!("The company with id: {id} doesn't exist in the database.")
    );
}

#[tokio::test]
async fn get_unknown_company_is_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/companies/{}", uuid_string()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn non_guid_id_does_not_match() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/companies/not-a-guid"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/api/companies/not-a-guid"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_removes_company() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let company = create_company(&client, &base, acme()).await;
    let id = company["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{base}/api/companies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{base}/api/companies/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_unknown_company_still_returns_no_content() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/api/companies/{}", uuid_string()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
}

fn uuid_string() -> String {
    uuid::Uuid::new_v4().to_string()
}
